pub mod pickup_plan;
pub mod quote;
pub mod routing_engine;
