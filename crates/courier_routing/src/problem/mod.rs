pub mod catalog;
pub mod center;
pub mod distance_graph;
pub mod order;
pub mod product;
pub mod reference_data;
pub mod tariff;
