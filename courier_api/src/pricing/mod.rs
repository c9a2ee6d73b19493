pub mod minimum_cost;
pub mod quote;

use courier_routing::{
    problem::order::Order,
    solver::{quote::Quote, routing_engine::RoutingEngine},
};

use crate::{error::ApiError, state::AppState};

/// Validates `order` against the shared catalog and prices its pickup walk.
fn quote_order(state: &AppState, order: &Order) -> Result<Quote, ApiError> {
    let validated = order.validate(state.reference_data.catalog())?;
    let quote = RoutingEngine::new(&state.reference_data).quote(&validated)?;

    Ok(quote)
}
