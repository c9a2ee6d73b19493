use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use courier_routing::problem::order::Order;
use serde::Serialize;
use tracing::info;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct MinimumCostResponse {
    #[serde(rename = "Min Cost")]
    min_cost: f64,
}

pub async fn minimum_cost_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Order>, JsonRejection>,
) -> Result<Json<MinimumCostResponse>, ApiError> {
    let Json(order) = body?;
    let quote = super::quote_order(&state, &order)?;

    info!(
        "Priced order of {} products: {}",
        order.len(),
        quote.total_cost()
    );

    Ok(Json(MinimumCostResponse {
        min_cost: quote.total_cost(),
    }))
}
