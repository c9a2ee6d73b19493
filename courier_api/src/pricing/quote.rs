use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use courier_routing::{problem::order::Order, solver::quote::Leg};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct ApiLeg {
    from: String,
    to: String,
    distance: f64,
    mass: f64,
    rate: f64,
    cost: f64,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    total_cost: f64,
    total_distance: f64,
    route: Vec<String>,
    legs: Vec<ApiLeg>,
}

pub async fn quote_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Order>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(order) = body?;
    let quote = super::quote_order(&state, &order)?;
    let graph = state.reference_data.graph();
    let name = |center| graph.center(center).external_id().to_owned();

    let legs = quote
        .legs()
        .iter()
        .map(|leg: &Leg| ApiLeg {
            from: name(leg.from),
            to: name(leg.to),
            distance: leg.distance,
            mass: leg.mass,
            rate: leg.rate,
            cost: leg.cost,
        })
        .collect();

    Ok(Json(QuoteResponse {
        total_cost: quote.total_cost(),
        total_distance: quote.total_distance(),
        route: quote.route().into_iter().map(name).collect(),
        legs,
    }))
}
