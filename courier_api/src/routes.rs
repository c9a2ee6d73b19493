use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    catalog::get_catalog::get_catalog_handler,
    pricing::{minimum_cost::minimum_cost_handler, quote::quote_handler},
    state::AppState,
};

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/MinimumCostToDeliversOrder", post(minimum_cost_handler))
        .route("/quote", post(quote_handler))
        .route("/catalog", get(get_catalog_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
