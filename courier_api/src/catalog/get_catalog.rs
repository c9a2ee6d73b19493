use std::sync::Arc;

use axum::{Json, extract::State};
use courier_routing::json::types::JsonReferenceData;

use crate::state::AppState;

pub async fn get_catalog_handler(State(state): State<Arc<AppState>>) -> Json<JsonReferenceData> {
    Json(JsonReferenceData::from(&state.reference_data))
}
