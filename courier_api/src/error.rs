use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_routing::problem::order::OrderError;
use courier_routing::solver::routing_engine::RoutingError;
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(error: OrderError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        match error {
            RoutingError::CostOverflow { .. } => ApiError::BadRequest(error.to_string()),
            _ => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => {
                // Details stay in the logs.
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
