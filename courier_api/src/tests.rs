use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use courier_routing::problem::reference_data::{ReferenceData, ReferenceDataBuilder};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{error::INTERNAL_ERROR_MESSAGE, routes, state::AppState};

fn test_app(reference_data: ReferenceData) -> Router {
    routes::app(Arc::new(AppState { reference_data }))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn minimum_cost(body: Value) -> (StatusCode, Value) {
    request_json(
        test_app(ReferenceData::builtin()),
        json_request(Method::POST, "/MinimumCostToDeliversOrder", body),
    )
    .await
}

#[tokio::test]
async fn test_single_product_order_costs_thirty() {
    let (status, body) = minimum_cost(json!({ "A": 1 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Min Cost": 30.0 }));
}

#[tokio::test]
async fn test_zero_quantities_cost_nothing() {
    let (status, body) = minimum_cost(json!({ "A": 0, "B": 0, "I": 0 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Min Cost"], 0.0);

    let (status, body) = minimum_cost(json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Min Cost"], 0.0);
}

#[tokio::test]
async fn test_full_order_walks_every_center() {
    let (status, body) = minimum_cost(json!({
        "A": 1, "B": 1, "C": 1, "D": 1, "E": 1, "F": 1, "G": 1, "H": 1, "I": 1
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Min Cost"], 368.0);
}

#[tokio::test]
async fn test_unknown_products_are_rejected() {
    let (status, body) = minimum_cost(json!({ "A": 1, "X": 2, "Q": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Invalid product identifiers: Q, X" })
    );
}

#[tokio::test]
async fn test_negative_quantities_are_rejected() {
    let (status, body) = minimum_cost(json!({ "A": -1, "B": 2 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Negative quantities not allowed: A" })
    );
}

#[tokio::test]
async fn test_oversized_quantities_are_rejected() {
    let (status, body) = minimum_cost(json!({ "E": 1e307 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Order is too large to price: the cost overflows on the leg leaving C2" })
    );

    let (status, body) = minimum_cost(json!({ "A": 1e308, "B": 1e308 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Order is too large to price: the cost overflows on the leg leaving C1" })
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/MinimumCostToDeliversOrder")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"A\": \"one\"}"))
        .unwrap();

    let (status, body) = request_json(test_app(ReferenceData::builtin()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_routing_failures_are_internal_errors() {
    let mut builder = ReferenceDataBuilder::default();
    builder.set_hub("HUB");
    builder.add_center("HUB");
    builder.add_center("X");
    builder.add_product("P", "X", 1.0);
    let reference_data = builder.build().unwrap();

    let (status, body) = request_json(
        test_app(reference_data),
        json_request(
            Method::POST,
            "/MinimumCostToDeliversOrder",
            json!({ "P": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
}

#[tokio::test]
async fn test_quote_lists_every_leg() {
    let (status, body) = request_json(
        test_app(ReferenceData::builtin()),
        json_request(Method::POST, "/quote", json!({ "D": 1, "G": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], json!(["C2", "L1", "C3", "L1"]));
    assert_eq!(body["total_cost"], 105.0);
    assert_eq!(body["legs"][0]["from"], "C2");
    assert_eq!(body["legs"][0]["rate"], 26.0);
    assert_eq!(body["legs"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_catalog_exposes_reference_data() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/catalog")
        .body(Body::empty())
        .unwrap();

    let (status, body) = request_json(test_app(ReferenceData::builtin()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hub"], "L1");
    assert_eq!(body["products"].as_array().unwrap().len(), 9);
    assert_eq!(body["centers"][0]["neighbors"][1], json!({ "id": "L1", "distance": 3.0 }));
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/MinimumCostToDeliversOrder")
        .header(header::ORIGIN, "http://example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"A\": 1}"))
        .unwrap();

    let response = test_app(ReferenceData::builtin())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
