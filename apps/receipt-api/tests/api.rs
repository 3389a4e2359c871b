//! End-to-end tests through the axum router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use receipt_api::{router, ApiConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(AppState::new(ApiConfig::default())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn process(app: &Router, receipt: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/receipts/process", Some(receipt.to_string())).await
}

async fn points(app: &Router, id: &str) -> (StatusCode, Value) {
    send(app, Method::GET, &format!("/receipts/{id}/points"), None).await
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

#[tokio::test]
async fn test_process_then_get_points() {
    let app = app();

    for (receipt, expected) in [(target_receipt(), 28), (corner_market_receipt(), 109)] {
        let (status, body) = process(&app, receipt).await;
        assert_eq!(status, StatusCode::OK);

        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 36);

        let (status, body) = points(&app, &id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "points": expected }));
    }
}

#[tokio::test]
async fn test_each_submission_gets_a_new_id() {
    let app = app();

    let (_, first) = process(&app, target_receipt()).await;
    let (_, second) = process(&app, target_receipt()).await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_invalid_total_is_bad_request() {
    let app = app();
    let mut receipt = target_receipt();
    receipt["total"] = json!("35.3");

    let (status, body) = process(&app, receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("invalid receipt data: invalid total format"), "{message}");
}

#[tokio::test]
async fn test_item_error_names_the_item() {
    let app = app();
    let mut receipt = target_receipt();
    receipt["items"][2]["price"] = json!("1.2");

    let (status, body) = process(&app, receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("item 3"));
}

#[tokio::test]
async fn test_missing_fields_fail_validation() {
    let app = app();

    let (status, body) = process(&app, json!({ "total": "1.00" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "invalid receipt data: retailer name cannot be empty" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/receipts/process",
        Some("{not json".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid JSON payload" }));
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = app();

    for id in ["nonexistent-id", "7fb1377b-b223-49d9-a31a-5a02701dd310"] {
        let (status, body) = points(&app, id).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Receipt not found" }));
    }
}

#[tokio::test]
async fn test_uppercase_id_is_not_found() {
    let app = app();

    let (_, body) = process(&app, target_receipt()).await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, _) = points(&app, &id.to_uppercase()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = points(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = app();

    let (status, _) = send(&app, Method::GET, "/receipts/process", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
