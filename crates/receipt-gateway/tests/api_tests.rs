use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use receipt_core::InMemoryReceiptStore;
use receipt_gateway::{GatewayConfig, ReceiptGatewayService};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn setup_router() -> Router {
    setup_service(GatewayConfig::default()).router()
}

fn setup_service(config: GatewayConfig) -> ReceiptGatewayService {
    ReceiptGatewayService::new(config, Arc::new(InMemoryReceiptStore::new()))
        .expect("default config is valid")
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

fn simple_receipt() -> Value {
    json!({
        "retailer": "Test Retailer",
        "purchaseDate": "2024-12-18",
        "purchaseTime": "12:00",
        "items": [{"shortDescription": "Test Item", "price": "10.00"}],
        "total": "10.00"
    })
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to collect body")
        .to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("body is JSON")
    };
    (status, json)
}

async fn post_raw(router: &Router, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("valid request");
    send(router, request).await
}

async fn post_receipt(router: &Router, receipt: &Value) -> (StatusCode, Value) {
    post_raw(router, receipt.to_string()).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(router, request).await
}

async fn points_for(router: &Router, receipt: &Value) -> u64 {
    let (status, body) = post_receipt(router, receipt).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);

    let id = body["id"].as_str().expect("id is a string");
    let (status, body) = get(router, &format!("/receipts/{}/points", id)).await;
    assert_eq!(status, StatusCode::OK);
    body["points"].as_u64().expect("points is an integer")
}

fn assert_invalid(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, &json!({"description": "The receipt is invalid."}));
}

#[tokio::test]
async fn test_process_returns_id_only() {
    let router = setup_router();
    let (status, body) = post_receipt(&router, &target_receipt()).await;

    assert_eq!(status, StatusCode::OK);
    let object = body.as_object().expect("body is an object");
    assert_eq!(object.len(), 1);
    assert!(!object["id"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_target_receipt_scores_28() {
    let router = setup_router();
    assert_eq!(points_for(&router, &target_receipt()).await, 28);
}

#[tokio::test]
async fn test_simple_receipt_scores_89() {
    let router = setup_router();
    assert_eq!(points_for(&router, &simple_receipt()).await, 89);
}

#[tokio::test]
async fn test_points_are_stable_across_lookups() {
    let router = setup_router();
    let (_, body) = post_receipt(&router, &target_receipt()).await;
    let uri = format!("/receipts/{}/points", body["id"].as_str().unwrap_or_default());

    let (_, first) = get(&router, &uri).await;
    let (_, second) = get(&router, &uri).await;
    assert_eq!(first, json!({"points": 28}));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_identical_submissions_get_distinct_ids() {
    let router = setup_router();
    let (_, a) = post_receipt(&router, &simple_receipt()).await;
    let (_, b) = post_receipt(&router, &simple_receipt()).await;
    assert_ne!(a["id"], b["id"]);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let router = setup_router();
    let mut receipt = simple_receipt();
    receipt["id"] = json!("chosen-by-client");

    let (status, body) = post_receipt(&router, &receipt).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["id"], "chosen-by-client");

    let (status, _) = get(&router, "/receipts/chosen-by-client/points").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = setup_router();
    let (status, body) = post_raw(&router, "{\"retailer\": ").await;
    assert_invalid(status, &body);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let router = setup_router();
    let mut receipt = simple_receipt();
    if let Some(fields) = receipt.as_object_mut() {
        fields.remove("total");
    }

    let (status, body) = post_receipt(&router, &receipt).await;
    assert_invalid(status, &body);
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected() {
    let router = setup_router();
    let mut receipt = simple_receipt();
    receipt["total"] = json!(10.0);

    let (status, body) = post_receipt(&router, &receipt).await;
    assert_invalid(status, &body);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let router = setup_router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/receipts/process")
        .body(Body::from(simple_receipt().to_string()))
        .expect("valid request");

    let (status, body) = send(&router, request).await;
    assert_invalid(status, &body);
}

#[tokio::test]
async fn test_validation_failures_are_rejected() {
    let router = setup_router();
    let cases = [
        ("retailer", json!("Target!")),
        ("purchaseDate", json!("2022-13-01")),
        ("purchaseDate", json!("01/01/2022")),
        ("purchaseTime", json!("25:00")),
        ("purchaseTime", json!("1:01")),
        ("total", json!("35")),
        ("total", json!("35.3")),
        ("items", json!([{"shortDescription": "Gum", "price": "1.5"}])),
        ("items", json!([{"shortDescription": "Gum!", "price": "1.50"}])),
    ];

    for (field, value) in cases {
        let mut receipt = simple_receipt();
        receipt[field] = value.clone();

        let (status, body) = post_receipt(&router, &receipt).await;
        assert_eq!(
            status,
            StatusCode::BAD_REQUEST,
            "{} = {} should be rejected",
            field,
            value
        );
        assert_eq!(body, json!({"description": "The receipt is invalid."}));
    }
}

#[tokio::test]
async fn test_receipt_without_items_is_accepted() {
    let router = setup_router();
    let mut receipt = simple_receipt();
    receipt["items"] = json!([]);

    // 12 retailer characters + 50 round dollar + 25 quarter multiple
    assert_eq!(points_for(&router, &receipt).await, 87);
}

#[tokio::test]
async fn test_missing_or_null_items_are_accepted() {
    let router = setup_router();

    let mut missing = simple_receipt();
    if let Some(fields) = missing.as_object_mut() {
        fields.remove("items");
    }
    let mut null = simple_receipt();
    null["items"] = Value::Null;

    assert_eq!(points_for(&router, &missing).await, 87);
    assert_eq!(points_for(&router, &null).await, 87);
}

#[tokio::test]
async fn test_huge_prices_score_without_failing() {
    let router = setup_router();
    let mut receipt = simple_receipt();
    receipt["items"] = json!([
        {"shortDescription": "abc", "price": "100000000000000000000.00"},
        {"shortDescription": "abc", "price": "100000000000000000000.00"}
    ]);

    assert_eq!(points_for(&router, &receipt).await, u64::MAX);
}

#[tokio::test]
async fn test_rejected_receipts_are_not_stored() {
    let router = setup_router();
    let mut receipt = simple_receipt();
    receipt["total"] = json!("abc");
    post_receipt(&router, &receipt).await;

    let (_, health) = get(&router, "/health").await;
    assert_eq!(health["receipts"], 0);
}

#[tokio::test]
async fn test_unknown_id_returns_not_found() {
    let router = setup_router();
    let (status, body) = get(&router, "/receipts/does-not-exist/points").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"description": "No receipt found for that ID."}));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = GatewayConfig::default();
    config.limits.max_request_size = 64;
    let router = setup_service(config).router();

    let (status, body) = post_receipt(&router, &target_receipt()).await;
    assert_invalid(status, &body);
}

#[tokio::test]
async fn test_health_reports_receipt_count() {
    let router = setup_router();
    post_receipt(&router, &simple_receipt()).await;

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "receipt-gateway");
    assert!(body["version"].is_string());
    assert_eq!(body["receipts"], 1);
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let service = setup_service(GatewayConfig::default());
    let router = service.router();

    let (_, accepted) = post_receipt(&router, &simple_receipt()).await;
    post_raw(&router, "not json").await;
    get(
        &router,
        &format!("/receipts/{}/points", accepted["id"].as_str().unwrap_or_default()),
    )
    .await;
    get(&router, "/receipts/missing/points").await;

    let (status, body) = get(&router, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["receipts_processed"], 1);
    assert_eq!(body["receipts_rejected"], 1);
    assert_eq!(body["points_served"], 1);
    assert_eq!(body["points_not_found"], 1);
    assert_eq!(service.metrics().snapshot().receipts_processed, 1);
}

#[tokio::test]
async fn test_served_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let mut service = setup_service(GatewayConfig::default());
    let shutdown = service.shutdown_handle().expect("fresh handle");
    let server = tokio::spawn(async move { service.serve(listener).await });

    let client = reqwest::Client::new();
    let created: Value = client
        .post(format!("http://{}/receipts/process", addr))
        .json(&target_receipt())
        .send()
        .await
        .expect("submit receipt")
        .json()
        .await
        .expect("JSON body");

    let response = client
        .get(format!(
            "http://{}/receipts/{}/points",
            addr,
            created["id"].as_str().unwrap_or_default()
        ))
        .send()
        .await
        .expect("fetch points");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let points: Value = response.json().await.expect("JSON body");
    assert_eq!(points, json!({"points": 28}));

    shutdown.send(()).expect("server still running");
    server
        .await
        .expect("server task")
        .expect("clean shutdown");
}
