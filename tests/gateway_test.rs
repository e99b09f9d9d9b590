use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use chrono::Datelike;
use http_body_util::BodyExt;
use payment_gateway::app::router::build_router;
use payment_gateway::services::{InMemoryRepository, PaymentGateway, SimulatedBank};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const API_KEY: &str = "test-api-key";

fn app() -> Router {
    let gateway = Arc::new(PaymentGateway::new(
        SimulatedBank::new(),
        InMemoryRepository::new(),
    ));
    build_router(API_KEY.to_string(), gateway)
}

fn valid_payment() -> Value {
    let today = chrono::Local::now().date_naive();
    json!({
        "cardNumber": "1111222233334444",
        "cardHolderName": "A.Smith",
        "cvv": "123",
        "expiryDate": format!("{:02}/{:02}", today.month(), (today.year() + 1) % 100),
        "currency": "GBP",
        "amount": "10.00",
    })
}

fn make_payment_request(payload: &Value, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/payment/makepayment")
        .header(CONTENT_TYPE, "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

fn get_detail_request(payment_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/payment/getpaymentdetail/{payment_id}"))
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).ok())
}

#[tokio::test]
async fn submit_then_lookup_returns_masked_detail() {
    let app = app();

    let (status, body) = send(app.clone(), make_payment_request(&valid_payment(), Some(API_KEY))).await;
    assert_eq!(status, StatusCode::CREATED);
    let body = body.unwrap();
    assert_eq!(body["status"], "Authorized");
    let payment_id = body["id"].as_str().unwrap().to_string();

    let (status, detail) = send(app, get_detail_request(&payment_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    let detail = detail.unwrap();
    assert_eq!(detail["id"].as_str().unwrap(), payment_id);
    assert_eq!(detail["request"]["cardNumber"], "************4444");
    assert_eq!(detail["response"]["status"], "Authorized");
}

#[tokio::test]
async fn expired_card_is_a_created_declined_response() {
    let mut payload = valid_payment();
    payload["expiryDate"] = json!("01/01");

    let (status, body) = send(app(), make_payment_request(&payload, Some(API_KEY))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.unwrap()["status"], "Declined");
}

#[tokio::test]
async fn structurally_invalid_request_is_unprocessable() {
    let mut payload = valid_payment();
    payload["cardNumber"] = json!("111122223333444");

    let (status, _) = send(app(), make_payment_request(&payload, Some(API_KEY))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/payment/makepayment")
        .header(CONTENT_TYPE, "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from(r#"{"cardNumber": 42}"#))
        .unwrap();

    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_api_key_is_unauthorized() {
    let (status, _) = send(app(), make_payment_request(&valid_payment(), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_api_key_is_unauthorized() {
    let (status, _) = send(app(), make_payment_request(&valid_payment(), Some("not-the-key"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_payment_id_is_not_found() {
    let unknown = uuid::Uuid::new_v4().to_string();
    let (status, body) = send(app(), get_detail_request(&unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_none());
}

#[tokio::test]
async fn health_route_is_open() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
}
