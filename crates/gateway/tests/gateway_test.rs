use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use estate_chat_core::mocks::MockController;
use estate_chat_core::Error;
use estate_chat_gateway::{GatewayConfig, GatewayServer};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const SITE: &str = "https://real-estate-website-snowy-eight.vercel.app";

fn config() -> GatewayConfig {
    GatewayConfig {
        allowed_origins: vec!["http://localhost:3000".to_string(), SITE.to_string()],
        ..GatewayConfig::default()
    }
}

fn app(controller: Arc<MockController>) -> Router {
    GatewayServer::new(config(), controller).build_router()
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_returns_answer() {
    let controller = Arc::new(MockController::replying("We have 7 homes for sale."));
    let response = app(controller.clone())
        .oneshot(chat_request(r#"{"message": "What is for sale?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"response": "We have 7 homes for sale."})
    );
    assert_eq!(controller.seen(), vec!["What is for sale?".to_string()]);
}

#[tokio::test]
async fn test_missing_message_is_invalid_input() {
    let controller = Arc::new(MockController::replying("unused"));
    let response = app(controller.clone())
        .oneshot(chat_request(r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid input: "));
    assert!(error.contains("message"));
    assert!(body.get("response").is_none());
    assert!(controller.seen().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_invalid_input() {
    let controller = Arc::new(MockController::replying("unused"));
    let response = app(controller)
        .oneshot(chat_request("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid input: "));
}

#[tokio::test]
async fn test_blank_message_is_invalid_input() {
    let controller = Arc::new(MockController::replying("unused"));
    let response = app(controller.clone())
        .oneshot(chat_request(r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(
        json_body(response).await,
        json!({"error": "Invalid input: message must not be empty"})
    );
    assert!(controller.seen().is_empty());
}

#[tokio::test]
async fn test_provider_failure_is_not_leaked() {
    let controller = Arc::new(MockController::failing(|| {
        Error::model_provider("Provider returned status 401 Unauthorized")
    }));
    let response = app(controller)
        .oneshot(chat_request(r#"{"message": "Any rentals?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"error": "An unexpected error occurred. Please try again later."})
    );
    assert!(!body.to_string().contains("401"));
}

#[tokio::test]
async fn test_invalid_request_from_run_is_reported_as_input_error() {
    let controller = Arc::new(MockController::failing(|| {
        Error::invalid_request("message is too long")
    }));
    let response = app(controller)
        .oneshot(chat_request(r#"{"message": "Any rentals?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Invalid input: message is too long"})
    );
}

#[tokio::test]
async fn test_turn_limit_is_generic_error() {
    let controller = Arc::new(MockController::failing(|| Error::MaxTurnsExceeded(10)));
    let response = app(controller)
        .oneshot(chat_request(r#"{"message": "loop forever"}"#))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "An unexpected error occurred. Please try again later."
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app(Arc::new(MockController::replying("unused")))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_metrics_absent_without_recorder() {
    let response = app(Arc::new(MockController::replying("unused")))
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_listed_origin_with_credentials() {
    let response = app(Arc::new(MockController::replying("unused")))
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/chat")
                .header(header::ORIGIN, SITE)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], SITE);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let mut request = chat_request(r#"{"message": "hi"}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://evil.example".parse().unwrap());

    let response = app(Arc::new(MockController::replying("hello")))
        .oneshot(request)
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
    assert_eq!(json_body(response).await, json!({"response": "hello"}));
}
