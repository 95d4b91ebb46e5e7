use axum::{Router, routing::post};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wirecase::{
    server,
    transport::{ApiClient, ApiError},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateTwoFactorAuthenticationCodeRequest {
    email_address: String,
    two_factor_authentication_code: String,
    attempt_number1: u32,
}

// Helper function to start the mock wire API on a random local port
async fn start_mock_api() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve(listener).await.unwrap();
    });
    ApiClient::new(format!("http://{}", addr))
}

// Helper function to start a server whose only route answers 200 with plain text
async fn start_plain_text_api() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/plain", post(|| async { "all good" }));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiClient::new(format!("http://{}", addr))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NeedsMissingField {
    #[allow(dead_code)]
    missing_field: u32,
}

#[tokio::test]
async fn test_post_with_standard_encoding_round_trip() {
    let client = start_mock_api().await;
    let request = ValidateTwoFactorAuthenticationCodeRequest {
        email_address: "a@b.com".to_string(),
        two_factor_authentication_code: "123456".to_string(),
        attempt_number1: 2,
    };

    // The echo endpoint only accepts snake_case keys, so this succeeding
    // means the body went out encoded
    let response: ValidateTwoFactorAuthenticationCodeRequest = client
        .post_with_standard_encoding("/echo", &request)
        .await
        .unwrap();

    assert_eq!(response, request);
}

#[tokio::test]
async fn test_post_value_round_trip() {
    let client = start_mock_api().await;
    let body = json!({
        "ianaTimezone": "Europe/Madrid",
        "scheduleDays": [{ "dayOfWeekIndex": 0 }, { "dayOfWeekIndex": 6 }]
    });

    let response = client.post_value("echo", &body).await.unwrap();
    assert_eq!(response, body);
}

#[tokio::test]
async fn test_unknown_path_is_status_error() {
    let client = start_mock_api().await;

    let result = client.post_value("/api/does_not_exist_1", &json!({})).await;
    match result {
        Err(ApiError::Status { status, .. }) => assert_eq!(status, StatusCode::NOT_FOUND),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_echo_rejects_unencoded_body() {
    let client = start_mock_api().await;

    // Bypass the transport so the camelCase body reaches the server as-is
    let response = reqwest::Client::new()
        .post(format!("{}/echo", client.base_url()))
        .json(&json!({ "emailAddress": "a@b.com", "items": [{ "itemId": 1 }] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["keys"], json!(["/emailAddress", "/items/0/itemId"]));
}

#[tokio::test]
async fn test_health() {
    let client = start_mock_api().await;

    let body: Value = reqwest::get(format!("{}/health", client.base_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["service"], json!("wirecase"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["key_case"], json!("snake"));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    // Bind and drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}", addr));
    let result = client.post_value("/echo", &json!({})).await;
    assert!(matches!(result, Err(ApiError::Request(_))));
}

#[tokio::test]
async fn test_response_missing_field_is_decode_error() {
    let client = start_mock_api().await;

    let result: Result<NeedsMissingField, ApiError> = client
        .post_with_standard_encoding("/echo", &json!({ "a": 1 }))
        .await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let client = start_plain_text_api().await;

    let result = client.post_value("/plain", &json!({})).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn test_from_env_without_api_url_is_config_error() {
    // Only this test touches WIRECASE_API_URL
    unsafe { std::env::remove_var("WIRECASE_API_URL") };
    assert!(matches!(ApiClient::from_env(), Err(ApiError::Config(_))));

    unsafe { std::env::set_var("WIRECASE_API_URL", "   ") };
    match ApiClient::from_env() {
        Err(ApiError::Config(msg)) => assert!(msg.contains("WIRECASE_API_URL")),
        other => panic!("expected config error, got {:?}", other),
    }

    unsafe { std::env::set_var("WIRECASE_API_URL", "http://127.0.0.1:9/") };
    let client = ApiClient::from_env().unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9");

    unsafe { std::env::remove_var("WIRECASE_API_URL") };
}
