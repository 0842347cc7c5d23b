//! Integration tests for the liveness endpoints.
//!
//! Run with: cargo test -p chat-relay-service --test health_check

use chat_relay_service::config::{
    ChatSettings, GeminiSettings, RelayConfig, SecuritySettings, DEFAULT_SYSTEM_INSTRUCTION,
};
use chat_relay_service::handlers::app::LIVENESS_MESSAGE;
use chat_relay_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

fn test_config(api_key: Option<&str>) -> RelayConfig {
    RelayConfig {
        common: service_core::config::Config { port: 0 },
        gemini: GeminiSettings {
            api_key: api_key.map(String::from),
            model: "gemini-1.5-flash".to_string(),
        },
        chat: ChatSettings {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        },
        security: SecuritySettings {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app(api_key: Option<&str>) -> u16 {
    let app = Application::build(test_config(api_key))
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn root_returns_fixed_liveness_body() {
    let port = spawn_app(Some("test-api-key")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, LIVENESS_MESSAGE);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn root_is_independent_of_credential_configuration() {
    let port = spawn_app(None).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response.text().await.expect("Failed to read body"),
        LIVENESS_MESSAGE
    );
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let port = spawn_app(Some("test-api-key")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn caller_supplied_request_id_is_echoed_back() {
    let port = spawn_app(Some("test-api-key")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .header("x-request-id", "caller-id-42")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("caller-id-42")
    );
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(Some("test-api-key")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "chat-relay-service");
}
