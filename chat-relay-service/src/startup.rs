//! Application startup and lifecycle management.

use crate::config::RelayConfig;
use crate::handlers::app::{health_check, index};
use crate::handlers::chat::chat;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::http::{header, HeaderValue, Method};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state. Immutable after startup; concurrent requests
/// share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.allowed_origins);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                    None
                }
            })
            .collect();
        cors.allow_origin(origins)
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider derived from config.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            system_instruction: config.chat.system_instruction.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        Self::with_provider(config, text_provider).await
    }

    /// Build the application with an explicit provider (used by tests to
    /// inject a mock).
    pub async fn with_provider(
        config: RelayConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped or a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
