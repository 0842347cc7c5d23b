use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        // Upstream and internal failures answer with a fixed message so no
        // credential or upstream detail reaches the client. The full error
        // is logged at the call site.
        let (status, error_message) = match self {
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::ConfigError(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::UpstreamError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to reach the generative language service".to_string(),
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest(anyhow::anyhow!("message is required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_error_maps_to_500() {
        let response = AppError::UpstreamError("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_error_maps_to_500() {
        let response =
            AppError::ConfigError(anyhow::anyhow!("Gemini API key not configured")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
