//! Text-generation provider abstraction.
//!
//! A trait seam over the upstream generative-language API so the handler can
//! be exercised against a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => AppError::ConfigError(anyhow::anyhow!(msg)),
            other => AppError::UpstreamError(other.to_string()),
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Forward a message upstream and return the generated reply text.
    async fn generate(&self, message: &str) -> Result<String, ProviderError>;
}
