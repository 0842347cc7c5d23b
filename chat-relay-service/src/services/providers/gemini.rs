//! Gemini AI provider implementation.
//!
//! Forwards a single message to Google's `generateContent` endpoint with the
//! configured persona system instruction and extracts the first candidate's
//! text.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub system_instruction: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
    api_base: String,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Self {
        // No explicit timeout: a single best-effort attempt per inbound
        // request, cancelled when the caller drops the future.
        Self {
            config,
            client: Client::new(),
            api_base: GEMINI_API_BASE.to_string(),
        }
    }

    /// Build the API URL for the configured model and the given method.
    fn api_url(&self, method: &str, api_key: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.api_base, self.config.model, method, api_key
        )
    }

    fn build_request(&self, message: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            config: RequestConfig {
                system_instruction: Content {
                    parts: vec![Part {
                        text: self.config.system_instruction.clone(),
                    }],
                },
            },
        }
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, message: &str) -> Result<String, ProviderError> {
        // The credential check must come first: a missing key is a distinct
        // configuration error and no outbound call may be attempted.
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ProviderError::NotConfigured("Gemini API key not configured".to_string())
            })?;

        let request = self.build_request(message);
        let url = self.api_url("generateContent", api_key);

        tracing::debug!(
            model = %self.config.model,
            message_len = message.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        extract_text(&api_response).ok_or_else(|| {
            ProviderError::ApiError("Gemini response contained no candidates".to_string())
        })
    }
}

/// Extract `candidates[0].content.parts[0].text` without indexing, so an
/// empty or missing `candidates` array is an error rather than a panic.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    config: RequestConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestConfig {
    system_instruction: Content,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
