//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

enum MockBehavior {
    Echo,
    Reply(String),
    Fail,
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
}

impl MockTextProvider {
    /// Reply with the inbound message unchanged.
    pub fn echo() -> Self {
        Self {
            behavior: MockBehavior::Echo,
        }
    }

    /// Reply with a fixed string regardless of input.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(reply.into()),
        }
    }

    /// Fail every call with an API error.
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, message: &str) -> Result<String, ProviderError> {
        match &self.behavior {
            MockBehavior::Echo => Ok(message.to_string()),
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Fail => Err(ProviderError::ApiError(
                "mock upstream failure".to_string(),
            )),
        }
    }
}
