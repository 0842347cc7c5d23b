use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Persona instruction sent with every upstream call unless overridden by
/// `CHAT_SYSTEM_INSTRUCTION`.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "Eres un chef experto llamado Sabor Expres. \
    Responde solo sobre cocina, recetas y alimentos. Sé amable y usa emojis y habla \
    siempre en español.";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub chat: ChatSettings,
    pub security: SecuritySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// Upstream credential. Absence is a per-request error, not a startup
    /// failure, so the relay can boot without it and report it cleanly.
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    pub system_instruction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecuritySettings {
    /// CORS allow-list; a single `*` entry permits any origin.
    pub allowed_origins: Vec<String>,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(RelayConfig {
            common,
            gemini: GeminiSettings {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            },
            chat: ChatSettings {
                system_instruction: env::var("CHAT_SYSTEM_INSTRUCTION")
                    .unwrap_or_else(|_| DEFAULT_SYSTEM_INSTRUCTION.to_string()),
            },
            security: SecuritySettings {
                allowed_origins: split_origins(
                    &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
                ),
            },
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
