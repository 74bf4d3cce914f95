//! Generative-language API configuration.

use serde::{Deserialize, Serialize};

/// AI section of the config file.
///
/// The API key itself never lives in the file; `api_key_env` names the
/// environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    /// Sampling temperature for one-shot insights.
    pub temperature: f64,
    pub max_tokens: u32,
    pub api_key_env: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            temperature: 0.7,
            max_tokens: 2048,
            api_key_env: "GEMINI_API_KEY".into(),
        }
    }
}

/// Environment variable consulted when the configured one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

impl AiConfig {
    /// Read the API key from the configured variable, then the fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}
