//! Gemini API client configuration.

use phyllo_config::AiConfig;

use crate::AiError;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 2048,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Build from the `[ai]` config section, reading the key from the environment.
    pub fn from_ai_config(ai: &AiConfig) -> Result<Self, AiError> {
        let api_key = ai
            .resolve_api_key()
            .ok_or_else(|| AiError::MissingApiKey(ai.api_key_env.clone()))?;
        Ok(Self::new(api_key)
            .with_model(ai.model.clone())
            .with_max_tokens(ai.max_tokens))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
