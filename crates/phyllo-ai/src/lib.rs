//! AI chat engine for Phyllo.
//!
//! Provides:
//! - a Gemini client (one-shot and SSE streaming)
//! - chat sessions whose trailing reply grows as deltas stream in
//! - token usage tracking
//! - the math-tutor prompts and fallback behavior

pub mod gemini;
pub mod session;
pub mod streaming;
pub mod token_tracker;
pub mod tutor;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{Session, Transcript};
pub use token_tracker::TokenTracker;
pub use tutor::MathTutor;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<AiResponse, AiError>;

    /// Stream a reply, calling `on_chunk` with each text delta in order.
    async fn send_message_streaming(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// Per-request generation settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    pub system_instruction: Option<String>,
    /// `None` leaves the model's default.
    pub temperature: Option<f64>,
}

impl GenerationOptions {
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),
    #[error("Session is busy with another request")]
    Busy,
    #[error("Message is empty")]
    EmptyMessage,
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Timeout
        } else {
            AiError::NetworkError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::model("hi")).unwrap();
        assert_eq!(json, r#"{"role":"model","text":"hi"}"#);
        let back: ChatMessage = serde_json::from_str(r#"{"role":"user","text":"q"}"#).unwrap();
        assert_eq!(back, ChatMessage::user("q"));
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AiError::MissingApiKey("GEMINI_API_KEY".into()).to_string(),
            "API key not set (expected in $GEMINI_API_KEY)"
        );
        assert_eq!(AiError::Busy.to_string(), "Session is busy with another request");
    }

    #[test]
    fn generation_options_builders() {
        let opts = GenerationOptions::default()
            .with_system_instruction("be brief")
            .with_temperature(0.7);
        assert_eq!(opts.system_instruction.as_deref(), Some("be brief"));
        assert_eq!(opts.temperature, Some(0.7));
    }
}
