//! Gemini API client struct, request building, and response parsing.

use serde_json::Value;

use crate::{AiError, AiResponse, ChatMessage, GenerationOptions, TokenUsage};

use super::config::GeminiConfig;

pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self, stream: bool) -> String {
        let method = if stream {
            "streamGenerateContent"
        } else {
            "generateContent"
        };
        format!("{}/{}:{}", self.config.base_url, self.config.model, method)
    }

    /// JSON request body: conversation turns, generation config, and the
    /// optional system instruction. Empty turns are skipped.
    pub(crate) fn build_request_body(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Value {
        let contents: Vec<Value> = messages
            .iter()
            .filter(|m| !m.text.is_empty())
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "parts": [{ "text": m.text }]
                })
            })
            .collect();

        let mut generation_config = serde_json::json!({
            "maxOutputTokens": self.config.max_tokens,
        });
        if let Some(temperature) = options.temperature {
            generation_config["temperature"] = serde_json::json!(temperature);
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": generation_config,
        });

        if let Some(ref system) = options.system_instruction {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system }]
            });
        }

        body
    }

    /// Parse a complete `generateContent` response.
    pub(crate) fn parse_response(&self, json: Value) -> Result<AiResponse, AiError> {
        let Some(candidates) = json["candidates"].as_array() else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::ApiError(format!("prompt blocked: {reason}")));
            }
            return Err(AiError::ParseError("no candidates in response".to_string()));
        };

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        Ok(AiResponse {
            content: candidate_text(first),
            usage: parse_usage(&json["usageMetadata"]).unwrap_or_default(),
        })
    }
}

/// Concatenated text parts of one candidate.
pub(crate) fn candidate_text(candidate: &Value) -> String {
    candidate["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default()
}

/// Text delta and usage carried by one streamed chunk.
pub(crate) fn parse_stream_chunk(data: &Value) -> (String, Option<TokenUsage>) {
    let text = data["candidates"]
        .as_array()
        .map(|candidates| candidates.iter().map(candidate_text).collect())
        .unwrap_or_default();
    (text, parse_usage(&data["usageMetadata"]))
}

fn parse_usage(meta: &Value) -> Option<TokenUsage> {
    if !meta.is_object() {
        return None;
    }
    Some(TokenUsage {
        input_tokens: meta["promptTokenCount"].as_u64().unwrap_or(0),
        output_tokens: meta["candidatesTokenCount"].as_u64().unwrap_or(0),
    })
}
