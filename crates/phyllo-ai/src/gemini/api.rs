//! AiClient trait implementation for GeminiClient (send_message + streaming).

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{AiClient, AiError, AiResponse, ChatMessage, GenerationOptions, TokenUsage};

use super::client::{parse_stream_chunk, GeminiClient};

impl GeminiClient {
    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<reqwest::Response, AiError> {
        let response = self
            .http
            .post(url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages, options);
        let url = self.api_url(false);

        debug!(model = %self.config.model, turns = messages.len(), "Gemini API request");

        let json: serde_json::Value = self
            .post(&url, &body)
            .await?
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }

    async fn send_message_streaming(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages, options);
        let url = format!("{}?alt=sse", self.api_url(true));

        debug!(model = %self.config.model, turns = messages.len(), "Gemini API streaming request");

        let response = self.post(&url, &body).await?;

        let mut fold = StreamFold::default();
        parse_sse_stream(response, |event| fold.push(&event, &*on_chunk)).await?;
        Ok(fold.finish())
    }
}

/// Accumulates streamed chunks into the final response.
///
/// Malformed chunks are skipped, empty deltas are not forwarded, and the
/// last usage report wins (Gemini repeats cumulative counts).
#[derive(Debug, Default)]
pub(crate) struct StreamFold {
    content: String,
    usage: TokenUsage,
}

impl StreamFold {
    pub(crate) fn push(&mut self, event: &SseEvent, on_chunk: &dyn Fn(String)) {
        let data = match serde_json::from_str::<serde_json::Value>(&event.data) {
            Ok(data) => data,
            Err(e) => {
                warn!("skipping malformed stream chunk: {e}");
                return;
            }
        };

        let (chunk, chunk_usage) = parse_stream_chunk(&data);
        if let Some(u) = chunk_usage {
            self.usage = u;
        }
        if !chunk.is_empty() {
            self.content.push_str(&chunk);
            on_chunk(chunk);
        }
    }

    pub(crate) fn finish(self) -> AiResponse {
        AiResponse {
            content: self.content,
            usage: self.usage,
        }
    }
}
