//! MathTutor: one-shot insights and streamed chat turns.

use std::sync::Arc;

use phyllo_config::AiConfig;
use tracing::{debug, error};

use crate::session::Session;
use crate::{AiClient, AiError, ChatMessage, GenerationOptions};

use super::prompts::{
    insight_prompt, CHAT_FAILURE_TEXT, CHAT_SYSTEM_INSTRUCTION, INSIGHT_FAILURE_TEXT,
    INSIGHT_SYSTEM_INSTRUCTION, NO_INSIGHT_TEXT,
};

pub struct MathTutor {
    client: Arc<dyn AiClient>,
    insight_temperature: f64,
}

impl MathTutor {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self {
            client,
            insight_temperature: AiConfig::default().temperature,
        }
    }

    pub fn from_config(client: Arc<dyn AiClient>, config: &AiConfig) -> Self {
        Self {
            client,
            insight_temperature: config.temperature,
        }
    }

    pub fn insight_temperature(&self) -> f64 {
        self.insight_temperature
    }

    /// Explain `topic` for a sphere of `points` points.
    ///
    /// Always returns displayable text.
    pub async fn insight(&self, points: u32, topic: &str) -> String {
        let messages = [ChatMessage::user(insight_prompt(points, topic))];
        let options = GenerationOptions::default()
            .with_system_instruction(INSIGHT_SYSTEM_INSTRUCTION)
            .with_temperature(self.insight_temperature);

        match self.client.send_message(&messages, &options).await {
            // A reply of only whitespace renders as nothing, so it counts as empty.
            Ok(response) if response.content.trim().is_empty() => NO_INSIGHT_TEXT.to_string(),
            Ok(response) => {
                debug!(points, topic, output_tokens = response.usage.output_tokens, "insight received");
                response.content
            }
            Err(e) => {
                error!("Gemini insight request failed: {e}");
                INSIGHT_FAILURE_TEXT.to_string()
            }
        }
    }

    /// A fresh chat session carrying the tutor's system instruction.
    pub fn new_chat_session(&self) -> Session {
        Session::new().with_system_instruction(CHAT_SYSTEM_INSTRUCTION)
    }

    /// Send one chat turn, streaming deltas to `on_chunk`.
    ///
    /// Returns `None` when nothing was sent: a blank message, or a request
    /// already in flight on `session`. Otherwise returns the final reply
    /// text; on failure the placeholder is folded into the reply and also
    /// passed to `on_chunk`.
    pub async fn chat(
        &self,
        session: &Session,
        message: &str,
        on_chunk: impl Fn(String) + Send + Sync + Clone + 'static,
    ) -> Option<String> {
        let forward = on_chunk.clone();
        match session
            .chat_streaming(self.client.as_ref(), message, Box::new(forward))
            .await
        {
            Ok(reply) => Some(reply),
            Err(AiError::EmptyMessage) => None,
            Err(AiError::Busy) => {
                debug!("chat turn ignored: a reply is still streaming");
                None
            }
            Err(e) => {
                error!("Gemini stream failed: {e}");
                session.append_to_reply(CHAT_FAILURE_TEXT);
                on_chunk(CHAT_FAILURE_TEXT.to_string());
                session.last_text()
            }
        }
    }
}
