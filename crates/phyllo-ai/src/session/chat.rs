//! Async chat methods for Session (one-shot + streaming).

use tracing::debug;

use crate::{AiClient, AiError, ChatMessage};

use super::manager::Session;
use super::types::BusyGuard;

impl Session {
    /// Append the user message and return the request history: every prior
    /// non-empty turn plus the new message.
    fn open_turn(&self, user_message: String) -> Result<Vec<ChatMessage>, AiError> {
        if user_message.trim().is_empty() {
            return Err(AiError::EmptyMessage);
        }
        let mut transcript = self.lock_transcript();
        transcript.push_user(user_message);
        // A failed stream can leave an empty reply behind; the API rejects
        // turns without text.
        Ok(transcript
            .messages()
            .iter()
            .filter(|m| !m.text.is_empty())
            .cloned()
            .collect())
    }

    /// Send a message and wait for the whole reply.
    pub async fn chat(
        &self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request = self.open_turn(user_message.into())?;

        let response = client.send_message(&request, &self.options).await?;
        self.record_usage(&response.usage);
        self.lock_transcript()
            .push(ChatMessage::model(response.content.clone()));

        Ok(response.content)
    }

    /// Send a message and stream the reply.
    ///
    /// An empty model message is appended before the request goes out; each
    /// delta is folded into it and then passed to `on_chunk`. On error the
    /// partial reply stays in the transcript.
    pub async fn chat_streaming(
        &self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<String, AiError> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request = self.open_turn(user_message.into())?;
        self.lock_transcript().begin_reply();

        let transcript = self.transcript.clone();
        let fold = Box::new(move |chunk: String| {
            transcript
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .apply_delta(&chunk);
            on_chunk(chunk);
        });

        let response = client
            .send_message_streaming(&request, &self.options, fold)
            .await?;

        debug!(
            chars = response.content.len(),
            output_tokens = response.usage.output_tokens,
            "streamed reply complete"
        );
        self.record_usage(&response.usage);
        self.lock_transcript().complete_reply(&response.content);

        Ok(response.content)
    }
}
