//! Session struct and transcript access.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::token_tracker::TokenTracker;
use crate::{ChatMessage, GenerationOptions, TokenUsage};

use super::transcript::Transcript;

/// A conversation with one in-flight request at most.
///
/// Methods take `&self` so a session can be shared; a second request made
/// while one is running fails with [`crate::AiError::Busy`].
pub struct Session {
    /// Shared with the streaming callback, which folds deltas into it.
    pub(super) transcript: Arc<Mutex<Transcript>>,
    pub(super) options: GenerationOptions,
    pub(super) tracker: Mutex<TokenTracker>,
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            transcript: Arc::new(Mutex::new(Transcript::new())),
            options: GenerationOptions::default(),
            tracker: Mutex::new(TokenTracker::new()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.options.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub(super) fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(super) fn record_usage(&self, usage: &TokenUsage) {
        self.tracker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .record(usage);
    }

    /// Snapshot of the conversation.
    pub fn transcript(&self) -> Transcript {
        self.lock_transcript().clone()
    }

    /// Snapshot of the messages.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock_transcript().messages().to_vec()
    }

    /// Text of the trailing message, if any.
    pub fn last_text(&self) -> Option<String> {
        self.lock_transcript().last().map(|m| m.text.clone())
    }

    /// Fold a delta into the trailing reply.
    pub fn append_to_reply(&self, delta: &str) {
        self.lock_transcript().apply_delta(delta);
    }

    /// Copy of the token tracker.
    pub fn usage(&self) -> TokenTracker {
        self.tracker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(std::sync::atomic::Ordering::Acquire)
    }

    pub fn clear(&self) {
        self.lock_transcript().clear();
    }

    pub fn message_count(&self) -> usize {
        self.lock_transcript().len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
