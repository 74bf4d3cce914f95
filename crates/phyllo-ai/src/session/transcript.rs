//! Ordered chat transcript with an in-place growing final reply.

use serde::Serialize;

use crate::{ChatMessage, Role};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(ChatMessage::user(text));
    }

    /// Start an empty model reply that deltas will be folded into.
    pub fn begin_reply(&mut self) {
        self.push(ChatMessage::model(String::new()));
    }

    /// Append a text delta to the trailing model message, starting one if
    /// the transcript does not end with a model message.
    pub fn apply_delta(&mut self, delta: &str) {
        match self.messages.last_mut() {
            Some(last) if last.role == Role::Model => last.text.push_str(delta),
            _ => self.push(ChatMessage::model(delta)),
        }
    }

    /// Fill the trailing reply with `text` if nothing streamed into it.
    pub fn complete_reply(&mut self, text: &str) {
        if let Some(last) = self.messages.last_mut() {
            if last.role == Role::Model && last.text.is_empty() {
                last.text.push_str(text);
            }
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_fold_into_trailing_reply() {
        let mut t = Transcript::new();
        t.push_user("Why 137.5°?");
        t.begin_reply();
        for delta in ["The golden ", "angle ", "is 360°/φ²."] {
            t.apply_delta(delta);
        }
        assert_eq!(t.len(), 2);
        assert_eq!(t.last().unwrap(), &ChatMessage::model("The golden angle is 360°/φ²."));
    }

    #[test]
    fn delta_after_user_starts_a_reply() {
        let mut t = Transcript::new();
        t.push_user("hi");
        t.apply_delta("hello");
        assert_eq!(t.len(), 2);
        assert_eq!(t.last().unwrap().role, Role::Model);
    }

    #[test]
    fn complete_reply_only_fills_empty() {
        let mut t = Transcript::new();
        t.begin_reply();
        t.complete_reply("full");
        assert_eq!(t.last().unwrap().text, "full");
        t.complete_reply("again");
        assert_eq!(t.last().unwrap().text, "full");
    }

    #[test]
    fn clear_empties() {
        let mut t = Transcript::new();
        t.push_user("a");
        t.clear();
        assert!(t.is_empty());
    }
}
