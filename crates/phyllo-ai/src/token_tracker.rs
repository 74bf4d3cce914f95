//! Token usage tracking across API calls.

use crate::TokenUsage;

/// Cumulative token usage and call count.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self
            .total
            .output_tokens
            .saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        });
        tracker.record(&TokenUsage {
            input_tokens: 1,
            output_tokens: 2,
        });
        assert_eq!(tracker.total().input_tokens, 11);
        assert_eq!(tracker.total().output_tokens, 7);
        assert_eq!(tracker.total_tokens(), 18);
        assert_eq!(tracker.call_count(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 3,
            output_tokens: 3,
        });
        tracker.reset();
        assert_eq!(tracker.total_tokens(), 0);
        assert_eq!(tracker.call_count(), 0);
    }
}
