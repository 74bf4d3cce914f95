//! Math-tutor prompts and the fallback behavior around them.
//!
//! [`MathTutor`] never surfaces an error: API failures are logged and
//! replaced with fixed placeholder text.

mod prompts;
mod service;

pub use prompts::{
    default_topic, insight_prompt, CHAT_FAILURE_TEXT, CHAT_SYSTEM_INSTRUCTION,
    INSIGHT_FAILURE_TEXT, INSIGHT_SYSTEM_INSTRUCTION, NO_INSIGHT_TEXT, SUGGESTED_TOPICS,
};
pub use service::MathTutor;
