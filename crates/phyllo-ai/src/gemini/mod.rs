//! Google Gemini API client.
//!
//! Implements [`crate::AiClient`] against the Generative Language REST API.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GEMINI_API_BASE};
