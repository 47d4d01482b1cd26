//! AI Gateway
//!
//! Thin client for the hosted Gemini API: description writing, poster
//! generation, grounded search and chat. Text surfaces fail open — an
//! unreachable or unconfigured gateway yields a fixed human-readable
//! fallback string instead of an error. Image generation is the exception
//! and reports a typed error to the caller.

mod gemini;

pub use gemini::GeminiGateway;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key configured
    #[error("API Key missing")]
    Unconfigured,

    /// Request failed or the service answered with an error status
    #[error("Gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived but did not carry the expected payload
    #[error("Unexpected gateway response: {0}")]
    Malformed(String),
}

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of assistant chat history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// A grounded-search citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub title: String,
    pub url: String,
}

/// Grounded-search output: a summary plus its sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub links: Vec<SearchLink>,
}
