//! WFA LLM Integration
//!
//! Client for chat-completion style endpoints, tolerant of the different
//! response shapes providers return.

pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::LlmClient;
pub use error::{Error, Result};
pub use extract::{extract_content, ResponseShape};
pub use types::*;
