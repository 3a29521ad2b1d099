//! Error types for the completion client

use thiserror::Error;
use wfa_core::HttpStatusError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM request failed: {0}")]
    Http(#[from] HttpStatusError),

    #[error("LLM transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
