//! Error types for Confluence integration

use thiserror::Error;
use wfa_core::HttpStatusError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Confluence request failed: {0}")]
    Http(#[from] HttpStatusError),

    #[error("Confluence transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed Confluence response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
