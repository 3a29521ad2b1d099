//! Error types for JIRA integration

use thiserror::Error;
use wfa_core::HttpStatusError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JIRA request failed: {0}")]
    Http(#[from] HttpStatusError),

    #[error("JIRA transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
