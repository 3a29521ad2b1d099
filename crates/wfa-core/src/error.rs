//! Error types for the core crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    #[error("Env file error: {0}")]
    Env(#[from] dotenvy::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
