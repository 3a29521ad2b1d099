//! WFA Confluence Integration
//!
//! Page lookup and version-aware create-or-update against the Confluence
//! content API.

pub mod client;
pub mod error;
pub mod types;

pub use client::ConfluenceClient;
pub use error::{Error, Result};
pub use types::*;
