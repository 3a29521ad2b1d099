//! WFA JIRA Integration
//!
//! Client library for fetching issues from JIRA and flattening their
//! rich-text descriptions.

pub mod adf;
pub mod client;
pub mod error;

pub use client::JiraClient;
pub use error::{Error, Result};
