//! Issue data model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Jira issue normalized for summarization.
///
/// `raw` keeps the full decoded API response; it is what gets sent to the
/// completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub description: String,
    pub raw: Value,
}
