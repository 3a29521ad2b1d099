//! Summary data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::Issue;

pub const SOURCE: &str = "wfa";

/// The outcome of summarizing one issue, ready to render into a page.
///
/// Only constructible from a fetched [`Issue`] and a completion response, so a
/// value of this type always means both upstream calls succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResult {
    pub jira_key: String,
    pub jira_summary: String,
    pub jira_description: String,
    pub llm_response: String,
    pub created_at: DateTime<Utc>,
    pub metadata: BTreeMap<String, Value>,
}

impl SummaryResult {
    /// Create a summary stamped with the current time
    pub fn new(issue: &Issue, llm_response: String, run_id: Uuid) -> Self {
        Self::at(issue, llm_response, run_id, Utc::now())
    }

    /// Create a summary with an explicit creation time
    pub fn at(issue: &Issue, llm_response: String, run_id: Uuid, created_at: DateTime<Utc>) -> Self {
        let metadata = BTreeMap::from([
            ("source".to_string(), Value::from(SOURCE)),
            ("jira_key".to_string(), Value::from(issue.key.clone())),
            ("run_id".to_string(), Value::from(run_id.to_string())),
        ]);

        Self {
            jira_key: issue.key.clone(),
            jira_summary: issue.summary.clone(),
            jira_description: issue.description.clone(),
            llm_response,
            created_at,
            metadata,
        }
    }
}
