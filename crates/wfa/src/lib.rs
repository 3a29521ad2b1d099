//! WFA
//!
//! Fetch a Jira issue, summarize it with a language model and publish the
//! result to a Confluence page.

pub mod pipeline;
pub mod report;

pub use pipeline::{Pipeline, PipelineError, RunReport, RunRequest, DEFAULT_SYSTEM_PROMPT};
