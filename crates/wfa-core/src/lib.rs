//! WFA Core
//!
//! Shared models, configuration, HTTP plumbing and the Confluence body renderer
//! used by the service clients and the pipeline.

pub mod env;
pub mod error;
pub mod http;
pub mod models;
pub mod render;

pub use error::{Error, Result};
pub use http::{BasicAuth, HttpStatusError};
pub use models::{ConfluenceSettings, Issue, JiraSettings, LlmSettings, Settings, SummaryResult};
