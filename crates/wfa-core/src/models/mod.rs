pub mod config;
pub mod issue;
pub mod summary;

pub use config::{ConfluenceSettings, JiraSettings, LlmSettings, Settings};
pub use issue::Issue;
pub use summary::SummaryResult;
