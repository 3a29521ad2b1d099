//! The fetch → summarize → render → publish pipeline

use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;
use wfa_confluence::ConfluenceClient;
use wfa_core::render::render_storage_body;
use wfa_core::{Settings, SummaryResult};
use wfa_jira::JiraClient;
use wfa_llm::LlmClient;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a concise technical writer. \
     Summarize the Jira issue for a Confluence update. \
     Return clear sections: Overview, Impact, Decisions, Next Steps.";

/// Pipeline error; the first failure stops the run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Config(#[from] wfa_core::Error),

    #[error(transparent)]
    Jira(#[from] wfa_jira::Error),

    #[error(transparent)]
    Llm(#[from] wfa_llm::Error),

    #[error(transparent)]
    Confluence(#[from] wfa_confluence::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// User input for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunRequest {
    pub issue_key: String,
    pub page_title: String,
    pub page_id: Option<String>,
    pub space_key: Option<String>,
    pub system_prompt: String,
}

impl RunRequest {
    /// Build a request from raw input. Text is trimmed and blank optional
    /// values become `None`.
    pub fn new(
        issue_key: impl AsRef<str>,
        page_title: impl AsRef<str>,
        page_id: Option<String>,
        space_key: Option<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            issue_key: issue_key.as_ref().trim().to_string(),
            page_title: page_title.as_ref().trim().to_string(),
            page_id: non_blank(page_id),
            space_key: non_blank(space_key),
            system_prompt: system_prompt.into(),
        }
    }

    /// Fill in the space key from configuration when none was given
    pub fn with_default_space_key(mut self, default: Option<&str>) -> Self {
        if self.space_key.is_none() {
            self.space_key = non_blank(default.map(str::to_string));
        }
        self
    }

    /// Check the required inputs. Runs before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.issue_key.is_empty() || self.page_title.is_empty() {
            return Err(PipelineError::Validation(
                "Please provide Jira key and Confluence title.".to_string(),
            ));
        }

        if self.space_key.is_none() && self.page_id.is_none() {
            return Err(PipelineError::Validation(
                "Provide a Confluence space key or a page ID.".to_string(),
            ));
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub page_id: Option<String>,
    pub page_url: Option<String>,
    pub summary: SummaryResult,
}

pub struct Pipeline {
    jira: JiraClient,
    llm: LlmClient,
    confluence: ConfluenceClient,
}

impl Pipeline {
    /// Build fresh clients from validated settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            jira: JiraClient::new(&settings.jira)?,
            llm: LlmClient::new(&settings.llm)?,
            confluence: ConfluenceClient::new(&settings.confluence)?,
        })
    }

    pub async fn run(&self, request: &RunRequest) -> Result<RunReport> {
        request.validate()?;

        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("run", %run_id, issue_key = %request.issue_key);

        self.run_steps(request, run_id).instrument(span).await
    }

    async fn run_steps(&self, request: &RunRequest, run_id: Uuid) -> Result<RunReport> {
        tracing::info!("Fetching Jira issue");
        let issue = self.jira.fetch_issue(&request.issue_key).await?;
        tracing::info!(key = %issue.key, "Jira issue loaded");

        tracing::info!("Sending to LLM");
        let llm_response = self
            .llm
            .summarize(&issue.raw, &request.system_prompt)
            .await?;
        tracing::info!(chars = llm_response.len(), "LLM response received");

        let summary = SummaryResult::new(&issue, llm_response, run_id);
        let body = render_storage_body(&summary);

        tracing::info!(title = %request.page_title, "Updating Confluence");
        let page = self
            .confluence
            .upsert_page(
                request.space_key.as_deref().unwrap_or_default(),
                &request.page_title,
                &body,
                request.page_id.as_deref(),
            )
            .await?;
        tracing::info!(page_id = ?page.id, "Confluence page created/updated");

        let page_url = page
            .id
            .as_deref()
            .map(|id| self.confluence.page_view_url(id));

        Ok(RunReport {
            page_id: page.id,
            page_url,
            summary,
        })
    }
}
