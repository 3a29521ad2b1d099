//! Application configuration

use crate::{Error, Result};

pub const JIRA_BASE_URL: &str = "JIRA_BASE_URL";
pub const JIRA_EMAIL: &str = "JIRA_EMAIL";
pub const JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const CONFLUENCE_BASE_URL: &str = "CONFLUENCE_BASE_URL";
pub const CONFLUENCE_EMAIL: &str = "CONFLUENCE_EMAIL";
pub const CONFLUENCE_API_TOKEN: &str = "CONFLUENCE_API_TOKEN";
pub const CONFLUENCE_SPACE_KEY: &str = "CONFLUENCE_SPACE_KEY";
pub const LLM_API_URL: &str = "LLM_API_URL";
pub const LLM_API_KEY: &str = "LLM_API_KEY";
pub const LLM_MODEL: &str = "LLM_MODEL";

/// Connection settings for all three services.
///
/// Built once at startup and handed by reference to each client constructor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub jira: JiraSettings,
    pub confluence: ConfluenceSettings,
    pub llm: LlmSettings,
}

#[derive(Clone, PartialEq, Default)]
pub struct JiraSettings {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

#[derive(Clone, PartialEq, Default)]
pub struct ConfluenceSettings {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    /// Default space for new pages; can be overridden per run.
    pub space_key: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
pub struct LlmSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl Settings {
    /// Build settings from a variable lookup. Blank values count as unset and
    /// base URLs lose any trailing slash.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };
        let get_url = |name: &str| get(name).trim_end_matches('/').to_string();

        let space_key = get(CONFLUENCE_SPACE_KEY);

        Self {
            jira: JiraSettings {
                base_url: get_url(JIRA_BASE_URL),
                email: get(JIRA_EMAIL),
                api_token: get(JIRA_API_TOKEN),
            },
            confluence: ConfluenceSettings {
                base_url: get_url(CONFLUENCE_BASE_URL),
                email: get(CONFLUENCE_EMAIL),
                api_token: get(CONFLUENCE_API_TOKEN),
                space_key: (!space_key.is_empty()).then_some(space_key),
            },
            llm: LlmSettings {
                api_url: get(LLM_API_URL),
                api_key: get(LLM_API_KEY),
                model: get(LLM_MODEL),
            },
        }
    }

    /// Names of every required variable that has no value, in declaration order
    pub fn missing(&self) -> Vec<&'static str> {
        let required = [
            (JIRA_BASE_URL, &self.jira.base_url),
            (JIRA_EMAIL, &self.jira.email),
            (JIRA_API_TOKEN, &self.jira.api_token),
            (CONFLUENCE_BASE_URL, &self.confluence.base_url),
            (CONFLUENCE_EMAIL, &self.confluence.email),
            (CONFLUENCE_API_TOKEN, &self.confluence.api_token),
            (LLM_API_URL, &self.llm.api_url),
            (LLM_API_KEY, &self.llm.api_key),
            (LLM_MODEL, &self.llm.model),
        ];

        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Validate the configuration, reporting all missing names at once
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::MissingConfig(
            missing.into_iter().map(str::to_string).collect(),
        ))
    }
}

impl std::fmt::Debug for JiraSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraSettings")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &redacted(&self.api_token))
            .finish()
    }
}

impl std::fmt::Debug for ConfluenceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluenceSettings")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &redacted(&self.api_token))
            .field("space_key", &self.space_key)
            .finish()
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_url", &self.api_url)
            .field("api_key", &redacted(&self.api_key))
            .field("model", &self.model)
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}
