//! HTTP plumbing shared by the Jira, Confluence and completion clients

use std::time::Duration;

use base64::Engine;
use reqwest::Response;

/// Request timeout for Jira and Confluence calls.
pub const SERVICE_TIMEOUT: Duration = Duration::from_secs(30);

/// Request timeout for completion calls; model latency is much higher.
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_ERROR_BODY_CHARS: usize = 500;

/// A non-2xx response from one of the remote services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP {status} from {url}: {body}")]
pub struct HttpStatusError {
    pub status: u16,
    pub url: String,
    pub body: String,
}

/// Basic auth credentials (account email + API token)
pub struct BasicAuth {
    username: String,
    api_token: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    pub fn to_header(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.api_token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Build a reqwest client with a fixed per-request timeout.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Pass a successful response through, or turn it into an [`HttpStatusError`]
/// carrying the status code and (truncated) body text.
pub async fn ensure_success(response: Response) -> Result<Response, HttpStatusError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %url, "Request failed");

    Err(HttpStatusError {
        status: status.as_u16(),
        url,
        body: truncate(&body, MAX_ERROR_BODY_CHARS),
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
