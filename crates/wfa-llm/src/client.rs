//! Chat completion client

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use wfa_core::http::{build_client, ensure_success, COMPLETION_TIMEOUT};
use wfa_core::LlmSettings;

use crate::extract::extract_content;
use crate::types::{ChatMessage, CompletionRequest};
use crate::Result;

const USER_INSTRUCTION: &str = "Summarize the following Jira issue for a Confluence update. \
     Include key context, decisions, and next steps if present.";

pub struct LlmClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        Ok(Self {
            http: build_client(COMPLETION_TIMEOUT)?,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    /// Ask the model to summarize a Jira issue payload.
    pub async fn summarize(&self, issue_payload: &Value, system_prompt: &str) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: build_messages(issue_payload, system_prompt)?,
        };

        tracing::debug!(url = %self.api_url, model = %self.model, "Requesting completion");

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;
        let body: Value = ensure_success(response).await?.json().await?;

        Ok(extract_content(&body))
    }
}

/// System prompt verbatim, then the fixed instruction with the issue JSON.
pub fn build_messages(issue_payload: &Value, system_prompt: &str) -> Result<Vec<ChatMessage>> {
    let dump = serde_json::to_string_pretty(issue_payload)?;
    Ok(vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(format!("{}\n\nJira JSON:\n{}", USER_INSTRUCTION, dump)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(&LlmSettings {
            api_url: format!("{}/v1/chat/completions", server.uri()),
            api_key: "llm-key".to_string(),
            model: "test-model".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_build_messages() {
        let payload = json!({"key": "ABC-123", "fields": {"summary": "Fix login bug"}});
        let messages = build_messages(&payload, "Summarize.").unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "Summarize.");
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.starts_with(
            "Summarize the following Jira issue for a Confluence update. Include key context"
        ));
        assert!(messages[1].content.contains("\n\nJira JSON:\n{"));
        assert!(messages[1].content.contains("\"summary\": \"Fix login bug\""));
    }

    #[tokio::test]
    async fn test_summarize_sends_model_and_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer llm-key"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [{"role": "system", "content": "Summarize."}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Root cause found."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .summarize(&json!({"key": "ABC-123"}), "Summarize.")
            .await
            .unwrap();
        assert_eq!(text, "Root cause found.");
    }

    #[tokio::test]
    async fn test_summarize_reads_alternate_shapes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "Y"})))
            .mount(&server)
            .await;

        let text = client_for(&server)
            .summarize(&json!({}), "Summarize.")
            .await
            .unwrap();
        assert_eq!(text, "Y");
    }

    #[tokio::test]
    async fn test_summarize_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .summarize(&json!({}), "Summarize.")
            .await
            .unwrap_err();
        match err {
            crate::Error::Http(e) => assert_eq!(e.status, 401),
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }
}
