// src/services/llm_client.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Response parsing failed: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Upstream returned {status}: {body}")]
    ErrorStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Upstream returned no completion")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint (Groq by default).
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LlmClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One system turn plus one user turn; returns the first choice's text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: [
                CompletionMessage { role: ROLE_SYSTEM, content: system },
                CompletionMessage { role: ROLE_USER, content: user },
            ],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::ErrorStatus { status, body });
        }

        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String, LlmError> {
    let response: CompletionResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_choice() {
        let body = r#"{"id":"x","choices":[
            {"index":0,"message":{"role":"assistant","content":"first"}},
            {"index":1,"message":{"role":"assistant","content":"second"}}
        ]}"#;
        assert_eq!(parse_completion(body).unwrap(), "first");
    }

    #[test]
    fn no_choices_is_an_error() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, LlmError::EmptyCompletion));
    }

    #[test]
    fn null_content_is_an_error() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(matches!(parse_completion(body), Err(LlmError::EmptyCompletion)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(parse_completion("<html>"), Err(LlmError::ParseFailed(_))));
    }

    #[test]
    fn trailing_slash_on_base_url_is_dropped() {
        let client = LlmClient::new("k", "m", "http://localhost:1234/v1/").unwrap();
        assert_eq!(client.base_url, "http://localhost:1234/v1");
        assert_eq!(client.model(), "m");
    }
}
