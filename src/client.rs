use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::GeminiConfig;
use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// A generative-text model that answers one prompt with raw text.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Model identifier used in diagnostics (e.g. "gemini-pro")
    fn model_name(&self) -> &str;

    /// Issue one generation call and return the raw text of the first
    /// candidate's reply.
    async fn generate(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Client for Google's Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// A missing API key is not an error here: the endpoint rejects the call
    /// with an HTTP failure, which is the only symptom the pipeline reports.
    pub fn new(config: &GeminiConfig) -> Self {
        GeminiClient {
            client: Client::new(),
            api_key: config.resolved_api_key().unwrap_or_default(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        GeminiClient {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        // Credential travels in the query string; never log the URL
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let envelope: Value = response.json().await?;
        debug!("generateContent envelope: {:?}", envelope);

        envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_owned)
            .ok_or(ClientError::Envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn mock_path() -> &'static str {
        "/v1beta/models/gemini-pro:generateContent"
    }

    #[test]
    fn test_model_name() {
        let client = GeminiClient::with_base_url("fake-key", "http://localhost", "gemini-pro");
        assert_eq!(client.model_name(), "gemini-pro");
    }

    #[tokio::test]
    async fn test_generate_extracts_candidate_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", mock_path())
            .match_query(Matcher::UrlEncoded("key".into(), "fake-key".into()))
            .match_body(Matcher::Regex("hello model".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "parts": [{
                                "text": "{\"title\":\"Bolo\"}"
                            }]
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("fake-key", server.url(), "gemini-pro");
        let raw = client.generate("hello model").await.unwrap();
        assert_eq!(raw, "{\"title\":\"Bolo\"}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_http_failure() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", mock_path())
            .match_query(Matcher::Any)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("bad-key", server.url(), "gemini-pro");
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, ClientError::Status(status) if status.as_u16() == 400));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_envelope_without_candidates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", mock_path())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("fake-key", server.url(), "gemini-pro");
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, ClientError::Envelope));
    }

    #[tokio::test]
    async fn test_generate_non_json_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", mock_path())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("not json at all")
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("fake-key", server.url(), "gemini-pro");
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
