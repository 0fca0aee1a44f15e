use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::{SummarizeError, Summarizer};

/// Hosted Ollama endpoint.
pub const DEFAULT_HOST: &str = "https://ollama.com";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3";

const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// Blocking Ollama chat client.
pub struct OllamaClient {
    http: reqwest::blocking::Client,
    host: String,
    model: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for OllamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_key stays out of debug output
        f.debug_struct("OllamaClient")
            .field("host", &self.host)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OllamaClient {
    /// Create a client for `model`, optionally with a bearer key.
    pub fn new(model: &str, api_key: Option<&str>) -> Result<Self, SummarizeError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            host: DEFAULT_HOST.to_string(),
            model: model.to_string(),
            api_key: api_key.map(str::to_string),
        })
    }

    /// Point the client at a different host (local daemon, tests).
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.trim_end_matches('/').to_string();
        self
    }
}

impl Summarizer for OllamaClient {
    fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        tracing::info!(model = %self.model, "requesting trend analysis");
        let mut request = self
            .http
            .post(format!("{}/api/chat", self.host))
            .json(&json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "stream": false,
            }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send()?;
        if !response.status().is_success() {
            return Err(SummarizeError::Status(response.status().as_u16()));
        }
        let parsed: ChatResponse = response
            .json()
            .map_err(|e| SummarizeError::Payload(format!("chat response: {e}")))?;
        Ok(parsed.message.content)
    }
}
