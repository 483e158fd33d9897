use reqwest::blocking::Client;
use tracing::debug;

use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::ChatConfig;
use crate::error::ChatError;

/// Anything that can answer one chat round.
pub trait ChatBackend {
    fn chat(&self, request: &ChatRequest) -> Result<ChatMessage, ChatError>;
}

/// Blocking client for an Ollama-compatible service.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }
}

impl ChatBackend for OllamaClient {
    fn chat(&self, request: &ChatRequest) -> Result<ChatMessage, ChatError> {
        debug!(
            endpoint = %self.endpoint,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending chat request"
        );
        let response = self.http.post(&self.endpoint).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ChatError::InvalidResponse {
                message: e.to_string(),
            })?;
        Ok(parsed.message)
    }
}
