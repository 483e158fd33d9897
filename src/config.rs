//! Runtime configuration for the chat service and logging.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the chat model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Base URL of the Ollama-compatible service.
    pub base_url: String,
    /// Model name passed with every request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ChatConfig {
    /// Full URL of the chat endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        // OLLAMA_HOST is often set without a scheme
        if base.starts_with("http://") || base.starts_with("https://") {
            format!("{base}/api/chat")
        } else {
            format!("http://{base}/api/chat")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Raise the default level from `info` to `debug`.
    pub verbose: bool,
    /// Write logs here instead of stderr.
    pub file: Option<PathBuf>,
    /// The terminal is owned by the browser; drop logs unless `file` is set.
    pub quiet_terminal: bool,
}

impl LogConfig {
    #[must_use]
    pub fn default_directive(&self) -> &'static str {
        if self.verbose {
            "ifc_assistant=debug,info"
        } else {
            "ifc_assistant=info,warn"
        }
    }
}
