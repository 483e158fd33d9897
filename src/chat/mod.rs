//! Chat orchestration against an Ollama-compatible model.

pub mod client;
pub mod messages;
pub mod orchestrator;
pub mod prompts;

pub use client::{ChatBackend, OllamaClient};
pub use messages::{ChatMessage, ChatRequest, Role, ToolCall};
pub use orchestrator::{Answer, Orchestrator, ToolInvocation};
