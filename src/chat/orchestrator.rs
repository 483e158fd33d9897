//! Question answering through one tool-calling round.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::client::ChatBackend;
use super::messages::{ChatMessage, ChatRequest, ToolCall};
use super::prompts::{FALLBACK_PROMPT, RELAY_PROMPT};
use crate::error::ChatError;
use crate::query::{dispatch, QueryContext, QueryTool};

/// A tool the model asked for, with what it returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: Value,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub tool_calls: Vec<ToolInvocation>,
}

/// Routes a question to the model, runs the tools it picks and asks it to
/// relay their output.
pub struct Orchestrator<'a> {
    backend: Box<dyn ChatBackend + 'a>,
    model: String,
    ctx: QueryContext<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        backend: Box<dyn ChatBackend + 'a>,
        model: impl Into<String>,
        ctx: QueryContext<'a>,
    ) -> Self {
        Self {
            backend,
            model: model.into(),
            ctx,
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn ask(&self, question: &str) -> Result<Answer, ChatError> {
        info!(model = %self.model, "Asking: {question}");
        let mut messages = vec![ChatMessage::user(question)];
        let request = ChatRequest::new(&self.model, messages.clone())
            .with_tools(QueryTool::definitions());
        let reply = self.backend.chat(&request)?;

        if reply.tool_calls.is_empty() {
            debug!("No tool selected, answering with the fallback prompt");
            let request = ChatRequest::new(
                &self.model,
                vec![ChatMessage::system(FALLBACK_PROMPT), ChatMessage::user(question)],
            );
            let answer = self.backend.chat(&request)?;
            return Ok(Answer {
                text: answer.content,
                tool_calls: Vec::new(),
            });
        }

        let invocations: Vec<ToolInvocation> =
            reply.tool_calls.iter().map(|call| self.run_tool(call)).collect();

        messages.push(reply);
        messages.push(ChatMessage::system(RELAY_PROMPT));
        messages.extend(
            invocations
                .iter()
                .map(|call| ChatMessage::tool(&call.name, &call.output)),
        );

        let answer = self
            .backend
            .chat(&ChatRequest::new(&self.model, messages))?;
        info!(tools = invocations.len(), "Answer ready");
        Ok(Answer {
            text: answer.content,
            tool_calls: invocations,
        })
    }

    fn run_tool(&self, call: &ToolCall) -> ToolInvocation {
        let name = call.function.name.clone();
        let arguments = call.function.arguments();
        if QueryTool::from_name(&name).is_none() {
            warn!("Model requested unknown tool {name}");
        }
        let output = dispatch(&self.ctx, &name, &arguments);
        debug!(tool = %name, %arguments, %output, "Tool finished");
        ToolInvocation {
            name,
            arguments,
            output,
        }
    }
}
