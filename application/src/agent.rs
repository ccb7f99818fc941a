//! Role-bound conversational agent
//!
//! An [`Agent`] owns one transcript and produces one response per
//! invocation by rendering its input through the role's prompt template and
//! delegating to the LLM gateway. Pipelines create agents for the duration
//! of a single `respond` call and discard them afterward.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use smartgpt_domain::{AgentRole, Message, Model, PromptPayload, PromptTemplate, Transcript};
use std::sync::Arc;

/// A single role-bound conversational unit
pub struct Agent {
    role: AgentRole,
    model: Model,
    temperature: f32,
    transcript: Transcript,
    gateway: Arc<dyn LlmGateway>,
}

impl Agent {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        role: AgentRole,
        model: Model,
        temperature: f32,
    ) -> Self {
        Self {
            role,
            model,
            temperature,
            transcript: Transcript::new(),
            gateway,
        }
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    /// The conversation so far. Only this agent appends to it.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Render the payload through the role's template, send the full
    /// transcript as context, and return the assistant text.
    ///
    /// The user and assistant messages are appended together only after the
    /// gateway call succeeds, so a failed call leaves the transcript
    /// untouched. Repeated invocations carry forward the full history.
    pub async fn invoke(&mut self, payload: PromptPayload) -> Result<String, GatewayError> {
        let prompt = PromptTemplate::render(self.role, &payload);
        let user = Message::user(prompt);

        let mut context: Vec<Message> = self.transcript.messages().to_vec();
        context.push(user.clone());

        let reply = self
            .gateway
            .send(&self.model, &context, self.temperature)
            .await?;

        let text = reply.content.clone();
        self.transcript.push(user);
        self.transcript.push(reply);

        Ok(text)
    }
}
