//! Step-by-step use case
//!
//! Identical to zero-shot except the agent carries the step-by-step role,
//! so every prompt gets the chain-of-thought flavoring before it is sent.

use crate::agent::Agent;
use crate::config::settings::Settings;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::{RespondError, DIRECT_TEMP};
use smartgpt_domain::{AgentRole, FinalResponse, Mode, Phase, Prompt, PromptPayload};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Use case for answering a prompt with chain-of-thought flavoring
pub struct RunStepByStepUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl RunStepByStepUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        prompt: &Prompt,
        settings: &Settings,
        progress: &dyn ProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<FinalResponse, RespondError> {
        info!("Starting step-by-step pipeline");
        progress.on_phase_start(&Phase::Direct, 1);

        let mut agent = Agent::new(
            Arc::clone(&self.gateway),
            AgentRole::StepByStep,
            settings.model.clone(),
            DIRECT_TEMP,
        );
        progress.on_agent_start(&Phase::Direct, 0);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RespondError::Cancelled),
            result = agent.invoke(PromptPayload::raw(prompt.content())) => result,
        };

        let text = match result {
            Ok(text) => {
                progress.on_agent_complete(&Phase::Direct, 0, true);
                text
            }
            Err(e) => {
                progress.on_agent_complete(&Phase::Direct, 0, false);
                return Err(RespondError::llm(Phase::Direct, e));
            }
        };

        progress.on_phase_complete(&Phase::Direct);
        Ok(FinalResponse::new(text, Mode::StepByStep))
    }
}
