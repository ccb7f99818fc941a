//! Zero-shot use case
//!
//! The simplest pipeline: one plain agent, one invocation with the raw
//! prompt, done.

use crate::agent::Agent;
use crate::config::settings::Settings;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::{RespondError, DIRECT_TEMP};
use smartgpt_domain::{AgentRole, FinalResponse, Mode, Phase, Prompt, PromptPayload};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Use case for answering a prompt with a single direct call
pub struct RunZeroShotUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl RunZeroShotUseCase {
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
        info!("Starting zero-shot pipeline");
        progress.on_phase_start(&Phase::Direct, 1);

        let mut agent = Agent::new(
            Arc::clone(&self.gateway),
            AgentRole::Plain,
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
        Ok(FinalResponse::new(text, Mode::ZeroShot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use smartgpt_domain::{Message, Model};
    use std::sync::Mutex;

    struct RecordingGateway {
        reply: String,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingGateway {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for RecordingGateway {
        async fn send(
            &self,
            _model: &Model,
            transcript: &[Message],
            _temperature: f32,
        ) -> Result<Message, GatewayError> {
            let prompt = transcript.last().unwrap().content.clone();
            self.calls.lock().unwrap().push(prompt);
            Ok(Message::assistant(self.reply.clone()))
        }
    }

    #[tokio::test]
    async fn test_single_call_with_raw_prompt() {
        let gateway = Arc::new(RecordingGateway::new("the answer"));
        let use_case = RunZeroShotUseCase::new(Arc::clone(&gateway) as Arc<dyn LlmGateway>);

        let response = use_case
            .execute(
                &Prompt::new("What is Rust?"),
                &Settings::default(),
                &NoProgress,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.text, "the answer");
        assert_eq!(response.mode_used, Mode::ZeroShot);
        assert!(response.artifacts.is_none());

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], "What is Rust?");
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates_with_phase() {
        struct FailingGateway;

        #[async_trait]
        impl LlmGateway for FailingGateway {
            async fn send(
                &self,
                _model: &Model,
                _transcript: &[Message],
                _temperature: f32,
            ) -> Result<Message, GatewayError> {
                Err(GatewayError::RateLimited)
            }
        }

        let use_case = RunZeroShotUseCase::new(Arc::new(FailingGateway));
        let result = use_case
            .execute(
                &Prompt::new("hi"),
                &Settings::default(),
                &NoProgress,
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(
            result,
            Err(RespondError::LlmCall {
                phase: Phase::Direct,
                source: GatewayError::RateLimited,
            })
        ));
    }

    #[tokio::test]
    async fn test_pre_cancelled_call_makes_no_response() {
        let gateway = Arc::new(RecordingGateway::new("unused"));
        let use_case = RunZeroShotUseCase::new(Arc::clone(&gateway) as Arc<dyn LlmGateway>);

        let token = CancellationToken::new();
        token.cancel();

        let result = use_case
            .execute(
                &Prompt::new("hi"),
                &Settings::default(),
                &NoProgress,
                &token,
            )
            .await;

        assert!(matches!(result, Err(RespondError::Cancelled)));
    }
}
