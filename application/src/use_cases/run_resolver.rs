//! Resolver use case
//!
//! The full pipeline: N generator agents answer the prompt independently
//! (fan-out), a researcher critiques the ordered candidate list, and a
//! resolver produces the final answer from the critique.
//!
//! Generator invocations run concurrently, but candidate ordering is fixed
//! by generator creation order regardless of completion order, because the
//! researcher prompt numbers candidates positionally. The analyze and
//! resolve phases are strictly sequential: each needs the complete output
//! of the previous phase.

use crate::agent::Agent;
use crate::config::settings::Settings;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::RespondError;
use smartgpt_domain::{
    AgentRole, FinalResponse, GeneratorOutput, IntermediateArtifacts, Mode, Phase, Prompt,
    PromptPayload, ResearchAnalysis,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Use case for running the generator/researcher/resolver pipeline
pub struct RunResolverUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl RunResolverUseCase {
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
        info!(
            "Starting resolver pipeline with {} generators",
            settings.num_generators()
        );

        let candidates = self.phase_fanout(prompt, settings, progress, cancel).await?;
        let analysis = self
            .phase_analyze(prompt, settings, &candidates, progress, cancel)
            .await?;
        let text = self
            .phase_resolve(prompt, settings, &analysis, progress, cancel)
            .await?;

        let mut response = FinalResponse::new(text, Mode::Resolver);
        if settings.verbosity.wants_artifacts() {
            response =
                response.with_artifacts(IntermediateArtifacts::new(candidates, Some(analysis)));
        }
        Ok(response)
    }

    /// Fan-out: every generator answers the raw prompt concurrently.
    ///
    /// Failed generators are dropped, not retried. If fewer than the
    /// configured quorum succeed, the pipeline fails without running the
    /// researcher or resolver.
    async fn phase_fanout(
        &self,
        prompt: &Prompt,
        settings: &Settings,
        progress: &dyn ProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratorOutput>, RespondError> {
        let width = settings.num_generators();
        progress.on_phase_start(&Phase::Fanout, width);

        let mut join_set = JoinSet::new();
        for (index, &temp) in settings.generator_temps.iter().enumerate() {
            let mut agent = Agent::new(
                Arc::clone(&self.gateway),
                AgentRole::Generator,
                settings.model.clone(),
                temp,
            );
            let payload = PromptPayload::raw(prompt.content());
            progress.on_agent_start(&Phase::Fanout, index);
            join_set.spawn(async move {
                let result = agent.invoke(payload).await;
                (index, result)
            });
        }

        let mut candidates = Vec::with_capacity(width);
        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    join_set.abort_all();
                    return Err(RespondError::Cancelled);
                }
                joined = join_set.join_next() => joined,
            };

            match joined {
                None => break,
                Some(Ok((index, Ok(text)))) => {
                    debug!("Generator {} responded", index);
                    progress.on_agent_complete(&Phase::Fanout, index, true);
                    candidates.push(GeneratorOutput::new(index, text));
                }
                Some(Ok((index, Err(e)))) => {
                    warn!("Generator {} failed: {}", index, e);
                    progress.on_agent_complete(&Phase::Fanout, index, false);
                }
                Some(Err(e)) => {
                    warn!("Generator task join error: {}", e);
                }
            }
        }
        progress.on_phase_complete(&Phase::Fanout);

        // Completion order is arbitrary under concurrent dispatch; the
        // researcher numbers candidates by creation order.
        candidates.sort_by_key(|c| c.agent_index);

        if candidates.len() < settings.min_generators {
            return Err(RespondError::InsufficientGenerators {
                succeeded: candidates.len(),
                required: settings.min_generators,
            });
        }
        Ok(candidates)
    }

    /// Analyze: one researcher critiques the full candidate list. Failure
    /// here is fatal to the pipeline.
    async fn phase_analyze(
        &self,
        prompt: &Prompt,
        settings: &Settings,
        candidates: &[GeneratorOutput],
        progress: &dyn ProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<ResearchAnalysis, RespondError> {
        info!("Researcher analyzing {} candidates", candidates.len());
        progress.on_phase_start(&Phase::Analyze, 1);

        let mut researcher = Agent::new(
            Arc::clone(&self.gateway),
            AgentRole::Researcher,
            settings.model.clone(),
            settings.researcher_temp,
        );
        let payload = PromptPayload::Candidates {
            question: prompt.content().to_string(),
            candidates: candidates.iter().map(|c| c.text.clone()).collect(),
        };
        progress.on_agent_start(&Phase::Analyze, 0);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RespondError::Cancelled),
            result = researcher.invoke(payload) => result,
        };

        let critique = match result {
            Ok(critique) => {
                progress.on_agent_complete(&Phase::Analyze, 0, true);
                critique
            }
            Err(e) => {
                progress.on_agent_complete(&Phase::Analyze, 0, false);
                return Err(RespondError::llm(Phase::Analyze, e));
            }
        };

        progress.on_phase_complete(&Phase::Analyze);
        Ok(ResearchAnalysis::new(critique))
    }

    /// Resolve: one resolver reads the critique and produces the final
    /// answer. Which candidate wins is the model's judgment, not a
    /// deterministic scoring rule.
    async fn phase_resolve(
        &self,
        prompt: &Prompt,
        settings: &Settings,
        analysis: &ResearchAnalysis,
        progress: &dyn ProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<String, RespondError> {
        info!("Resolver synthesizing final answer");
        progress.on_phase_start(&Phase::Resolve, 1);

        let mut resolver = Agent::new(
            Arc::clone(&self.gateway),
            AgentRole::Resolver,
            settings.model.clone(),
            settings.resolver_temp,
        );
        let payload = PromptPayload::Critique {
            question: prompt.content().to_string(),
            critique: analysis.critique.clone(),
        };
        progress.on_agent_start(&Phase::Resolve, 0);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RespondError::Cancelled),
            result = resolver.invoke(payload) => result,
        };

        let text = match result {
            Ok(text) => {
                progress.on_agent_complete(&Phase::Resolve, 0, true);
                text
            }
            Err(e) => {
                progress.on_agent_complete(&Phase::Resolve, 0, false);
                return Err(RespondError::llm(Phase::Resolve, e));
            }
        };

        progress.on_phase_complete(&Phase::Resolve);
        Ok(text)
    }
}
