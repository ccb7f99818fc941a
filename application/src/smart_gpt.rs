//! Orchestrator facade
//!
//! [`SmartGpt`] owns the settings and the gateway, and dispatches each
//! `respond` call to the pipeline selected by the current mode. Every call
//! builds fresh agents, so consecutive calls with the same prompt are
//! independent of each other.

use crate::config::settings::{ConfigError, Settings};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{ChannelProgress, NoProgress, ProgressNotifier, StatusEvent};
use crate::use_cases::run_resolver::RunResolverUseCase;
use crate::use_cases::run_step_by_step::RunStepByStepUseCase;
use crate::use_cases::run_zero_shot::RunZeroShotUseCase;
use crate::use_cases::RespondError;
use smartgpt_domain::{FinalResponse, Mode, Prompt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// The orchestrator: one gateway, one settings snapshot, one entry point
/// per consumption style
pub struct SmartGpt {
    settings: Settings,
    gateway: Arc<dyn LlmGateway>,
}

impl SmartGpt {
    /// Build an orchestrator, rejecting settings no pipeline could satisfy
    pub fn new(gateway: Arc<dyn LlmGateway>, settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self { settings, gateway })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> Mode {
        self.settings.mode
    }

    /// Switch the pipeline used by subsequent `respond` calls
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("Switching mode to {}", mode);
        self.settings.mode = mode;
    }

    /// Answer a prompt with no progress reporting and no cancellation
    pub async fn respond(&self, prompt: &Prompt) -> Result<FinalResponse, RespondError> {
        self.respond_with_progress(prompt, &NoProgress, &CancellationToken::new())
            .await
    }

    /// Answer a prompt, reporting phase transitions to `progress` and
    /// aborting promptly once `cancel` is triggered
    pub async fn respond_with_progress(
        &self,
        prompt: &Prompt,
        progress: &dyn ProgressNotifier,
        cancel: &CancellationToken,
    ) -> Result<FinalResponse, RespondError> {
        info!("Dispatching prompt in {} mode", self.settings.mode);
        let gateway = Arc::clone(&self.gateway);
        match self.settings.mode {
            Mode::ZeroShot => {
                RunZeroShotUseCase::new(gateway)
                    .execute(prompt, &self.settings, progress, cancel)
                    .await
            }
            Mode::StepByStep => {
                RunStepByStepUseCase::new(gateway)
                    .execute(prompt, &self.settings, progress, cancel)
                    .await
            }
            Mode::Resolver => {
                RunResolverUseCase::new(gateway)
                    .execute(prompt, &self.settings, progress, cancel)
                    .await
            }
        }
    }

    /// Run the pipeline on a background task and observe it as a stream of
    /// [`StatusEvent`]s.
    ///
    /// The stream is finite: after the phase events it carries exactly one
    /// `Completed` or `Failed` event and then ends. Dropping or cancelling
    /// the returned [`EventStream`] aborts the run.
    pub fn stream_events(&self, prompt: Prompt) -> EventStream {
        let (progress, events) = ChannelProgress::new();
        let terminal = progress.sender();
        let cancel = CancellationToken::new();

        let gateway = Arc::clone(&self.gateway);
        let settings = self.settings.clone();
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let orchestrator = SmartGpt { settings, gateway };
            let result = orchestrator
                .respond_with_progress(&prompt, &progress, &task_cancel)
                .await;
            let event = match result {
                Ok(response) => StatusEvent::Completed { response },
                Err(e) => StatusEvent::Failed {
                    message: e.to_string(),
                },
            };
            let _ = terminal.send(event);
        });

        EventStream {
            events,
            cancel,
            handle,
        }
    }
}

/// Handle to a pipeline run in progress
///
/// Receives the run's [`StatusEvent`]s and can cancel the run early.
pub struct EventStream {
    events: mpsc::UnboundedReceiver<StatusEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl EventStream {
    /// Next event, or `None` once the terminal event has been consumed and
    /// the run is over
    pub async fn next_event(&mut self) -> Option<StatusEvent> {
        self.events.recv().await
    }

    /// Request that the running pipeline stop at its next await point
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the background task itself to finish
    pub async fn join(mut self) {
        let _ = (&mut self.handle).await;
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use smartgpt_domain::{Message, Model, Phase};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway that replies to any prompt by stage, counting calls
    struct CountingGateway {
        calls: AtomicUsize,
    }

    impl CountingGateway {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for CountingGateway {
        async fn send(
            &self,
            _model: &Model,
            transcript: &[Message],
            _temperature: f32,
        ) -> Result<Message, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let prompt = &transcript.last().unwrap().content;
            let reply = if prompt.starts_with("You are a researcher") {
                "critique"
            } else if prompt.starts_with("You are a resolver") {
                "resolved answer"
            } else {
                "candidate"
            };
            Ok(Message::assistant(reply.to_string()))
        }
    }

    #[tokio::test]
    async fn test_invalid_settings_rejected_at_construction() {
        let gateway = Arc::new(CountingGateway::new());
        let settings = Settings::default().with_generator_temps(vec![]);
        assert!(matches!(
            SmartGpt::new(gateway, settings),
            Err(ConfigError::NoGenerators)
        ));
    }

    #[tokio::test]
    async fn test_mode_selects_pipeline() {
        let gateway = Arc::new(CountingGateway::new());
        let mut orchestrator = SmartGpt::new(
            Arc::clone(&gateway) as Arc<dyn LlmGateway>,
            Settings::default().with_mode(Mode::ZeroShot),
        )
        .unwrap();

        let prompt = Prompt::new("Q?");
        let response = orchestrator.respond(&prompt).await.unwrap();
        assert_eq!(response.mode_used, Mode::ZeroShot);
        assert_eq!(gateway.call_count(), 1);

        orchestrator.set_mode(Mode::Resolver);
        let response = orchestrator.respond(&prompt).await.unwrap();
        assert_eq!(response.mode_used, Mode::Resolver);
        // 3 generators, one researcher, one resolver
        assert_eq!(gateway.call_count(), 1 + 5);
    }

    #[tokio::test]
    async fn test_consecutive_responds_are_independent() {
        let gateway = Arc::new(CountingGateway::new());
        let orchestrator = SmartGpt::new(
            Arc::clone(&gateway) as Arc<dyn LlmGateway>,
            Settings::default().with_mode(Mode::ZeroShot),
        )
        .unwrap();

        let prompt = Prompt::new("Q?");
        let first = orchestrator.respond(&prompt).await.unwrap();
        let second = orchestrator.respond(&prompt).await.unwrap();

        assert_eq!(first.text, second.text);
        // One fresh agent per call, no transcript carried across calls
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_stream_ends_with_completed() {
        let gateway = Arc::new(CountingGateway::new());
        let orchestrator = SmartGpt::new(
            Arc::clone(&gateway) as Arc<dyn LlmGateway>,
            Settings::default(),
        )
        .unwrap();

        let mut stream = orchestrator.stream_events(Prompt::new("Q?"));

        let mut events = Vec::new();
        while let Some(event) = stream.next_event().await {
            events.push(event);
        }

        assert!(matches!(
            events.first(),
            Some(StatusEvent::PhaseStarted {
                phase: Phase::Fanout,
                total_tasks: 3
            })
        ));
        match events.last() {
            Some(StatusEvent::Completed { response }) => {
                assert_eq!(response.text, "resolved answer");
            }
            other => panic!("expected terminal Completed, got {:?}", other),
        }
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(
                    e,
                    StatusEvent::Completed { .. } | StatusEvent::Failed { .. }
                ))
                .count(),
            1
        );

        // Every fan-out agent announces itself before it finishes.
        for index in 0..3 {
            let started = events.iter().position(|e| {
                matches!(e, StatusEvent::AgentStarted { phase: Phase::Fanout, index: i } if *i == index)
            });
            let finished = events.iter().position(|e| {
                matches!(e, StatusEvent::AgentFinished { phase: Phase::Fanout, index: i, .. } if *i == index)
            });
            match (started, finished) {
                (Some(s), Some(f)) => assert!(s < f),
                other => panic!("missing agent events for index {index}: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_cancelled_stream_never_completes() {
        struct StallingGateway;

        #[async_trait]
        impl LlmGateway for StallingGateway {
            async fn send(
                &self,
                _model: &Model,
                _transcript: &[Message],
                _temperature: f32,
            ) -> Result<Message, GatewayError> {
                tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
                Ok(Message::assistant("too late"))
            }
        }

        let orchestrator = SmartGpt::new(Arc::new(StallingGateway), Settings::default()).unwrap();
        let mut stream = orchestrator.stream_events(Prompt::new("Q?"));
        stream.cancel();

        let mut events = Vec::new();
        while let Some(event) = stream.next_event().await {
            events.push(event);
        }

        assert!(!events
            .iter()
            .any(|e| matches!(e, StatusEvent::Completed { .. })));
        assert!(matches!(events.last(), Some(StatusEvent::Failed { .. })));
    }

    #[tokio::test]
    async fn test_stream_reports_failure() {
        struct AlwaysFails;

        #[async_trait]
        impl LlmGateway for AlwaysFails {
            async fn send(
                &self,
                _model: &Model,
                _transcript: &[Message],
                _temperature: f32,
            ) -> Result<Message, GatewayError> {
                Err(GatewayError::AuthenticationFailed)
            }
        }

        let orchestrator = SmartGpt::new(Arc::new(AlwaysFails), Settings::default()).unwrap();
        let mut stream = orchestrator.stream_events(Prompt::new("Q?"));

        let mut last = None;
        while let Some(event) = stream.next_event().await {
            last = Some(event);
        }
        assert!(matches!(last, Some(StatusEvent::Failed { .. })));
    }
}
