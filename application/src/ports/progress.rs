//! Progress notification port
//!
//! Defines the interface for reporting pipeline progress. Implementations
//! live in the presentation layer (console reporters) or bridge events onto
//! a channel for streaming consumers.

use smartgpt_domain::{FinalResponse, Phase};
use tokio::sync::mpsc;

/// A pipeline-stage transition, suitable for streaming to a consumer
///
/// The sequence emitted for one `respond` call is finite: it ends with
/// exactly one `Completed` or `Failed` event.
#[derive(Debug, Clone)]
pub enum StatusEvent {
    /// A phase started; `total_tasks` agents will run within it
    PhaseStarted { phase: Phase, total_tasks: usize },
    /// One agent within a phase was dispatched
    AgentStarted { phase: Phase, index: usize },
    /// One agent within a phase finished
    AgentFinished {
        phase: Phase,
        index: usize,
        success: bool,
    },
    /// A phase completed
    PhaseCompleted { phase: Phase },
    /// The pipeline produced its final response
    Completed { response: FinalResponse },
    /// The pipeline failed
    Failed { message: String },
}

/// Callback for progress updates during pipeline execution
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when an agent is dispatched within a phase
    fn on_agent_start(&self, phase: &Phase, index: usize);

    /// Called when an agent completes within a phase
    fn on_agent_complete(&self, phase: &Phase, index: usize, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_agent_start(&self, _phase: &Phase, _index: usize) {}
    fn on_agent_complete(&self, _phase: &Phase, _index: usize, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}

/// Bridges progress callbacks onto an unbounded channel of [`StatusEvent`]s
///
/// Used by [`SmartGpt::stream_events`](crate::smart_gpt::SmartGpt::stream_events).
/// Send failures are ignored: a dropped receiver only means nobody is
/// watching anymore.
pub struct ChannelProgress {
    tx: mpsc::UnboundedSender<StatusEvent>,
}

impl ChannelProgress {
    /// Create a notifier and the receiver that observes its events
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StatusEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// A sender that can push terminal events onto the same stream
    pub fn sender(&self) -> mpsc::UnboundedSender<StatusEvent> {
        self.tx.clone()
    }
}

impl ProgressNotifier for ChannelProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let _ = self.tx.send(StatusEvent::PhaseStarted {
            phase: *phase,
            total_tasks,
        });
    }

    fn on_agent_start(&self, phase: &Phase, index: usize) {
        let _ = self.tx.send(StatusEvent::AgentStarted {
            phase: *phase,
            index,
        });
    }

    fn on_agent_complete(&self, phase: &Phase, index: usize, success: bool) {
        let _ = self.tx.send(StatusEvent::AgentFinished {
            phase: *phase,
            index,
            success,
        });
    }

    fn on_phase_complete(&self, phase: &Phase) {
        let _ = self.tx.send(StatusEvent::PhaseCompleted { phase: *phase });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_progress_forwards_events() {
        let (progress, mut rx) = ChannelProgress::new();

        progress.on_phase_start(&Phase::Fanout, 3);
        progress.on_agent_start(&Phase::Fanout, 1);
        progress.on_agent_complete(&Phase::Fanout, 1, true);
        progress.on_phase_complete(&Phase::Fanout);

        assert!(matches!(
            rx.try_recv().unwrap(),
            StatusEvent::PhaseStarted {
                phase: Phase::Fanout,
                total_tasks: 3
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            StatusEvent::AgentStarted {
                phase: Phase::Fanout,
                index: 1
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            StatusEvent::AgentFinished {
                index: 1,
                success: true,
                ..
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            StatusEvent::PhaseCompleted { .. }
        ));
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (progress, rx) = ChannelProgress::new();
        drop(rx);
        // Must not panic
        progress.on_phase_start(&Phase::Direct, 1);
    }
}
