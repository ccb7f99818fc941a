//! Pipeline use cases
//!
//! One execution strategy per [`Mode`](smartgpt_domain::Mode). Each strategy
//! creates the agents it needs for a single `respond` call and discards
//! them afterward; no agent is reused across requests.

pub mod run_resolver;
pub mod run_step_by_step;
pub mod run_zero_shot;

use crate::config::settings::ConfigError;
use crate::ports::llm_gateway::GatewayError;
use smartgpt_domain::Phase;
use thiserror::Error;

/// Sampling temperature for the single agent in the direct modes.
///
/// The per-role temperatures in `Settings` only cover the resolver
/// pipeline's agents.
pub(crate) const DIRECT_TEMP: f32 = 0.5;

/// Errors surfaced to the orchestrator caller
///
/// Pipeline-internal failures are not recovered locally except the explicit
/// "drop failed generators but continue if quorum met" rule during fan-out;
/// everything else propagates with its cause preserved.
#[derive(Error, Debug)]
pub enum RespondError {
    #[error("llm call failed during {} phase", phase.as_str())]
    LlmCall {
        phase: Phase,
        #[source]
        source: GatewayError,
    },

    #[error("only {succeeded} generator(s) succeeded, {required} required")]
    InsufficientGenerators { succeeded: usize, required: usize },

    #[error("invalid configuration")]
    Configuration(#[from] ConfigError),

    #[error("response cancelled")]
    Cancelled,
}

impl RespondError {
    pub(crate) fn llm(phase: Phase, source: GatewayError) -> Self {
        Self::LlmCall { phase, source }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RespondError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_preserves_cause() {
        let err = RespondError::llm(Phase::Analyze, GatewayError::Timeout);
        assert_eq!(err.to_string(), "llm call failed during analyze phase");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "request timed out");
    }

    #[test]
    fn test_is_cancelled() {
        assert!(RespondError::Cancelled.is_cancelled());
        assert!(!RespondError::InsufficientGenerators {
            succeeded: 1,
            required: 2
        }
        .is_cancelled());
    }
}
