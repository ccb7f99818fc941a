//! Orchestration value objects - immutable result types for pipeline runs.
//!
//! These types represent the outputs of each pipeline phase:
//! - [`GeneratorOutput`] - one candidate answer from the fan-out phase
//! - [`ResearchAnalysis`] - the researcher's critique of the candidates
//! - [`IntermediateArtifacts`] - optional per-phase outputs for display
//! - [`FinalResponse`] - the single answer returned to the caller

use crate::orchestration::mode::Mode;
use serde::{Deserialize, Serialize};

/// One candidate answer produced by a generator agent
///
/// `agent_index` is the generator's creation order, which fixes how the
/// candidate is numbered in the researcher prompt regardless of completion
/// order. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOutput {
    /// Creation-order index of the generator that produced this answer
    pub agent_index: usize,
    /// The candidate answer text
    pub text: String,
}

impl GeneratorOutput {
    pub fn new(agent_index: usize, text: impl Into<String>) -> Self {
        Self {
            agent_index,
            text: text.into(),
        }
    }
}

/// The researcher's critique of the ordered candidate list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchAnalysis {
    /// Critique text identifying strengths and flaws of each candidate
    pub critique: String,
}

impl ResearchAnalysis {
    pub fn new(critique: impl Into<String>) -> Self {
        Self {
            critique: critique.into(),
        }
    }
}

/// Intermediate pipeline outputs, attached when verbosity requests them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediateArtifacts {
    /// Candidate answers in generator creation order
    pub candidates: Vec<GeneratorOutput>,
    /// The researcher's critique, if the analyze phase ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ResearchAnalysis>,
}

impl IntermediateArtifacts {
    pub fn new(candidates: Vec<GeneratorOutput>, analysis: Option<ResearchAnalysis>) -> Self {
        Self {
            candidates,
            analysis,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.analysis.is_none()
    }
}

/// The single answer returned for one `respond` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResponse {
    /// The answer text
    pub text: String,
    /// Which pipeline produced the answer
    pub mode_used: Mode,
    /// Per-phase outputs; present only when verbosity requests them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<IntermediateArtifacts>,
}

impl FinalResponse {
    pub fn new(text: impl Into<String>, mode_used: Mode) -> Self {
        Self {
            text: text.into(),
            mode_used,
            artifacts: None,
        }
    }

    pub fn with_artifacts(mut self, artifacts: IntermediateArtifacts) -> Self {
        self.artifacts = Some(artifacts);
        self
    }
}
