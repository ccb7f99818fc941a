//! Pipeline phase definitions

use serde::{Deserialize, Serialize};

/// Phase of a pipeline run
///
/// The direct modes run a single `Direct` phase. The resolver pipeline runs
/// `Fanout` then `Analyze` then `Resolve`, strictly in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Single-agent answer (zero-shot and step-by-step modes)
    Direct,
    /// Generators produce candidate answers in parallel
    Fanout,
    /// Researcher critiques the candidates
    Analyze,
    /// Resolver picks the best candidate and improves it
    Resolve,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Direct => "direct",
            Phase::Fanout => "fanout",
            Phase::Analyze => "analyze",
            Phase::Resolve => "resolve",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Direct => "Direct Answer",
            Phase::Fanout => "Candidate Generation",
            Phase::Analyze => "Research",
            Phase::Resolve => "Resolution",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
