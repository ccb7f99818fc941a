//! Agent role definitions
//!
//! An agent's role is fixed at creation and determines which prompt
//! template wraps every input before it is sent to the model.

use serde::{Deserialize, Serialize};

/// Role a conversational agent plays in a pipeline (Value Object)
///
/// - `Plain`: answers the raw prompt unchanged (zero-shot)
/// - `StepByStep`: answers the prompt with chain-of-thought flavoring
/// - `Generator`: produces one independent candidate answer; diversity
///   comes from sampling temperature, not prompt variation
/// - `Researcher`: critiques an ordered list of candidate answers
/// - `Resolver`: selects the best candidate per the critique and improves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Plain,
    StepByStep,
    Generator,
    Researcher,
    Resolver,
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Plain => "plain",
            AgentRole::StepByStep => "step_by_step",
            AgentRole::Generator => "generator",
            AgentRole::Researcher => "researcher",
            AgentRole::Resolver => "resolver",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
