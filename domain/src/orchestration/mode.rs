//! Operating mode definitions
//!
//! [`Mode`] is the single user-facing axis selecting which pipeline answers
//! a prompt. It is a closed tagged union: adding a mode means adding a tag
//! here and a strategy in the application layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline strategy selected for a `respond` call
///
/// Exactly one mode is active per call. The mode is read from settings at
/// call time and may differ between calls to the same orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One direct call with the raw prompt
    ZeroShot,
    /// One call with chain-of-thought prompt flavoring
    StepByStep,
    /// Generator fan-out, researcher critique, resolver synthesis
    #[default]
    Resolver,
}

impl Mode {
    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            Mode::ZeroShot => "Zero-shot: prompt sent directly to the model",
            Mode::StepByStep => "Step-by-step: chain-of-thought prompt flavoring",
            Mode::Resolver => "Resolver: generators + researcher + resolver",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::ZeroShot => write!(f, "zero_shot"),
            Mode::StepByStep => write!(f, "step_by_step"),
            Mode::Resolver => write!(f, "resolver"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero_shot" | "zero-shot" | "zeroshot" => Ok(Mode::ZeroShot),
            "step_by_step" | "step-by-step" | "stepbystep" => Ok(Mode::StepByStep),
            "resolver" => Ok(Mode::Resolver),
            _ => Err(format!("Invalid Mode: {}", s)),
        }
    }
}
