//! Domain layer for smartgpt
//!
//! This crate contains the core entities and value objects of the
//! multi-agent response pipeline. It has no dependencies on
//! infrastructure or presentation concerns, and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Modes
//!
//! A single user prompt can be answered three ways:
//!
//! - **ZeroShot**: one direct call with the raw prompt
//! - **StepByStep**: one call with chain-of-thought flavoring
//! - **Resolver**: N generators answer independently, a researcher
//!   critiques the candidates, and a resolver produces the final answer
//!
//! ## Agents
//!
//! An agent is a role-bound conversational unit. Its [`AgentRole`] selects
//! the [`PromptTemplate`] applied to every input, and its [`Transcript`] is
//! an append-only conversation log owned exclusively by that agent.

pub mod agent;
pub mod chat;
pub mod core;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use agent::role::AgentRole;
pub use chat::{
    message::{Message, Role},
    transcript::Transcript,
};
pub use core::{model::Model, prompt::Prompt};
pub use orchestration::{
    mode::Mode,
    phase::Phase,
    value_objects::{FinalResponse, GeneratorOutput, IntermediateArtifacts, ResearchAnalysis},
    verbosity::Verbosity,
};
pub use prompt::template::{PromptPayload, PromptTemplate};
