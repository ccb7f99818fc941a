//! Application layer for smartgpt
//!
//! This crate contains the pipeline use cases, port definitions, and the
//! [`SmartGpt`] orchestrator facade. It depends only on the domain layer;
//! gateway adapters live in the infrastructure layer.

pub mod agent;
pub mod config;
pub mod ports;
pub mod smart_gpt;
pub mod use_cases;

// Re-export commonly used types
pub use agent::Agent;
pub use config::settings::{ConfigError, Settings};
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{ChannelProgress, NoProgress, ProgressNotifier, StatusEvent},
};
pub use smart_gpt::{EventStream, SmartGpt};
pub use use_cases::{
    run_resolver::RunResolverUseCase,
    run_step_by_step::RunStepByStepUseCase,
    run_zero_shot::RunZeroShotUseCase,
    RespondError,
};
