//! Infrastructure layer for smartgpt
//!
//! Adapters behind the application-layer ports: the OpenAI HTTP gateway,
//! TOML configuration loading, and API key resolution.

pub mod config;
pub mod credentials;
pub mod openai;

pub use config::{ConfigLoader, FileConfig, FileConfigError};
pub use credentials::{ApiKey, CredentialsError, DUMMY_KEY};
pub use openai::{OpenAiGateway, DEFAULT_BASE_URL};
