//! Configuration loading and file schema

pub mod file_config;
pub mod loader;

pub use file_config::{ApiConfig, ChatConfig, FileConfig, FileConfigError, PipelineConfig};
pub use loader::ConfigLoader;
