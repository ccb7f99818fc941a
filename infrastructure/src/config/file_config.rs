//! TOML configuration file schema
//!
//! Mirrors the on-disk `smartgpt.toml` layout. All fields have defaults so a
//! partial file merges cleanly; conversion into runtime [`Settings`] is where
//! string-typed fields get parsed and rejected.

use serde::{Deserialize, Serialize};
use smartgpt_application::config::settings::Settings;
use smartgpt_domain::{Mode, Verbosity};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileConfigError {
    #[error("invalid `pipeline.mode`: {0}")]
    InvalidMode(String),

    #[error("invalid `pipeline.verbosity`: {0}")]
    InvalidVerbosity(String),

    #[error("failed to write config file '{path}'")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub pipeline: PipelineConfig,
    pub api: ApiConfig,
    pub chat: ChatConfig,
}

/// `[pipeline]` section: which strategy runs and with what parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: String,
    pub model: String,
    pub verbosity: String,
    pub generator_temps: Vec<f32>,
    pub researcher_temp: f32,
    pub resolver_temp: f32,
    pub min_generators: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            mode: settings.mode.to_string(),
            model: settings.model.to_string(),
            verbosity: settings.verbosity.to_string(),
            generator_temps: settings.generator_temps,
            researcher_temp: settings.researcher_temp,
            resolver_temp: settings.resolver_temp,
            min_generators: settings.min_generators,
        }
    }
}

/// `[api]` section: endpoint plumbing, not pipeline behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Override for OpenAI-compatible endpoints; `None` means the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 120,
        }
    }
}

/// `[chat]` section: interactive session behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Persist readline history across sessions
    pub save_history: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { save_history: true }
    }
}

impl FileConfig {
    /// Convert the parsed file into validated runtime settings
    pub fn to_settings(&self) -> Result<Settings, FileConfigError> {
        let mode = Mode::from_str(&self.pipeline.mode).map_err(FileConfigError::InvalidMode)?;
        let verbosity = Verbosity::from_str(&self.pipeline.verbosity)
            .map_err(FileConfigError::InvalidVerbosity)?;

        Ok(Settings {
            mode,
            model: self.pipeline.model.clone().into(),
            verbosity,
            generator_temps: self.pipeline.generator_temps.clone(),
            researcher_temp: self.pipeline.researcher_temp,
            resolver_temp: self.pipeline.resolver_temp,
            min_generators: self.pipeline.min_generators,
        })
    }

    /// Write the configuration as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<PathBuf, FileConfigError> {
        let rendered = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| FileConfigError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }
        fs::write(path, rendered).map_err(|source| FileConfigError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path.to_path_buf())
    }
}
