//! API key handling
//!
//! The key is wrapped so it can never leak into logs whole: both `Display`
//! and `Debug` render the masked form. Code that actually needs the raw
//! value calls [`ApiKey::reveal`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Placeholder written into a fresh credentials file
pub const DUMMY_KEY: &str = "XXXXXX";

/// Environment variable checked before the credentials file
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error(
        "no API key found. Set {API_KEY_ENV} or put your key in '{path}'. \
         Get one at https://platform.openai.com/account/api-keys"
    )]
    Missing { path: String },

    #[error(
        "the credentials file '{path}' still holds the placeholder '{DUMMY_KEY}'. \
         Replace it with your API key from https://platform.openai.com/account/api-keys"
    )]
    Placeholder { path: String },

    #[error("failed to read credentials file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An OpenAI API key
///
/// Cloneable so adapters can own a copy; comparison is supported so callers
/// can detect the placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The placeholder key written into a fresh credentials file
    pub fn dummy() -> Self {
        Self(DUMMY_KEY.to_string())
    }

    pub fn is_dummy(&self) -> bool {
        self.0 == DUMMY_KEY
    }

    /// The raw key, for request construction only
    pub fn reveal(&self) -> &str {
        &self.0
    }

    /// Masked rendering: first and last four characters with the middle
    /// elided. Keys too short to mask meaningfully render as stars only.
    pub fn masked(&self) -> String {
        if self.is_dummy() {
            return self.0.clone();
        }
        if self.0.len() <= 8 {
            return "****".to_string();
        }
        format!("{}****{}", &self.0[..4], &self.0[self.0.len() - 4..])
    }

    /// Resolve a key: environment variable first, then the credentials file.
    ///
    /// A missing credentials file is created holding the placeholder, so the
    /// error message can point the user at a concrete path to edit.
    pub fn resolve() -> Result<Self, CredentialsError> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                debug!("Using API key from {}", API_KEY_ENV);
                return Ok(Self::new(key));
            }
        }

        let path = Self::credentials_path();
        Self::load(&path)
    }

    /// Load a key from `path`, seeding the file with the placeholder if it
    /// does not exist yet
    pub fn load(path: &Path) -> Result<Self, CredentialsError> {
        let display = path.display().to_string();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = fs::write(path, DUMMY_KEY);
            return Err(CredentialsError::Missing { path: display });
        }

        let contents = fs::read_to_string(path).map_err(|source| CredentialsError::Io {
            path: display.clone(),
            source,
        })?;
        let key = Self::new(contents);

        if key.is_dummy() || key.reveal().is_empty() {
            return Err(CredentialsError::Placeholder { path: display });
        }
        debug!("Loaded API key {} from {}", key, path.display());
        Ok(key)
    }

    /// Default credentials file location, next to the config file
    pub fn credentials_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("smartgpt")
            .join("credentials")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.masked())
    }
}
