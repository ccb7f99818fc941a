//! Model value object representing an LLM model identifier

use serde::{Deserialize, Serialize};

/// An LLM model identifier (Value Object)
///
/// The pipeline passes this through to the gateway unchanged; it imposes
/// no model-selection heuristics of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for Model {
    /// Returns the default model (`gpt-4`)
    fn default() -> Self {
        Self("gpt-4".to_string())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(Model::default().as_str(), "gpt-4");
    }

    #[test]
    fn test_passthrough_identifier() {
        let model: Model = "some-future-model-v9".into();
        assert_eq!(model.to_string(), "some-future-model-v9");
    }

    #[test]
    fn test_is_empty() {
        assert!(Model::new("   ").is_empty());
        assert!(!Model::default().is_empty());
    }
}
