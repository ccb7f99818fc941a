//! Prompt value object

use serde::{Deserialize, Serialize};

/// A user prompt to be answered by the pipeline (Value Object)
///
/// Immutable once constructed. The raw text carries no further structure;
/// role-specific wrapping happens in
/// [`PromptTemplate`](crate::prompt::template::PromptTemplate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Prompt cannot be empty");
        Self { content }
    }

    /// Try to create a new prompt, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_creation() {
        let p = Prompt::new("How many shoes fit in a house?");
        assert_eq!(p.content(), "How many shoes fit in a house?");
    }

    #[test]
    #[should_panic]
    fn test_empty_prompt_panics() {
        Prompt::new("  ");
    }

    #[test]
    fn test_try_new_rejects_blank_input_without_panicking() {
        assert!(Prompt::try_new("").is_none());
        assert!(Prompt::try_new("   \t\n").is_none());
        assert!(Prompt::try_new("hello").is_some());
    }
}
