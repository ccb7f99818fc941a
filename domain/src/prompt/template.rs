//! Prompt templates for each agent role
//!
//! Pure string construction, no state, no failure modes. The researcher
//! template numbers candidates by position, and the resolver reads that
//! same numbering back out of the critique, so candidate ordering must be
//! stable across both.

use crate::agent::role::AgentRole;

/// Structured input handed to [`PromptTemplate::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPayload {
    /// A raw prompt string
    Raw(String),
    /// The original question plus candidate answers in creation order
    Candidates {
        question: String,
        candidates: Vec<String>,
    },
    /// The original question plus the researcher's critique
    Critique { question: String, critique: String },
}

impl PromptPayload {
    pub fn raw(text: impl Into<String>) -> Self {
        PromptPayload::Raw(text.into())
    }

    /// The payload's primary text, used when a role's template expects a
    /// plain string
    fn primary_text(&self) -> &str {
        match self {
            PromptPayload::Raw(text) => text,
            PromptPayload::Candidates { question, .. } => question,
            PromptPayload::Critique { question, .. } => question,
        }
    }
}

/// Templates for generating prompts at each pipeline stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Render a payload through the template bound to `role`.
    ///
    /// Total over all role/payload combinations: roles whose template takes
    /// a plain string use the payload's primary text.
    pub fn render(role: AgentRole, payload: &PromptPayload) -> String {
        match (role, payload) {
            (AgentRole::Plain | AgentRole::Generator, _) => payload.primary_text().to_string(),
            (AgentRole::StepByStep, _) => Self::step_by_step(payload.primary_text()),
            (
                AgentRole::Researcher,
                PromptPayload::Candidates {
                    question,
                    candidates,
                },
            ) => Self::researcher(question, candidates),
            (AgentRole::Resolver, PromptPayload::Critique { question, critique }) => {
                Self::resolver(question, critique)
            }
            // Structured roles handed a bare string: nothing to embed
            (AgentRole::Researcher | AgentRole::Resolver, _) => {
                payload.primary_text().to_string()
            }
        }
    }

    /// Chain-of-thought flavoring applied in step-by-step mode
    pub fn step_by_step(prompt: &str) -> String {
        format!(
            "Question: {}. Answer: Let's work this out in a step by step way \
             to be sure we have the right answer.",
            prompt
        )
    }

    /// Researcher prompt: the question plus every candidate, numbered by
    /// creation order
    pub fn researcher(question: &str, candidates: &[String]) -> String {
        let options = candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| format!("Answer option {}:\n\n{}", idx + 1, candidate))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "You are a researcher tasked with investigating the {} answer \
             options provided below. Identify the strengths and weaknesses \
             of each answer option. Let's work this out in a step by step \
             way to be sure we have all the errors:\n\n\
             Question: {}\n\n{}",
            candidates.len(),
            question,
            options
        )
    }

    /// Resolver prompt: the question plus the researcher's critique
    pub fn resolver(question: &str, critique: &str) -> String {
        format!(
            "You are a resolver tasked with finding which answer option the \
             researcher thought was best, improving that answer, and printing \
             the improved answer in full.\n\n\
             Question: {}\n\n\
             Researcher analysis:\n\n{}\n\n\
             Let's work this out in a step by step way to be sure we have \
             the right answer:",
            question, critique
        )
    }
}
