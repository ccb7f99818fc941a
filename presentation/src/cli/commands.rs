//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for pipeline results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output including intermediate artifacts
    Full,
    /// Only the final answer
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for smartgpt
#[derive(Parser, Debug)]
#[command(name = "smartgpt")]
#[command(author, version, about = "SmartGPT - generate, critique, and resolve LLM answers")]
#[command(long_about = r#"
SmartGPT answers a prompt by running a small pipeline of agents.

In resolver mode (the default) the process has three phases:
1. Candidate Generation: several generator agents answer independently
2. Research: a researcher critiques every candidate answer
3. Resolution: a resolver reads the critique and produces the final answer

Zero-shot mode sends your prompt directly to the model, and step-by-step
mode adds chain-of-thought flavoring to it first.

Configuration files are loaded from (in priority order):
1. SMARTGPT_* environment variables
2. --config <path>     Explicit config file
3. ./smartgpt.toml     Project-level config
4. ~/.config/smartgpt/config.toml   Global config

Example:
  smartgpt "How many tennis balls fit in a school bus?"
  smartgpt --mode step_by_step "Why is the sky blue?"
  smartgpt --chat --model gpt-4-turbo
"#)]
pub struct Cli {
    /// The prompt to answer (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Pipeline mode: zero_shot, step_by_step, or resolver
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Model identifier to use for every agent
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// How much intermediate output to keep: none, some, or all
    #[arg(long, value_name = "LEVEL")]
    pub verbosity: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Log verbosity (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_question() {
        let cli = Cli::parse_from(["smartgpt", "Why is the sky blue?"]);
        assert_eq!(cli.question.as_deref(), Some("Why is the sky blue?"));
        assert!(!cli.chat);
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "smartgpt",
            "--mode",
            "zero_shot",
            "--model",
            "gpt-4-turbo",
            "--verbosity",
            "all",
            "-vv",
            "Q?",
        ]);
        assert_eq!(cli.mode.as_deref(), Some("zero_shot"));
        assert_eq!(cli.model.as_deref(), Some("gpt-4-turbo"));
        assert_eq!(cli.verbosity.as_deref(), Some("all"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_chat_mode_needs_no_question() {
        let cli = Cli::parse_from(["smartgpt", "--chat"]);
        assert!(cli.chat);
        assert!(cli.question.is_none());
    }
}
