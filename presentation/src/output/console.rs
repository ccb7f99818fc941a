//! Console output formatter for pipeline results

use colored::Colorize;
use smartgpt_domain::{FinalResponse, Verbosity};

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    ///
    /// What appears depends on `verbosity` and on which artifacts the
    /// pipeline attached: candidates only at the highest level, the
    /// researcher's analysis whenever artifacts were kept, the final
    /// answer always.
    pub fn format(response: &FinalResponse, verbosity: Verbosity) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Mode:".cyan().bold(),
            response.mode_used
        ));

        if let Some(artifacts) = &response.artifacts {
            if verbosity.wants_candidates() && !artifacts.candidates.is_empty() {
                output.push_str(&Self::section_header("Candidate Answers"));
                for candidate in &artifacts.candidates {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── answer option {} ──", candidate.agent_index + 1)
                            .yellow()
                            .bold(),
                        candidate.text
                    ));
                }
            }

            if let Some(analysis) = &artifacts.analysis {
                output.push_str(&Self::section_header("Researcher Analysis"));
                output.push_str(&format!("\n{}\n", analysis.critique));
            }
        }

        output.push_str(&Self::section_header("Final Answer"));
        output.push_str(&format!("\n{}\n", response.text));

        output
    }

    /// Format only the final answer text
    pub fn format_answer_only(response: &FinalResponse) -> String {
        response.text.clone()
    }

    /// Format as JSON
    pub fn format_json(response: &FinalResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("=== {} ===", title).cyan().bold())
    }
}
