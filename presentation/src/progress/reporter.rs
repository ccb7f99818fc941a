//! Progress reporting for pipeline execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use smartgpt_application::ports::progress::ProgressNotifier;
use smartgpt_domain::Phase;
use std::sync::Mutex;

/// Reports progress during pipeline execution with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name());
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_agent_start(&self, _phase: &Phase, index: usize) {
        if let Ok(slot) = self.phase_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(format!("agent {}...", index + 1));
            }
        }
    }

    fn on_agent_complete(&self, _phase: &Phase, index: usize, success: bool) {
        if let Ok(slot) = self.phase_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                let status = if success {
                    format!("{} agent {}", "v".green(), index + 1)
                } else {
                    format!("{} agent {}", "x".red(), index + 1)
                };
                pb.set_message(status);
                pb.inc(1);
            }
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        );
    }

    fn on_agent_start(&self, _phase: &Phase, _index: usize) {}

    fn on_agent_complete(&self, _phase: &Phase, index: usize, success: bool) {
        if success {
            println!("  {} agent {}", "v".green(), index + 1);
        } else {
            println!("  {} agent {} (failed)", "x".red(), index + 1);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        println!();
    }
}
