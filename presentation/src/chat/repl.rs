//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use smartgpt_application::{NoProgress, SmartGpt};
use smartgpt_domain::{Mode, Prompt};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::str::FromStr;
use tokio_util::sync::CancellationToken;

/// Interactive chat REPL
///
/// Owns the orchestrator so `/mode` can switch pipelines between prompts.
pub struct ChatRepl {
    smart_gpt: SmartGpt,
    show_progress: bool,
    save_history: bool,
}

impl ChatRepl {
    pub fn new(smart_gpt: SmartGpt) -> Self {
        Self {
            smart_gpt,
            show_progress: true,
            save_history: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether to persist readline history across sessions
    pub fn with_history(mut self, save: bool) -> Self {
        self.save_history = save;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = if self.save_history {
            dirs::data_dir().map(|p| p.join("smartgpt").join("history.txt"))
        } else {
            None
        };

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            SmartGPT - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Mode: {}", self.smart_gpt.mode());
        println!("Model: {}", self.smart_gpt.settings().model);
        println!();
        println!("Commands:");
        println!("  /help          - Show this help");
        println!("  /mode [name]   - Show or switch pipeline mode");
        println!("  /settings      - Show current settings");
        println!("  /quit          - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let command = parts.next().unwrap_or(cmd);
        let arg = parts.next();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /mode [name]     - Show or switch mode (zero_shot, step_by_step, resolver)");
                println!("  /settings        - Show current settings");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/mode" => {
                match arg {
                    None => println!("Current mode: {}", self.smart_gpt.mode()),
                    Some(name) => match Mode::from_str(name) {
                        Ok(mode) => {
                            self.smart_gpt.set_mode(mode);
                            println!("Switched to {} mode", mode);
                        }
                        Err(e) => println!("{}", e),
                    },
                }
                false
            }
            "/settings" => {
                let settings = self.smart_gpt.settings();
                println!();
                println!("Mode:            {}", settings.mode);
                println!("Model:           {}", settings.model);
                println!("Verbosity:       {}", settings.verbosity);
                println!("Generator temps: {:?}", settings.generator_temps);
                println!("Researcher temp: {}", settings.researcher_temp);
                println!("Resolver temp:   {}", settings.resolver_temp);
                println!("Min generators:  {}", settings.min_generators);
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();

        let prompt = match Prompt::try_new(question) {
            Some(p) => p,
            None => return,
        };
        let cancel = CancellationToken::new();

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.smart_gpt
                .respond_with_progress(&prompt, &progress, &cancel)
                .await
        } else {
            self.smart_gpt
                .respond_with_progress(&prompt, &NoProgress, &cancel)
                .await
        };

        match result {
            Ok(response) => {
                let verbosity = self.smart_gpt.settings().verbosity;
                let output = ConsoleFormatter::format(&response, verbosity);
                println!("{}", output);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
