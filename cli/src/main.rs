//! CLI entrypoint for SmartGPT
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use smartgpt_application::{NoProgress, SmartGpt};
use smartgpt_domain::{Mode, Prompt, Verbosity};
use smartgpt_infrastructure::{ApiKey, ConfigLoader, FileConfig, OpenAiGateway};
use smartgpt_presentation::{Cli, ChatRepl, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting SmartGPT");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration, seeding the global file with defaults on first run
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = ConfigLoader::global_config_path() {
            if !path.exists() {
                match ConfigLoader::load_defaults().save(&path) {
                    Ok(path) => info!("Wrote default config to {}", path.display()),
                    Err(e) => debug!("Could not write default config: {}", e),
                }
            }
        }
        ConfigLoader::load(cli.config.as_ref())?
    };

    let mut settings = config.to_settings()?;

    // CLI flags override file configuration
    if let Some(mode) = &cli.mode {
        settings.mode = mode.parse::<Mode>().map_err(anyhow::Error::msg)?;
    }
    if let Some(model) = &cli.model {
        settings.model = model.clone().into();
    }
    if let Some(verbosity) = &cli.verbosity {
        settings.verbosity = verbosity.parse::<Verbosity>().map_err(anyhow::Error::msg)?;
    }

    // === Dependency Injection ===
    let api_key = ApiKey::resolve()?;
    info!("Using API key {}", api_key);

    let gateway = match &config.api.base_url {
        Some(url) => OpenAiGateway::with_base_url(api_key, url),
        None => OpenAiGateway::new(api_key),
    }?
    .with_timeout(Duration::from_secs(config.api.timeout_secs))?;
    let gateway = Arc::new(gateway);

    let smart_gpt = SmartGpt::new(gateway, settings)?;

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(smart_gpt)
            .with_progress(!cli.quiet)
            .with_history(config.chat.save_history);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };
    let prompt = match Prompt::try_new(question) {
        Some(p) => p,
        None => bail!("Question cannot be empty."),
    };

    // Ctrl-C aborts the pipeline mid-flight
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let result = if cli.quiet {
        smart_gpt
            .respond_with_progress(&prompt, &NoProgress, &cancel)
            .await?
    } else {
        let progress = ProgressReporter::new();
        smart_gpt
            .respond_with_progress(&prompt, &progress, &cancel)
            .await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result, smart_gpt.settings().verbosity),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
