//! CLI entrypoint for mahjong-fortune
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::Parser;
use fortune_application::{GenerateFortuneInput, GenerateFortuneUseCase};
use fortune_domain::{Model, OutputFormat};
use fortune_infrastructure::{ConfigLoader, GeminiClient, GeminiSettings};
use fortune_presentation::{AttemptReporter, Cli, ConsoleFormatter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
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

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    for issue in config.validate() {
        warn!("config: {}", issue);
    }

    // Resolve the date
    let date = match &cli.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid --date '{}', expected YYYY-MM-DD", raw))?,
        None => Local::now().date_naive(),
    };

    // Candidate chain: CLI flags win, then config, then built-in defaults
    let candidates: Vec<Model> = if cli.model.is_empty() {
        config
            .models
            .parse_candidates()
            .0
            .unwrap_or_else(Model::default_candidates)
    } else {
        cli.model.iter().map(|s| s.parse().unwrap()).collect()
    };

    if candidates.is_empty() {
        bail!("no candidate models configured");
    }

    // The API key is resolved here, at the composition root, and handed to
    // the adapter as an explicit value.
    let Some(api_key) = config.gemini.resolve_api_key() else {
        bail!(
            "no API key found: set {} or gemini.api_key in the config file",
            config.gemini.api_key_env
        );
    };

    info!(
        candidates = candidates.len(),
        date = %date,
        "starting fortune generation"
    );

    // === Dependency Injection ===
    let mut settings = GeminiSettings::new(api_key)
        .with_timeout(Duration::from_secs(config.gemini.timeout_secs));
    if let Some(base_url) = &config.gemini.base_url {
        settings = settings.with_base_url(base_url);
    }
    let gateway =
        Arc::new(GeminiClient::new(settings).context("failed to build the Gemini client")?);

    let mut use_case = GenerateFortuneUseCase::new(gateway);
    if let Some(secs) = cli.deadline {
        use_case = use_case.with_deadline(Duration::from_secs(secs));
    }

    let mut input =
        GenerateFortuneInput::new(date, candidates).with_params(config.generation.params());
    if let Some(identity) = &cli.identity {
        input = input.with_identity(identity);
    }

    // Execute with or without the progress spinner
    let fortune = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let reporter = AttemptReporter::new();
        let result = use_case.execute_with_progress(input, &reporter).await;
        reporter.finish();
        result?
    };

    // Output
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .unwrap_or(config.output.format);
    let rendered = match format {
        OutputFormat::Text => ConsoleFormatter::format(&fortune),
        OutputFormat::Json => ConsoleFormatter::format_json(&fortune),
        OutputFormat::Share => ConsoleFormatter::format_share(&fortune),
    };

    println!("{}", rendered);

    Ok(())
}
