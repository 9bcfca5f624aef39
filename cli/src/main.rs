//! CLI entrypoint for FashionOS Insights
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;
use clap::Parser;
use fashionos_application::{
    Clock, FixedClock, GenerateInsightsUseCase, InsightLogger, LatencySimulator, NoInsightLogger,
    NoLatency,
};
use fashionos_domain::{InsightInput, Model, OutputFormat, Severity};
use fashionos_infrastructure::{
    ConfigLoader, FileConfig, JsonlInsightLogger, ScenarioLoader, SimulatedLatency, SystemClock,
    demo_scenario,
};
use fashionos_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the file writer alive until exit so buffered lines are flushed
    let _log_guard = init_logging(&cli)?;

    info!("Starting FashionOS Insights");

    // === Configuration ===
    if cli.show_config {
        return show_config(&cli);
    }
    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let clock: Arc<dyn Clock> = match cli.as_of {
        Some(date) => Arc::new(FixedClock(date.and_time(NaiveTime::MIN).and_utc())),
        None => Arc::new(SystemClock),
    };

    let latency: Arc<dyn LatencySimulator> = if cli.no_latency || !config.dispatch.simulate_latency
    {
        Arc::new(NoLatency)
    } else {
        Arc::new(SimulatedLatency::from_millis(
            config.dispatch.flash_latency_ms,
            config.dispatch.standard_latency_ms,
        ))
    };

    let insight_path = cli.insight_log.clone().or(config.log.insight_log.clone());
    let logger: Arc<dyn InsightLogger> = match insight_path {
        Some(path) => match JsonlInsightLogger::new(&path) {
            Some(logger) => {
                info!("Insight log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => {
                warn!("Continuing without insight log");
                Arc::new(NoInsightLogger)
            }
        },
        None => Arc::new(NoInsightLogger),
    };

    let mut params = config.execution_params();
    if let Some(tag) = &cli.model {
        let Ok(model) = tag.parse::<Model>();
        params = params.with_model(model);
    }

    let input = load_input(&cli, clock.as_ref())?;

    let use_case = GenerateInsightsUseCase::from_params(params, latency, clock).with_logger(logger);

    let result = if cli.quiet {
        use_case.execute(input).await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await
    };

    // === Output ===
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    println!("{}", ConsoleFormatter.render(&result, format));

    Ok(())
}

/// Console logging by verbosity, plus daily log files when `--log-dir` is set
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "fashionos-insights.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("config error: {}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Configuration has errors; fix them or run with --no-config");
    }

    Ok(config)
}

fn load_input(cli: &Cli, clock: &dyn Clock) -> Result<InsightInput> {
    if cli.demo {
        info!("Using built-in demo scenario");
        return Ok(demo_scenario(clock.now()));
    }

    match &cli.scenario {
        Some(path) => ScenarioLoader::load(path)
            .with_context(|| format!("Failed to load scenario {}", path.display())),
        None => bail!("A scenario file is required. Use --demo for the built-in scenario."),
    }
}

fn show_config(cli: &Cli) -> Result<()> {
    println!("Configuration sources (in priority order, lowest first):");
    for source in ConfigLoader::sources(cli.config.as_deref()) {
        let marker = if source.found { "FOUND" } else { "     " };
        match &source.path {
            Some(path) => println!("  [{}] {:<8} {}", marker, source.label, path.display()),
            None => println!("  [{}] {:<8} built-in defaults", marker, source.label),
        }
    }
    println!("  [     ] Env      FASHIONOS_<SECTION>__<KEY>");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    println!("\nMerged configuration:\n");
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
