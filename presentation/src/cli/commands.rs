//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use fashionos_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Executive insight plus every agent's report
    Full,
    /// Only the executive insight
    Executive,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Executive => OutputFormat::Executive,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for fashionos-insights
#[derive(Parser, Debug)]
#[command(name = "fashionos-insights")]
#[command(author, version, about = "Executive insight for fashion events from five planning agents")]
#[command(long_about = r#"
FashionOS Insights runs five planning agents over one event and surfaces at
most one executive insight: the single thing that needs attention now.

Agents:
  event-planner         timeline health from the workflow board
  ops-risk              venue lead time and run-up risk
  budget-guardian       spend against plan
  sponsor-intelligence  sponsor pipeline health
  attendee-flow         guest load against venue capacity

When no agent is both confident and asking for action, nothing is shown.

Configuration files are loaded from (in priority order):
1. FASHIONOS_* environment variables (e.g. FASHIONOS_DISPATCH__MODEL)
2. --config <path>     Explicit config file
3. ./fashionos.toml    Project-level config
4. ~/.config/fashionos/config.toml   Global config

Example:
  fashionos-insights --demo
  fashionos-insights show.json -o full
  fashionos-insights show.toml --as-of 2025-08-01 --model gemini-pro
"#)]
pub struct Cli {
    /// Scenario file to analyze (.json or .toml)
    #[arg(value_name = "SCENARIO", required_unless_present_any = ["demo", "show_config"])]
    pub scenario: Option<PathBuf>,

    /// Analyze the built-in demo scenario
    #[arg(long, conflicts_with = "scenario")]
    pub demo: bool,

    /// Freeze the clock at midnight UTC of this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Model tag for dispatches (gemini-flash, gemini-pro, or custom)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Skip the simulated model latency
    #[arg(long)]
    pub no_latency: bool,

    /// Output format (defaults to the config file, then executive)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
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

    /// Show configuration file locations and the merged settings, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Append structured orchestration events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub insight_log: Option<PathBuf>,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_demo_with_options() {
        let cli = Cli::try_parse_from([
            "fashionos-insights",
            "--demo",
            "--as-of",
            "2025-08-01",
            "-o",
            "full",
            "-vv",
        ])
        .unwrap();
        assert!(cli.demo);
        assert_eq!(cli.as_of, NaiveDate::from_ymd_opt(2025, 8, 1));
        assert_eq!(cli.output, Some(OutputFormatArg::Full));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_scenario_or_demo_is_required() {
        assert!(Cli::try_parse_from(["fashionos-insights"]).is_err());
        assert!(Cli::try_parse_from(["fashionos-insights", "--show-config"]).is_ok());
    }

    #[test]
    fn test_scenario_conflicts_with_demo() {
        assert!(Cli::try_parse_from(["fashionos-insights", "show.json", "--demo"]).is_err());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(
            Cli::try_parse_from(["fashionos-insights", "--demo", "--as-of", "01/08/2025"]).is_err()
        );
    }

    #[test]
    fn test_output_arg_maps_to_domain_format() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Executive),
            OutputFormat::Executive
        );
    }
}
