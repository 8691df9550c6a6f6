//! Command-line definition and execution

use anyhow::Result;
use clap::Parser;
use linesift_core::{FilterConfig, Router, StatisticsAggregator};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input;

/// Classify lines from text files as integers, floats or strings, route
/// each line to its category file and optionally print statistics
#[derive(Debug, Parser)]
#[command(name = "linesift", version, about)]
pub struct Cli {
    /// Input files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub inputs: Vec<String>,

    /// Output directory for the category files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Filename prefix for the category files
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Append to pre-existing category files instead of truncating them
    #[arg(short, long)]
    pub append: bool,

    /// Print per-category counts after routing
    #[arg(short, long)]
    pub short: bool,

    /// Print counts plus per-category breakdowns (overrides --short)
    #[arg(short, long)]
    pub full: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Executes the run: routes every input line, then prints the
    /// requested report to stdout
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        let config = self.filter_config()?;
        log::info!(
            "Routing {} input file(s) into {}",
            config.input_files.len(),
            config.output_dir.display()
        );
        log::debug!("Arguments: {self:?}");

        // The aggregator only remembers where the category files live, so
        // it can be set up before the router consumes the config.
        let aggregator = StatisticsAggregator::from_config(&config);
        let summary = Router::new(config).route()?;
        log::info!(
            "Routed {} line(s): {} integers, {} floats, {} strings",
            summary.total(),
            summary.integers,
            summary.floats,
            summary.strings
        );

        if self.full {
            print!("{}", aggregator.full_statistics()?);
        } else if self.short {
            print!("{}", aggregator.short_statistics()?);
        }

        Ok(())
    }

    /// Merges command-line flags over config-file defaults into the core
    /// routing configuration
    fn filter_config(&self) -> Result<FilterConfig> {
        let defaults = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&defaults.output.directory));
        let prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| defaults.output.prefix.clone());
        let append = self.append || defaults.routing.append;

        let files = input::resolve_inputs(&self.inputs)?;

        let config = FilterConfig::builder()
            .input_files(files)
            .output_dir(output_dir)
            .prefix(prefix)
            .append(append)
            .build()?;
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
