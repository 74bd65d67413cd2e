//! Align command implementation

use crate::config::CliConfig;
use crate::input::{parse_chinese_sentences, read_english};
use crate::output::to_json;
use crate::error::CliResult;
use anyhow::Context;
use bitext_core::{AlignOptions, Aligner};
use clap::Parser;
use std::path::PathBuf;

/// Align an English paragraph onto a list of Chinese sentences and print
/// one English string per Chinese sentence as a JSON array
#[derive(Debug, Parser)]
#[command(name = "bitext-align", version, about, long_about = None)]
pub struct AlignArgs {
    /// Chinese sentences as a JSON array of strings
    #[arg(value_name = "CHINESE_JSON")]
    pub chinese: String,

    /// English paragraph ("-" reads it from stdin)
    #[arg(value_name = "ENGLISH")]
    pub english: String,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Partitions scored per segmentation policy
    #[arg(long, value_name = "N")]
    pub max_partitions: Option<usize>,

    /// Seed for partition sampling
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Print the full alignment report instead of the bare array
    #[arg(long)]
    pub report: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let chinese = parse_chinese_sentences(&self.chinese)?;
        let english = read_english(&self.english, std::io::stdin().lock())?;
        let aligner = Aligner::with_options(self.align_options(&config))
            .context("invalid alignment options")?;

        log::info!(
            "Aligning {} Chinese sentence(s) against {} byte(s) of English",
            chinese.len(),
            english.len()
        );

        let pretty = self.pretty || config.output.pretty_json;
        let json = if self.report {
            to_json(&aligner.align_detailed(&chinese, &english), pretty)?
        } else {
            to_json(&aligner.align(&chinese, &english), pretty)?
        };
        println!("{json}");

        Ok(())
    }

    /// Merge configuration file values with command-line overrides
    pub fn align_options(&self, config: &CliConfig) -> AlignOptions {
        let mut options = config.align_options();
        if let Some(max_partitions) = self.max_partitions {
            options.max_partitions = max_partitions;
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
        options.verbose = self.verbose > 0;
        options
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("failed to initialize logging")?;
        }

        Ok(())
    }
}
