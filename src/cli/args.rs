//! Command line argument parsing for the textlens CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::Result;

/// textlens - word and sentence statistics for text files
#[derive(Parser, Debug, Clone)]
#[command(name = "textlens")]
#[command(about = "Compute word and sentence statistics for a text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextLensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format of the written report and the run summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text file and write the report
    Analyze(AnalyzeArgs),

    /// Write the built-in sample text to a file
    Sample(SampleArgs),
}

/// Arguments for analyzing a file
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text file to analyze
    #[arg(value_name = "INPUT", default_value = "input.txt")]
    pub input: PathBuf,

    /// File the report is written to (overwritten)
    #[arg(short, long, value_name = "OUTPUT", default_value = "output.txt")]
    pub output: PathBuf,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TEXTLENS_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Number of most frequent words to list
    #[arg(long)]
    pub top_words: Option<usize>,

    /// Number of repeated words to list
    #[arg(long)]
    pub top_duplicates: Option<usize>,

    /// Maximum bar length in the length distribution
    #[arg(long)]
    pub bar_width: Option<usize>,

    /// Write the sample text to INPUT first if INPUT does not exist
    #[arg(long)]
    pub create_sample: bool,

    /// Also print the report to stdout
    #[arg(short, long)]
    pub print: bool,
}

impl AnalyzeArgs {
    /// Build the analysis configuration: defaults, then the config file,
    /// then command line overrides.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config_file {
            Some(path) => AnalysisConfig::from_file(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(top_words) = self.top_words {
            config = config.with_top_words(top_words);
        }
        if let Some(top_duplicates) = self.top_duplicates {
            config = config.with_top_duplicates(top_duplicates);
        }
        if let Some(bar_width) = self.bar_width {
            config = config.with_bar_width(bar_width);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for writing the sample input
#[derive(Parser, Debug, Clone)]
pub struct SampleArgs {
    /// Path of the sample file
    #[arg(value_name = "PATH", default_value = "input.txt")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON statistics
    Json,
}
