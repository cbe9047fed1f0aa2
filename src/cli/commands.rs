//! Command implementations for the textlens CLI.
//!
//! This is the only layer that touches the file system or logs. The
//! analysis itself runs on the fully read input text, and the report is
//! written only after the analysis has finished.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::{Result, TextLensError};
use crate::report::{NO_WORDS_MESSAGE, ReportFormatter, render_json};
use crate::stats::{Statistics, analyze_text};

/// Text written by `textlens sample` and `analyze --create-sample`.
pub const SAMPLE_TEXT: &str = "
The quick brown fox jumps over the lazy dog. This is a classic pangram sentence.
Lorem ipsum dolor sit amet, consectetur adipiscing elit.
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.
The quick brown fox appears again in this text for analysis.
Programming is fun and challenging. Rust is a powerful language.
Ownership and borrowing make memory safety easier.
Iterators provide powerful query capabilities for data manipulation.
The fox jumps quickly. The dog is lazy but friendly.
Data analysis helps us understand patterns in text.
This sample contains various words of different lengths and frequencies.";

/// Execute a CLI command.
pub fn execute_command(args: TextLensArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_file(analyze_args.clone(), &args),
        Command::Sample(sample_args) => create_sample(sample_args.clone(), &args),
    }
}

/// Analyze the input file and write the report.
fn analyze_file(args: AnalyzeArgs, cli_args: &TextLensArgs) -> Result<()> {
    let config = args.analysis_config()?;
    debug!("Analysis configuration: {config:?}");

    if args.create_sample && !args.input.exists() {
        info!("Creating sample input file {}", args.input.display());
        write_sample_file(&args.input)?;
    }

    if !args.input.exists() {
        return Err(TextLensError::input_not_found(
            args.input.display().to_string(),
        ));
    }

    info!("Reading {}", args.input.display());
    let text = fs::read_to_string(&args.input)?;
    let input_chars = text.chars().count();
    info!("File read successfully. Length: {input_chars} characters");

    let start_time = Instant::now();
    info!("Analyzing text");
    let (document, stats) =
        render_document(&text, &config, cli_args.output_format, cli_args.pretty)?;
    if stats.is_none() {
        warn!("No words found in {}", args.input.display());
    }

    info!("Saving results to {}", args.output.display());
    fs::write(&args.output, &document)?;
    let duration = start_time.elapsed();

    if args.print {
        println!("{document}");
    }

    output_result(
        &format!(
            "Text analysis completed successfully. Results saved to {}.",
            args.output.display()
        ),
        &AnalysisSummary {
            input: args.input.to_string_lossy().to_string(),
            output: args.output.to_string_lossy().to_string(),
            input_chars,
            total_words: stats.as_ref().map_or(0, |s| s.total_words),
            unique_words: stats.as_ref().map_or(0, |s| s.unique_words),
            sentence_count: stats.as_ref().map_or(0, |s| s.sentence_count),
            report_bytes: document.len(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Write the sample text, refusing to overwrite unless forced.
fn create_sample(args: SampleArgs, cli_args: &TextLensArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(TextLensError::invalid_operation(format!(
            "{} already exists. Use --force to overwrite.",
            args.path.display()
        )));
    }

    let bytes = write_sample_file(&args.path)?;

    output_result(
        &format!("Sample file '{}' created successfully.", args.path.display()),
        &SampleCreationResult {
            path: args.path.to_string_lossy().to_string(),
            bytes,
            created: true,
        },
        cli_args,
    )?;

    Ok(())
}

/// Write [`SAMPLE_TEXT`] to `path`, creating parent directories.
pub fn write_sample_file(path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SAMPLE_TEXT)?;
    Ok(SAMPLE_TEXT.len())
}

/// Analyze `text` and render the output document in `format`.
///
/// Input without words yields the "no words" document and `None` statistics
/// instead of an error.
pub fn render_document(
    text: &str,
    config: &AnalysisConfig,
    format: OutputFormat,
    pretty: bool,
) -> Result<(String, Option<Statistics>)> {
    let stats = match analyze_text(text, config) {
        Ok(stats) => Some(stats),
        Err(e) if e.is_empty_input() => None,
        Err(e) => return Err(e),
    };

    let formatter = ReportFormatter::new(config.clone());
    let document = match (format, &stats) {
        (OutputFormat::Human, Some(stats)) => formatter.format(stats),
        (OutputFormat::Human, None) => formatter.format_empty(),
        (OutputFormat::Json, Some(stats)) => format!("{}\n", render_json(stats, pretty)?),
        (OutputFormat::Json, None) => {
            format!("{}\n", serde_json::json!({ "message": NO_WORDS_MESSAGE }))
        }
    };

    Ok((document, stats))
}
