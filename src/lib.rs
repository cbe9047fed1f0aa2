//! # textlens
//!
//! Word and sentence statistics for text files.
//!
//! ## Pipeline
//!
//! - [`analysis`] splits raw text into normalized word tokens and sentences
//! - [`stats`] aggregates them into a [`stats::Statistics`] snapshot
//! - [`report`] formats the snapshot as a plain text report
//!
//! The [`cli`] module wraps the pipeline with file I/O, logging, and the
//! `textlens` command line tool.
//!
//! ```
//! use textlens::config::AnalysisConfig;
//! use textlens::report::render_report;
//!
//! let report = render_report("The quick brown fox. The fox jumps!", &AnalysisConfig::default())
//!     .unwrap();
//! assert!(report.contains("Total words: 7"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod stats;

pub mod prelude {
    pub use crate::analysis::analyzer::tokenize;
    pub use crate::analysis::sentence::split_sentences;
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Result, TextLensError};
    pub use crate::report::{ReportFormatter, render_report};
    pub use crate::stats::{Statistics, aggregate, analyze_text};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
