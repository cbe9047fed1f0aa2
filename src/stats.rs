//! Text statistics.
//!
//! [`aggregator::aggregate`] turns a token list and a sentence list into a
//! [`statistics::Statistics`] snapshot. [`analyze_text`] runs the whole
//! pipeline on raw text.
//!
//! # Examples
//!
//! ```
//! use textlens::config::AnalysisConfig;
//! use textlens::stats::analyze_text;
//!
//! let stats = analyze_text("cat cat cat.", &AnalysisConfig::default()).unwrap();
//! assert_eq!(stats.total_words, 3);
//! assert_eq!(stats.unique_words, 1);
//! assert_eq!(stats.sentence_count, 1);
//! ```

pub mod aggregator;
pub mod statistics;

pub use aggregator::aggregate;
pub use statistics::{DuplicateEntry, FrequencyEntry, LengthBucket, Statistics};

use crate::analysis::analyzer::tokenize;
use crate::analysis::sentence::split_sentences;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Tokenize, split into sentences, and aggregate `text`.
///
/// Returns [`TextLensError::EmptyInput`](crate::error::TextLensError::EmptyInput)
/// when the text contains no words.
pub fn analyze_text(text: &str, config: &AnalysisConfig) -> Result<Statistics> {
    let tokens = tokenize(text)?;
    let sentences = split_sentences(text);
    aggregate(&tokens, &sentences, config)
}
