//! Text analysis for textlens.
//!
//! This module turns raw text into the two sequences the statistics are
//! computed from: normalized word tokens and trimmed sentences.
//!
//! ```text
//! Raw Text → DelimiterTokenizer → LowercaseFilter → StripFilter → Tokens
//!          → SentenceSplitter → Sentences
//! ```

pub mod analyzer;
pub mod sentence;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
