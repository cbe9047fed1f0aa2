//! Word analyzer used for text statistics.
//!
//! # Pipeline
//!
//! 1. DelimiterTokenizer (whitespace and `, . ; : ! ? " ( ) -`)
//! 2. LowercaseFilter
//! 3. StripFilter (trims, drops fragments left empty)
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::analyzer::word::tokenize;
//!
//! let tokens = tokenize("The quick brown fox. The fox jumps!").unwrap();
//! let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//!
//! assert_eq!(words, vec!["the", "quick", "brown", "fox", "the", "fox", "jumps"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::analysis::tokenizer::delimiter::DelimiterTokenizer;
use crate::error::Result;

/// The analyzer that produces normalized word tokens.
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a new word analyzer with the default delimiter set.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(DelimiterTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .with_name("word");

        Ok(WordAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Split `text` into lowercase, punctuation-stripped word tokens in order of
/// appearance. Each token's `position` is its index in the returned vector.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Ok(WordAnalyzer::new()?.analyze(text)?.collect())
}
