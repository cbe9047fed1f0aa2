//! Delimiter tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TextLensError};

/// Characters that separate words: whitespace plus common punctuation.
pub const DEFAULT_DELIMITERS: &[char] = &[
    ' ', '\t', '\n', '\r', ',', '.', ';', ':', '!', '?', '"', '(', ')', '-',
];

/// A tokenizer that emits the text between runs of delimiter characters.
///
/// Consecutive delimiters never produce empty fragments. Text without any
/// delimiter is emitted as a single token.
#[derive(Clone, Debug)]
pub struct DelimiterTokenizer {
    /// Matches one or more delimiter characters
    pattern: Arc<Regex>,
}

impl DelimiterTokenizer {
    /// Create a tokenizer using [`DEFAULT_DELIMITERS`].
    pub fn new() -> Result<Self> {
        Self::with_delimiters(DEFAULT_DELIMITERS)
    }

    /// Create a tokenizer splitting on a custom delimiter set.
    pub fn with_delimiters(delimiters: &[char]) -> Result<Self> {
        if delimiters.is_empty() {
            return Err(TextLensError::analysis("Delimiter set must not be empty"));
        }

        let class: String = delimiters
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let regex = Regex::new(&format!("[{class}]+"))
            .map_err(|e| TextLensError::analysis(format!("Invalid delimiter pattern: {e}")))?;

        Ok(DelimiterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut last_end = 0;
        let mut position = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(Token::with_offsets(
                    &text[last_end..mat.start()],
                    position,
                    last_end,
                    mat.start(),
                ));
                position += 1;
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(Token::with_offsets(
                &text[last_end..],
                position,
                last_end,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "delimiter"
    }
}
