//! Sentence splitting.
//!
//! Sentences are the trimmed, non-empty fragments that end in a terminal
//! punctuation mark. Trailing text after the last terminator is not a
//! sentence, so text without any terminator has no sentences.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::sentence::split_sentences;
//!
//! let sentences = split_sentences("The quick brown fox. The fox jumps!");
//! assert_eq!(sentences, vec!["The quick brown fox", "The fox jumps"]);
//! ```

/// Characters that end a sentence.
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?'];

/// Splits text into trimmed sentences.
#[derive(Clone, Debug)]
pub struct SentenceSplitter {
    terminators: Vec<char>,
}

impl SentenceSplitter {
    /// Create a splitter using [`DEFAULT_TERMINATORS`].
    pub fn new() -> Self {
        Self::with_terminators(DEFAULT_TERMINATORS)
    }

    /// Create a splitter with a custom terminator set.
    pub fn with_terminators(terminators: &[char]) -> Self {
        SentenceSplitter {
            terminators: terminators.to_vec(),
        }
    }

    /// The terminator characters of this splitter.
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Split `text` into sentences, preserving order.
    pub fn split(&self, text: &str) -> Vec<String> {
        let terminated = match text.rfind(self.terminators.as_slice()) {
            Some(last) => &text[..last],
            None => return Vec::new(),
        };

        terminated
            .split(self.terminators.as_slice())
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `text` on `.`, `!` and `?` into trimmed, non-empty sentences.
///
/// Text following the final terminator is discarded.
pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter::new().split(text)
}
