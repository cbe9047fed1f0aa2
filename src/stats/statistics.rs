//! Statistics snapshot types.

use serde::{Deserialize, Serialize};

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// A word length and how many tokens have it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub length: usize,
    pub count: usize,
}

/// A word occurring more than once, with every token index it occurs at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    pub word: String,
    pub count: usize,
    /// Zero-based token indices, ascending.
    pub positions: Vec<usize>,
}

/// Statistics computed from one input text.
///
/// Lengths are counted in Unicode scalar values. Sentence fields are `None`
/// when the text has no sentences.
///
/// # Examples
///
/// ```
/// use textlens::config::AnalysisConfig;
/// use textlens::stats::analyze_text;
///
/// let stats = analyze_text("Hello", &AnalysisConfig::default()).unwrap();
/// assert_eq!(stats.shortest_word, "hello");
/// assert_eq!(stats.average_word_length, 5.0);
/// assert_eq!(stats.average_words_per_sentence, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of tokens.
    pub total_words: usize,
    /// Number of distinct token values.
    pub unique_words: usize,
    /// Mean token length, unrounded.
    pub average_word_length: f64,
    /// First token with the minimal length.
    pub shortest_word: String,
    pub shortest_word_length: usize,
    /// First token with the maximal length.
    pub longest_word: String,
    pub longest_word_length: usize,
    /// Most frequent words, descending by count.
    pub top_frequent_words: Vec<FrequencyEntry>,
    /// One bucket per token length present, ascending by length.
    pub length_distribution: Vec<LengthBucket>,
    pub vowel_start_count: usize,
    pub consonant_start_count: usize,
    pub sentence_count: usize,
    pub average_words_per_sentence: Option<f64>,
    pub shortest_sentence_length: Option<usize>,
    pub longest_sentence_length: Option<usize>,
    /// Most repeated words, descending by count.
    pub duplicate_words: Vec<DuplicateEntry>,
}

impl Statistics {
    /// Number of distinct token lengths.
    pub fn distinct_lengths(&self) -> usize {
        self.length_distribution.len()
    }

    /// Whether every token value occurs exactly once.
    pub fn all_words_distinct(&self) -> bool {
        self.unique_words == self.total_words
    }
}
