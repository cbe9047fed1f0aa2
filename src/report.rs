//! Report formatting.
//!
//! [`ReportFormatter`] renders a [`Statistics`] snapshot as the plain text
//! report written to the output file. Formatting is pure: the same
//! statistics and configuration always produce the same string.
//!
//! # Examples
//!
//! ```
//! use textlens::config::AnalysisConfig;
//! use textlens::report::render_report;
//!
//! let report = render_report("cat cat cat.", &AnalysisConfig::default()).unwrap();
//! assert!(report.contains("'cat' appears 3 time(s)"));
//!
//! let empty = render_report("", &AnalysisConfig::default()).unwrap();
//! assert!(empty.contains("No words found in the input text."));
//! ```

use std::fmt;

use crate::config::AnalysisConfig;
use crate::error::{Result, TextLensError};
use crate::stats::{Statistics, analyze_text};

const TITLE: &str = "📊 COMPREHENSIVE TEXT ANALYSIS REPORT";
const RULE: &str = "=====================================";
const FOOTER: &str = "Analysis complete.";
const BAR_GLYPH: char = '█';

/// Message used in place of the statistics when the input has no words.
pub const NO_WORDS_MESSAGE: &str = "No words found in the input text.";

/// Renders statistics as a human-readable report.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: AnalysisConfig,
}

impl ReportFormatter {
    /// Create a formatter; the configuration sets section titles and bar width.
    pub fn new(config: AnalysisConfig) -> Self {
        ReportFormatter { config }
    }

    /// Format the full report.
    pub fn format(&self, stats: &Statistics) -> String {
        Report {
            stats,
            config: &self.config,
        }
        .to_string()
    }

    /// Format the degraded report for input without words.
    pub fn format_empty(&self) -> String {
        format!("{TITLE}\n{RULE}\n\n{NO_WORDS_MESSAGE}\n\n{RULE}\n{FOOTER}\n")
    }

    /// Bar for a length bucket: one glyph per occurrence, capped at the bar width.
    pub fn bar(&self, count: usize) -> String {
        bar(count, self.config.bar_width)
    }
}

fn bar(count: usize, width: usize) -> String {
    std::iter::repeat_n(BAR_GLYPH, count.min(width)).collect()
}

struct Report<'a> {
    stats: &'a Statistics,
    config: &'a AnalysisConfig,
}

impl Report<'_> {
    fn fmt_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "📈 BASIC STATISTICS:")?;
        writeln!(f, "   Total words: {}", s.total_words)?;
        writeln!(f, "   Unique words: {}", s.unique_words)?;
        writeln!(f, "   Average word length: {:.2}", s.average_word_length)?;
        writeln!(
            f,
            "   Shortest word: '{}' ({} chars)",
            s.shortest_word, s.shortest_word_length
        )?;
        writeln!(
            f,
            "   Longest word: '{}' ({} chars)",
            s.longest_word, s.longest_word_length
        )?;
        writeln!(f)
    }

    fn fmt_frequencies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔤 TOP {} MOST FREQUENT WORDS:", self.config.top_words)?;
        for entry in &self.stats.top_frequent_words {
            writeln!(f, "   '{}' appears {} time(s)", entry.word, entry.count)?;
        }
        writeln!(f)
    }

    fn fmt_length_distribution(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📏 WORD LENGTH DISTRIBUTION:")?;
        for bucket in &self.stats.length_distribution {
            writeln!(
                f,
                "   {:>2} chars: {} ({})",
                bucket.length,
                bar(bucket.count, self.config.bar_width),
                bucket.count
            )?;
        }
        writeln!(f)
    }

    fn fmt_starts(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🅰️ VOWEL vs CONSONANT START:")?;
        writeln!(f, "   Words starting with vowels: {}", self.stats.vowel_start_count)?;
        writeln!(
            f,
            "   Words starting with consonants: {}",
            self.stats.consonant_start_count
        )?;
        writeln!(f)
    }

    fn fmt_sentences(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "📝 SENTENCE ANALYSIS:")?;
        writeln!(f, "   Total sentences: {}", s.sentence_count)?;
        match s.average_words_per_sentence {
            Some(average) => writeln!(f, "   Average words per sentence: {average:.2}")?,
            None => writeln!(f, "   Average words per sentence: N/A")?,
        }
        match s.shortest_sentence_length {
            Some(length) => writeln!(f, "   Shortest sentence: {length} characters")?,
            None => writeln!(f, "   Shortest sentence: N/A")?,
        }
        match s.longest_sentence_length {
            Some(length) => writeln!(f, "   Longest sentence: {length} characters")?,
            None => writeln!(f, "   Longest sentence: N/A")?,
        }
        writeln!(f)
    }

    fn fmt_duplicates(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔄 REPEATED WORDS (Top {}):", self.config.top_duplicates)?;
        for entry in &self.stats.duplicate_words {
            let positions: Vec<String> = entry.positions.iter().map(usize::to_string).collect();
            writeln!(
                f,
                "   '{}' appears {} times at positions: {}",
                entry.word,
                entry.count,
                positions.join(", ")
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        self.fmt_basic(f)?;
        self.fmt_frequencies(f)?;
        self.fmt_length_distribution(f)?;
        self.fmt_starts(f)?;
        self.fmt_sentences(f)?;
        self.fmt_duplicates(f)?;
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{FOOTER}")
    }
}

/// Analyze `text` and format the report, substituting the "no words" report
/// for empty input. Any other error is returned.
pub fn render_report(text: &str, config: &AnalysisConfig) -> Result<String> {
    let formatter = ReportFormatter::new(config.clone());
    match analyze_text(text, config) {
        Ok(stats) => Ok(formatter.format(&stats)),
        Err(TextLensError::EmptyInput) => Ok(formatter.format_empty()),
        Err(e) => Err(e),
    }
}

/// Serialize statistics as JSON.
pub fn render_json(stats: &Statistics, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(stats)?
    } else {
        serde_json::to_string(stats)?
    };
    Ok(json)
}
