//! Configuration for text analysis runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextLensError};

/// Default number of entries in the most-frequent-words list.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Default number of entries in the repeated-words list.
pub const DEFAULT_TOP_DUPLICATES: usize = 5;

/// Default maximum number of glyphs in a length-distribution bar.
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Limits applied when aggregating and reporting statistics.
///
/// Missing fields in a configuration file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of most frequent words to keep.
    pub top_words: usize,

    /// Number of repeated words to keep.
    pub top_duplicates: usize,

    /// Maximum bar length in the length distribution chart.
    pub bar_width: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            top_duplicates: DEFAULT_TOP_DUPLICATES,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextLensError::config(format!("Cannot read {}: {e}", path.display()))
        })?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of most frequent words to keep.
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    /// Set the number of repeated words to keep.
    pub fn with_top_duplicates(mut self, top_duplicates: usize) -> Self {
        self.top_duplicates = top_duplicates;
        self
    }

    /// Set the maximum bar length.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Reject limits that would make a report section meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(TextLensError::config("top_words must be at least 1"));
        }
        if self.top_duplicates == 0 {
            return Err(TextLensError::config("top_duplicates must be at least 1"));
        }
        if self.bar_width == 0 {
            return Err(TextLensError::config("bar_width must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_words, 10);
        assert_eq!(config.top_duplicates, 5);
        assert_eq!(config.bar_width, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = AnalysisConfig::default()
            .with_top_words(3)
            .with_top_duplicates(2)
            .with_bar_width(40);
        assert_eq!(config.top_words, 3);
        assert_eq!(config.top_duplicates, 2);
        assert_eq!(config.bar_width, 40);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(AnalysisConfig::default().with_top_words(0).validate().is_err());
        assert!(AnalysisConfig::default().with_top_duplicates(0).validate().is_err());
        assert!(AnalysisConfig::default().with_bar_width(0).validate().is_err());
    }

    #[test]
    fn test_from_file_with_partial_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_words": 3}}"#).unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.top_words, 3);
        assert_eq!(config.top_duplicates, DEFAULT_TOP_DUPLICATES);
        assert_eq!(config.bar_width, DEFAULT_BAR_WIDTH);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = AnalysisConfig::from_file("/nonexistent/textlens.json");
        assert!(matches!(missing, Err(TextLensError::Config(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AnalysisConfig::from_file(file.path()),
            Err(TextLensError::Json(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bar_width": 0}}"#).unwrap();
        assert!(matches!(
            AnalysisConfig::from_file(file.path()),
            Err(TextLensError::Config(_))
        ));
    }
}
