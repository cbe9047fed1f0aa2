//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into raw word fragments.
//!
//! # Available Tokenizers
//!
//! - [`delimiter::DelimiterTokenizer`] - Splits on whitespace and punctuation
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace only
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::tokenizer::Tokenizer;
//! use textlens::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared behind `Arc`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod delimiter;
pub mod whitespace;

pub use delimiter::DelimiterTokenizer;
pub use whitespace::WhitespaceTokenizer;
