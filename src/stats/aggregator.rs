//! Aggregation of tokens and sentences into [`Statistics`].
//!
//! Grouping keeps words in order of first appearance and every ranking is a
//! stable sort, so words with equal counts are listed in the order they
//! first appear in the text.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::config::AnalysisConfig;
use crate::error::{Result, TextLensError};
use crate::stats::statistics::{DuplicateEntry, FrequencyEntry, LengthBucket, Statistics};

/// Lowercase vowels a word may start with.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// All token indices of one distinct word.
#[derive(Debug)]
struct WordGroup<'a> {
    word: &'a str,
    positions: Vec<usize>,
}

/// Group token indices by token text, in order of first appearance.
fn group_by_word(tokens: &[Token]) -> Vec<WordGroup<'_>> {
    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(tokens.len());
    let mut groups: Vec<WordGroup<'_>> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        let word = token.text.as_str();
        match index.get(word) {
            Some(&slot) => groups[slot].positions.push(position),
            None => {
                index.insert(word, groups.len());
                groups.push(WordGroup {
                    word,
                    positions: vec![position],
                });
            }
        }
    }

    groups
}

/// First item with the minimal key.
fn first_min_by_key<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> usize,
{
    items
        .iter()
        .reduce(|best, item| if key(item) < key(best) { item } else { best })
}

/// First item with the maximal key.
fn first_max_by_key<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> usize,
{
    items
        .iter()
        .reduce(|best, item| if key(item) > key(best) { item } else { best })
}

fn top_frequent_words(groups: &[WordGroup<'_>], limit: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = groups
        .iter()
        .map(|group| FrequencyEntry {
            word: group.word.to_string(),
            count: group.positions.len(),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

fn length_distribution(tokens: &[Token]) -> Vec<LengthBucket> {
    let mut buckets: BTreeMap<usize, usize> = BTreeMap::new();
    for token in tokens {
        *buckets.entry(token.char_len()).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(length, count)| LengthBucket { length, count })
        .collect()
}

fn duplicate_words(groups: &[WordGroup<'_>], limit: usize) -> Vec<DuplicateEntry> {
    let mut entries: Vec<DuplicateEntry> = groups
        .iter()
        .filter(|group| group.positions.len() > 1)
        .map(|group| DuplicateEntry {
            word: group.word.to_string(),
            count: group.positions.len(),
            positions: group.positions.clone(),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

/// Whether `c` counts as a vowel start.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Whether `c` counts as a consonant start: alphabetic and not a vowel.
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// Compute statistics over `tokens` and `sentences`.
///
/// Fails with [`TextLensError::EmptyInput`] when `tokens` is empty. An empty
/// `sentences` slice is not an error; the sentence averages and extremes are
/// then `None`.
pub fn aggregate(
    tokens: &[Token],
    sentences: &[String],
    config: &AnalysisConfig,
) -> Result<Statistics> {
    let (Some(shortest), Some(longest)) = (
        first_min_by_key(tokens, Token::char_len),
        first_max_by_key(tokens, Token::char_len),
    ) else {
        return Err(TextLensError::EmptyInput);
    };

    let groups = group_by_word(tokens);
    let total_length: usize = tokens.iter().map(Token::char_len).sum();

    let vowel_start_count = tokens
        .iter()
        .filter(|t| t.first_char().is_some_and(is_vowel))
        .count();
    let consonant_start_count = tokens
        .iter()
        .filter(|t| t.first_char().is_some_and(is_consonant))
        .count();

    let sentence_chars = |s: &String| s.chars().count();
    let (average_words_per_sentence, shortest_sentence_length, longest_sentence_length) =
        if sentences.is_empty() {
            (None, None, None)
        } else {
            let whitespace = WhitespaceTokenizer::new();
            let total_sentence_words: usize =
                sentences.iter().map(|s| whitespace.count_words(s)).sum();
            (
                Some(total_sentence_words as f64 / sentences.len() as f64),
                first_min_by_key(sentences, sentence_chars).map(sentence_chars),
                first_max_by_key(sentences, sentence_chars).map(sentence_chars),
            )
        };

    Ok(Statistics {
        total_words: tokens.len(),
        unique_words: groups.len(),
        average_word_length: total_length as f64 / tokens.len() as f64,
        shortest_word: shortest.text.clone(),
        shortest_word_length: shortest.char_len(),
        longest_word: longest.text.clone(),
        longest_word_length: longest.char_len(),
        top_frequent_words: top_frequent_words(&groups, config.top_words),
        length_distribution: length_distribution(tokens),
        vowel_start_count,
        consonant_start_count,
        sentence_count: sentences.len(),
        average_words_per_sentence,
        shortest_sentence_length,
        longest_sentence_length,
        duplicate_words: duplicate_words(&groups, config.top_duplicates),
    })
}
