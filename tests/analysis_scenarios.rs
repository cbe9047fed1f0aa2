use textlens::analysis::analyzer::tokenize;
use textlens::analysis::sentence::split_sentences;
use textlens::config::AnalysisConfig;
use textlens::error::TextLensError;
use textlens::report::render_report;
use textlens::stats::{FrequencyEntry, LengthBucket, Statistics, aggregate, analyze_text};

const CORPUS: &[&str] = &[
    "The quick brown fox. The fox jumps!",
    "cat cat cat",
    "Hello",
    "One fish, two fish; red fish: blue fish!",
    "\"Quoted\" (parenthesized) hyphen-ated words... and 3 numbers 42 7.",
    "Ünïcödé Wörds and ÜNÏCÖDÉ wörds? Ja! Ja.",
    "  \n\t Leading and trailing whitespace \r\n",
    "a b c d e f g h i j k l m n o p q r s t u v w x y z a e i o u",
];

fn stats(text: &str) -> Statistics {
    analyze_text(text, &AnalysisConfig::default()).unwrap()
}

#[test]
fn test_unique_words_never_exceed_total() {
    for text in CORPUS {
        let s = stats(text);
        assert!(s.unique_words <= s.total_words, "{text}");
        assert_eq!(s.all_words_distinct(), s.unique_words == s.total_words);
    }
}

#[test]
fn test_length_distribution_sums_to_total() {
    for text in CORPUS {
        let s = stats(text);
        let sum: usize = s.length_distribution.iter().map(|b| b.count).sum();
        assert_eq!(sum, s.total_words, "{text}");

        let lengths: Vec<usize> = s.length_distribution.iter().map(|b| b.length).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(lengths, sorted, "{text}");
    }
}

#[test]
fn test_start_counts_never_exceed_total() {
    for text in CORPUS {
        let s = stats(text);
        assert!(s.vowel_start_count + s.consonant_start_count <= s.total_words);
    }
}

#[test]
fn test_alphabetic_text_starts_are_all_classified() {
    let s = stats("Every word here starts with a letter. Absolutely all of them!");
    assert_eq!(s.vowel_start_count + s.consonant_start_count, s.total_words);
}

#[test]
fn test_duplicate_positions_match_tokens() {
    for text in CORPUS {
        let tokens = tokenize(text).unwrap();
        let s = stats(text);
        for entry in &s.duplicate_words {
            assert!(entry.count > 1);
            assert_eq!(entry.count, entry.positions.len());
            assert!(entry.positions.windows(2).all(|w| w[0] < w[1]));
            for &position in &entry.positions {
                assert_eq!(tokens[position].text, entry.word);
            }
        }
    }
}

#[test]
fn test_tokenization_round_trip() {
    for text in CORPUS {
        let first: Vec<String> = tokenize(text).unwrap().into_iter().map(|t| t.text).collect();
        let second: Vec<String> = tokenize(&first.join(" "))
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(first, second, "{text}");
    }
}

#[test]
fn test_quick_brown_fox() {
    let text = "The quick brown fox. The fox jumps!";
    let words: Vec<String> = tokenize(text).unwrap().into_iter().map(|t| t.text).collect();
    assert_eq!(
        words,
        vec!["the", "quick", "brown", "fox", "the", "fox", "jumps"]
    );

    let s = stats(text);
    assert_eq!(s.unique_words, 5);
    assert_eq!(
        &s.top_frequent_words[..2],
        &[
            FrequencyEntry {
                word: "the".to_string(),
                count: 2
            },
            FrequencyEntry {
                word: "fox".to_string(),
                count: 2
            },
        ]
    );
    assert!(s.top_frequent_words[2..].iter().all(|e| e.count == 1));
    assert_eq!(s.sentence_count, 2);
    assert_eq!(s.shortest_sentence_length, Some("The fox jumps".chars().count()));

    let the = s.duplicate_words.iter().find(|d| d.word == "the").unwrap();
    assert_eq!(the.positions, vec![0, 4]);
    let fox = s.duplicate_words.iter().find(|d| d.word == "fox").unwrap();
    assert_eq!(fox.positions, vec![3, 5]);
}

#[test]
fn test_empty_input() {
    let result = analyze_text("", &AnalysisConfig::default());
    assert!(matches!(result, Err(TextLensError::EmptyInput)));

    let tokens = tokenize("").unwrap();
    let sentences = split_sentences("");
    assert!(aggregate(&tokens, &sentences, &AnalysisConfig::default()).is_err());

    let report = render_report("", &AnalysisConfig::default()).unwrap();
    assert!(report.contains("No words found"));
}

#[test]
fn test_single_word() {
    let s = stats("Hello");
    assert_eq!(s.total_words, 1);
    assert_eq!(s.unique_words, 1);
    assert_eq!(format!("{:.2}", s.average_word_length), "5.00");
    assert_eq!(s.shortest_word, "hello");
    assert_eq!(s.longest_word, "hello");
    assert_eq!(s.length_distribution, vec![LengthBucket { length: 5, count: 1 }]);
    assert_eq!(s.sentence_count, 0);
    assert_eq!(s.average_words_per_sentence, None);

    let report = render_report("Hello", &AnalysisConfig::default()).unwrap();
    assert!(report.contains("Average words per sentence: N/A"));
}

#[test]
fn test_identical_words() {
    let s = stats("cat cat cat");
    assert_eq!(
        s.top_frequent_words,
        vec![FrequencyEntry {
            word: "cat".to_string(),
            count: 3
        }]
    );
    assert_eq!(s.duplicate_words.len(), 1);
    assert_eq!(s.duplicate_words[0].word, "cat");
    assert_eq!(s.duplicate_words[0].count, 3);
    assert_eq!(s.duplicate_words[0].positions, vec![0, 1, 2]);
    assert_eq!(s.length_distribution, vec![LengthBucket { length: 3, count: 3 }]);
}

#[test]
fn test_analysis_is_deterministic() {
    for text in CORPUS {
        assert_eq!(stats(text), stats(text));
        let config = AnalysisConfig::default();
        assert_eq!(
            render_report(text, &config).unwrap(),
            render_report(text, &config).unwrap()
        );
    }
}
