use std::fs;

use clap::Parser;
use tempfile::tempdir;

use textlens::cli::args::TextLensArgs;
use textlens::cli::commands::{SAMPLE_TEXT, execute_command};
use textlens::error::TextLensError;
use textlens::stats::Statistics;

fn run(args: &[&str]) -> Result<(), TextLensError> {
    let mut argv = vec!["textlens", "--quiet"];
    argv.extend_from_slice(args);
    execute_command(TextLensArgs::try_parse_from(argv).unwrap())
}

#[test]
fn test_analyze_writes_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "The quick brown fox. The fox jumps!").unwrap();

    run(&[
        "analyze",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("   Total words: 7\n"));
    assert!(report.contains("   'the' appears 2 times at positions: 0, 4\n"));
    assert!(report.ends_with("Analysis complete.\n"));
}

#[test]
fn test_analyze_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "cat cat cat").unwrap();
    fs::write(&output, "stale content that should disappear").unwrap();

    run(&[
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("stale"));
    assert!(report.contains("'cat' appears 3 time(s)"));
}

#[test]
fn test_analyze_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("output.txt");

    let result = run(&[
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(matches!(result, Err(TextLensError::InputNotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_analyze_empty_input_writes_degraded_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "").unwrap();

    run(&[
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("No words found in the input text."));
}

#[test]
fn test_analyze_create_sample() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nested").join("input.txt");
    let output = dir.path().join("output.txt");

    run(&[
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--create-sample",
    ])
    .unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), SAMPLE_TEXT);
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("   Total sentences: 13\n"));
}

#[test]
fn test_analyze_create_sample_keeps_existing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "Mine. Not the sample.").unwrap();

    run(&[
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--create-sample",
    ])
    .unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), "Mine. Not the sample.");
}

#[test]
fn test_analyze_json_format() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("stats.json");
    fs::write(&input, "One fish, two fish. Red fish!").unwrap();

    run(&[
        "--format",
        "json",
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let stats: Statistics = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(stats.total_words, 6);
    assert_eq!(stats.top_frequent_words[0].word, "fish");
    assert_eq!(stats.top_frequent_words[0].count, 3);
    assert_eq!(stats.sentence_count, 2);
}

#[test]
fn test_analyze_with_config_file_and_overrides() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let config = dir.path().join("config.json");
    fs::write(&input, &"word ".repeat(30)).unwrap();
    fs::write(&config, r#"{"top_words": 3, "bar_width": 5}"#).unwrap();

    run(&[
        "analyze",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--config-file",
        config.to_str().unwrap(),
        "--top-duplicates",
        "1",
    ])
    .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("🔤 TOP 3 MOST FREQUENT WORDS:"));
    assert!(report.contains("🔄 REPEATED WORDS (Top 1):"));
    assert!(report.contains("    4 chars: █████ (30)\n"));
}

#[test]
fn test_analyze_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "text").unwrap();

    let result = run(&["analyze", input.to_str().unwrap(), "--bar-width", "0"]);
    assert!(matches!(result, Err(TextLensError::Config(_))));
}

#[test]
fn test_sample_command() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.txt");

    run(&["sample", path.to_str().unwrap()]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_TEXT);

    let result = run(&["sample", path.to_str().unwrap()]);
    assert!(matches!(result, Err(TextLensError::InvalidOperation(_))));

    fs::write(&path, "changed").unwrap();
    run(&["sample", path.to_str().unwrap(), "--force"]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_TEXT);
}
