//! End-to-end integration tests for the complete route-then-report pipeline

use linesift_core::{FilterConfig, FilterError, Router, StatisticsAggregator};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

fn mixed_config(dir: &TempDir) -> FilterConfig {
    let input = write_input(
        dir,
        "data.txt",
        &["42", "-7", "3.14", "hello world", "1.5E-3", "007", ""],
    );
    FilterConfig::builder()
        .input_file(input)
        .output_dir(dir.path())
        .build()
        .unwrap()
}

#[test]
fn test_route_then_full_report_pipeline() {
    let dir = TempDir::new().unwrap();
    let config = mixed_config(&dir);

    let summary = Router::new(config.clone()).route().unwrap();
    assert_eq!(summary.integers, 3);
    assert_eq!(summary.floats, 2);
    assert_eq!(summary.strings, 2);

    let report = StatisticsAggregator::from_config(&config)
        .full_statistics()
        .unwrap();
    assert_eq!(
        report,
        "Integers count: 3\n\
         Floats count: 2\n\
         Strings count: 2\n\
         Integers max: 42\n\
         Integers min: -7\n\
         Integers sum: 42\n\
         Integers average: 14\n\
         Floats max: 3.14\n\
         Floats min: 0.0015\n\
         Floats sum: 3.1415\n\
         Floats average: 1.57075\n\
         Strings max: hello world\n\
         Strings min: \n"
    );
}

#[test]
fn test_report_counts_match_route_summary() {
    let dir = TempDir::new().unwrap();
    let config = mixed_config(&dir);

    let summary = Router::new(config.clone()).route().unwrap();
    let report = StatisticsAggregator::from_config(&config)
        .short_statistics()
        .unwrap();

    assert!(report.contains(&format!("Integers count: {}\n", summary.integers)));
    assert!(report.contains(&format!("Floats count: {}\n", summary.floats)));
    assert!(report.contains(&format!("Strings count: {}\n", summary.strings)));
    assert_eq!(summary.total(), 7);
}

#[test]
fn test_append_run_accumulates_in_reports() {
    let dir = TempDir::new().unwrap();
    let first = write_input(&dir, "first.txt", &["1", "2"]);
    let second = write_input(&dir, "second.txt", &["3"]);

    let base = FilterConfig::builder()
        .input_file(&first)
        .output_dir(dir.path())
        .build()
        .unwrap();
    Router::new(base).route().unwrap();

    let appending = FilterConfig::builder()
        .input_file(&second)
        .output_dir(dir.path())
        .append(true)
        .build()
        .unwrap();
    Router::new(appending.clone()).route().unwrap();

    let report = StatisticsAggregator::from_config(&appending)
        .full_statistics()
        .unwrap();
    assert!(report.contains("Integers count: 3\n"));
    assert!(report.contains("Integers sum: 6\n"));
    assert!(report.contains("Integers average: 2\n"));
}

#[test]
fn test_truncating_run_resets_reports() {
    let dir = TempDir::new().unwrap();
    let first = write_input(&dir, "first.txt", &["1", "2", "3"]);
    let second = write_input(&dir, "second.txt", &["9"]);

    let base = FilterConfig::builder()
        .input_file(&first)
        .output_dir(dir.path())
        .build()
        .unwrap();
    Router::new(base).route().unwrap();

    let truncating = FilterConfig::builder()
        .input_file(&second)
        .output_dir(dir.path())
        .build()
        .unwrap();
    Router::new(truncating.clone()).route().unwrap();

    let report = StatisticsAggregator::from_config(&truncating)
        .short_statistics()
        .unwrap();
    assert_eq!(report, "Integers count: 1\n");
}

#[test]
fn test_prefixed_run_reads_only_prefixed_files() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.txt", &["5", "word"]);

    // A stale unprefixed file from an earlier run must not leak into the
    // prefixed report.
    fs::write(dir.path().join("integers.txt"), "1\n2\n3\n").unwrap();

    let config = FilterConfig::builder()
        .input_file(input)
        .output_dir(dir.path())
        .prefix("run1-")
        .build()
        .unwrap();
    Router::new(config.clone()).route().unwrap();

    let report = StatisticsAggregator::from_config(&config)
        .short_statistics()
        .unwrap();
    assert_eq!(report, "Integers count: 1\nStrings count: 1\n");
    assert!(dir.path().join("run1-integers.txt").exists());
}

#[test]
fn test_aggregator_reloads_fresh_on_every_call() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.txt", &["10"]);
    let config = FilterConfig::builder()
        .input_file(&input)
        .output_dir(dir.path())
        .append(true)
        .build()
        .unwrap();

    let aggregator = StatisticsAggregator::from_config(&config);
    Router::new(config.clone()).route().unwrap();
    assert_eq!(
        aggregator.short_statistics().unwrap(),
        "Integers count: 1\n"
    );

    Router::new(config).route().unwrap();
    assert_eq!(
        aggregator.short_statistics().unwrap(),
        "Integers count: 2\n"
    );
}

#[test]
fn test_missing_inputs_fail_before_touching_outputs() {
    let dir = TempDir::new().unwrap();
    let config = FilterConfig {
        input_files: Vec::new(),
        output_dir: dir.path().to_path_buf(),
        prefix: None,
        append: false,
    };

    let error = Router::new(config).route().unwrap_err();
    assert!(matches!(error, FilterError::MissingInput));
    assert!(!dir.path().join("integers.txt").exists());
}
