//! Statistics aggregation over routed category files
//!
//! The aggregator re-reads whichever category files exist at the configured
//! location and renders count-only or full reports. It holds no state from
//! the routing run; every report call loads fresh. Categories that
//! contribute no lines are omitted from both report kinds.

use crate::category::Category;
use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reads category files back and renders statistics reports
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    output_dir: PathBuf,
    prefix: Option<String>,
}

impl StatisticsAggregator {
    /// Creates an aggregator reading category files from `output_dir`,
    /// honoring the same optional file name prefix the router used
    pub fn new(output_dir: impl Into<PathBuf>, prefix: Option<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix,
        }
    }

    /// Creates an aggregator over the same files a router with `config`
    /// writes
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.output_dir.clone(), config.prefix.clone())
    }

    /// Renders per-category counts, one line each, omitting empty
    /// categories
    pub fn short_statistics(&self) -> Result<String> {
        let snapshot = self.load()?;
        Ok(render_counts(&snapshot))
    }

    /// Renders counts plus per-category breakdowns: max, min, sum and
    /// average for the numeric categories, longest and shortest line for
    /// strings
    pub fn full_statistics(&self) -> Result<String> {
        let snapshot = self.load()?;
        let mut report = render_counts(&snapshot);
        render_integer_breakdown(&mut report, &snapshot.integers);
        render_float_breakdown(&mut report, &snapshot.floats);
        render_string_breakdown(&mut report, &snapshot.strings);
        Ok(report)
    }

    fn category_path(&self, category: Category) -> PathBuf {
        category.file_path(&self.output_dir, self.prefix.as_deref())
    }

    fn load(&self) -> Result<CategorySnapshot> {
        Ok(CategorySnapshot {
            integers: load_parsed(&self.category_path(Category::Integer), "integer")?,
            floats: load_parsed(&self.category_path(Category::Float), "float")?,
            strings: read_lines(&self.category_path(Category::String))?,
        })
    }
}

/// Typed in-memory image of the three category files
#[derive(Debug, Default)]
struct CategorySnapshot {
    integers: Vec<i64>,
    floats: Vec<f32>,
    strings: Vec<String>,
}

impl CategorySnapshot {
    fn count(&self, category: Category) -> usize {
        match category {
            Category::Integer => self.integers.len(),
            Category::Float => self.floats.len(),
            Category::String => self.strings.len(),
        }
    }
}

fn render_counts(snapshot: &CategorySnapshot) -> String {
    let mut report = String::new();
    for category in Category::ALL {
        let count = snapshot.count(category);
        if count > 0 {
            report.push_str(&format!("{} count: {count}\n", category.display_name()));
        }
    }
    report
}

fn render_integer_breakdown(report: &mut String, values: &[i64]) {
    let Some((&first, rest)) = values.split_first() else {
        return;
    };
    let (min, max, sum) = rest.iter().fold(
        (first, first, first),
        |(min, max, sum), &value| (min.min(value), max.max(value), sum.wrapping_add(value)),
    );
    // Sum and average stay in the i64 domain: the sum wraps on overflow and
    // division truncates toward zero.
    let average = sum / values.len() as i64;

    report.push_str(&format!("Integers max: {max}\n"));
    report.push_str(&format!("Integers min: {min}\n"));
    report.push_str(&format!("Integers sum: {sum}\n"));
    report.push_str(&format!("Integers average: {average}\n"));
}

fn render_float_breakdown(report: &mut String, values: &[f32]) {
    let Some((&first, rest)) = values.split_first() else {
        return;
    };
    let mut min = first;
    let mut max = first;
    let mut sum = first;
    // Strict comparisons keep the first occurrence of an extreme and never
    // let a NaN loaded from a hand-edited file displace a chosen one.
    for &value in rest {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
        sum += value;
    }
    let average = sum / values.len() as f32;

    report.push_str(&format!("Floats max: {max}\n"));
    report.push_str(&format!("Floats min: {min}\n"));
    report.push_str(&format!("Floats sum: {sum}\n"));
    report.push_str(&format!("Floats average: {average}\n"));
}

fn render_string_breakdown(report: &mut String, values: &[String]) {
    let Some((first, rest)) = values.split_first() else {
        return;
    };
    let mut longest = (first, char_len(first));
    let mut shortest = (first, char_len(first));
    for value in rest {
        let len = char_len(value);
        if len > longest.1 {
            longest = (value, len);
        }
        if len < shortest.1 {
            shortest = (value, len);
        }
    }

    report.push_str(&format!("Strings max: {}\n", longest.0));
    report.push_str(&format!("Strings min: {}\n", shortest.0));
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Loads a numeric category file; a parse failure on any line is fatal for
/// the report, naming the file, the line number and the offending text.
fn load_parsed<T: FromStr>(path: &Path, expected: &'static str) -> Result<Vec<T>> {
    let mut values = Vec::new();
    for (index, line) in read_lines(path)?.into_iter().enumerate() {
        match line.parse::<T>() {
            Ok(value) => values.push(value),
            Err(_) => {
                return Err(FilterError::MalformedNumeric {
                    path: path.to_path_buf(),
                    line: index + 1,
                    value: line,
                    expected,
                })
            }
        }
    }
    Ok(values)
}

/// Reads a category file fully into memory; a missing file loads as empty,
/// which the reports then omit.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path).map_err(|source| FilterError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| FilterError::UnreadableInput {
            path: path.to_path_buf(),
            source,
        })?;
        lines.push(line);
    }
    Ok(lines)
}
