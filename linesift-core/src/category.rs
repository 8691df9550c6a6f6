//! Line categories and the classification grammar
//!
//! Classification is a pure function of a line's text. The grammar is fixed:
//! integers are `-?[0-9]+`, floats are `-?[0-9]+\.[0-9]+([Ee]-?[0-9]*)?`, and
//! everything else is a string. The checks are explicit byte walks, so no
//! pattern is compiled at runtime.

use std::path::{Path, PathBuf};

/// Classification outcome for a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The entire line is a signed decimal integer
    Integer,
    /// The entire line is a signed decimal fraction, optionally with an exponent
    Float,
    /// Any line the numeric grammars do not accept, including empty lines
    String,
}

impl Category {
    /// All categories, in routing and report order
    pub const ALL: [Category; 3] = [Category::Integer, Category::Float, Category::String];

    /// Display name used in statistics reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Integer => "Integers",
            Category::Float => "Floats",
            Category::String => "Strings",
        }
    }

    /// Base output file name, before any prefix is applied
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Integer => "integers.txt",
            Category::Float => "floats.txt",
            Category::String => "strings.txt",
        }
    }

    /// Path of this category's output file under `dir`, with `prefix`
    /// prepended to the base file name when present
    pub fn file_path(&self, dir: &Path, prefix: Option<&str>) -> PathBuf {
        match prefix {
            Some(prefix) => dir.join(format!("{prefix}{}", self.file_name())),
            None => dir.join(self.file_name()),
        }
    }
}

/// Classifies a line into exactly one [`Category`].
///
/// The rules are checked top to bottom, first match wins: integer, then
/// float, then string as the catch-all. Classification is total and the
/// numeric grammars are mutually exclusive, so every line lands in exactly
/// one category.
pub fn classify(line: &str) -> Category {
    if is_integer_literal(line) {
        Category::Integer
    } else if is_float_literal(line) {
        Category::Float
    } else {
        Category::String
    }
}

/// Whether the entire line matches `-?[0-9]+`.
fn is_integer_literal(line: &str) -> bool {
    let digits = line.strip_prefix('-').unwrap_or(line);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether the entire line matches `-?[0-9]+\.[0-9]+([Ee]-?[0-9]*)?`.
///
/// Exponent digits are optional, so `1.5E` and `1.5E-` are floats. A `+`
/// sign is not part of the grammar anywhere.
fn is_float_literal(line: &str) -> bool {
    let bytes = line.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let integral_end = eat_digits(bytes, pos);
    if integral_end == pos {
        return false;
    }
    pos = integral_end;

    if bytes.get(pos) != Some(&b'.') {
        return false;
    }
    pos += 1;

    let fraction_end = eat_digits(bytes, pos);
    if fraction_end == pos {
        return false;
    }
    pos = fraction_end;

    if pos == bytes.len() {
        return true;
    }
    if bytes[pos] != b'e' && bytes[pos] != b'E' {
        return false;
    }
    pos += 1;
    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }
    eat_digits(bytes, pos) == bytes.len()
}

fn eat_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}
