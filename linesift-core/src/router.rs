//! Classification and routing of input lines to category files
//!
//! The router makes one pass per category over every input file in the
//! order supplied, appending matching lines to that category's output file.
//! One buffered write handle is held per category for the whole pass;
//! reader handles are scoped to a single input file.

use crate::category::{classify, Category};
use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Lines written per category by a single routing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteSummary {
    /// Lines routed to the integers file
    pub integers: usize,
    /// Lines routed to the floats file
    pub floats: usize,
    /// Lines routed to the strings file
    pub strings: usize,
}

impl RouteSummary {
    /// Total lines routed across all categories
    pub fn total(&self) -> usize {
        self.integers + self.floats + self.strings
    }

    fn record(&mut self, category: Category, written: usize) {
        match category {
            Category::Integer => self.integers += written,
            Category::Float => self.floats += written,
            Category::String => self.strings += written,
        }
    }
}

/// Routes classified lines from the configured inputs to category files
#[derive(Debug)]
pub struct Router {
    config: FilterConfig,
}

impl Router {
    /// Creates a router for the given configuration
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Runs all three category passes.
    ///
    /// Categories run in [`Category::ALL`] order. A failing category stops
    /// the run but leaves the files of already completed categories in
    /// place; there is no rollback.
    pub fn route(&self) -> Result<RouteSummary> {
        self.config.validate()?;

        let mut summary = RouteSummary::default();
        for category in Category::ALL {
            let written = self.route_category(category)?;
            summary.record(category, written);
        }
        Ok(summary)
    }

    fn route_category(&self, category: Category) -> Result<usize> {
        let output_path = self.config.category_path(category);
        let mut writer = BufWriter::new(self.open_output(&output_path)?);

        let mut written = 0;
        for input in &self.config.input_files {
            written += copy_matching(input, category, &mut writer, &output_path)?;
        }

        writer
            .flush()
            .map_err(|source| FilterError::UnwritableOutput {
                path: output_path,
                source,
            })?;
        Ok(written)
    }

    /// Applies the append-or-create policy: a missing file is always created
    /// fresh, regardless of the append flag; an existing file is appended to
    /// or truncated according to it.
    fn open_output(&self, path: &Path) -> Result<File> {
        let opened = if self.config.append && path.exists() {
            OpenOptions::new().append(true).open(path)
        } else {
            File::create(path)
        };
        opened.map_err(|source| FilterError::UnwritableOutput {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Streams `input` line by line and writes the lines belonging to
/// `category`, each followed by a newline. Returns the number written.
fn copy_matching(
    input: &Path,
    category: Category,
    writer: &mut BufWriter<File>,
    output_path: &Path,
) -> Result<usize> {
    let file = File::open(input).map_err(|source| FilterError::UnreadableInput {
        path: input.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| FilterError::UnreadableInput {
            path: input.to_path_buf(),
            source,
        })?;
        if classify(&line) == category {
            writeln!(writer, "{line}").map_err(|source| FilterError::UnwritableOutput {
                path: output_path.to_path_buf(),
                source,
            })?;
            written += 1;
        }
    }
    Ok(written)
}
