//! Run configuration for the filter
//!
//! One `FilterConfig` describes a complete run: which files to read, where
//! the category files go, an optional file name prefix and the append flag.
//! The builder validates before any I/O is attempted.

use crate::category::Category;
use crate::error::{FilterError, Result};
use std::path::PathBuf;

/// Configuration consumed by the router and the statistics aggregator
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Input files, routed in exactly this order
    pub input_files: Vec<PathBuf>,

    /// Directory the three category files live in
    pub output_dir: PathBuf,

    /// Optional file name prefix; `None` leaves the base names untouched
    pub prefix: Option<String>,

    /// Append to pre-existing category files instead of truncating them
    pub append: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            output_dir: PathBuf::from("."),
            prefix: None,
            append: false,
        }
    }
}

impl FilterConfig {
    /// Creates a new builder with default values
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
    }

    /// Validates the configuration; must hold before any I/O is attempted
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(FilterError::MissingInput);
        }
        Ok(())
    }

    /// Path of the output file for `category`, prefix applied
    pub fn category_path(&self, category: Category) -> PathBuf {
        category.file_path(&self.output_dir, self.prefix.as_deref())
    }
}

/// Builder for [`FilterConfig`] with fluent setters
#[derive(Debug, Clone, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            config: FilterConfig::default(),
        }
    }

    /// Adds one input file at the end of the routing order
    pub fn input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_files.push(path.into());
        self
    }

    /// Adds several input files, keeping their order
    pub fn input_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config
            .input_files
            .extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Sets the file name prefix; a blank prefix is treated as absent
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.config.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Sets the append flag for pre-existing output files
    pub fn append(mut self, append: bool) -> Self {
        self.config.append = append;
        self
    }

    /// Builds the configuration, validating it
    pub fn build(self) -> Result<FilterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
