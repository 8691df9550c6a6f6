//! Error types for filtering and aggregation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the router and the statistics aggregator
#[derive(Debug, Error)]
pub enum FilterError {
    /// No input files were supplied
    #[error("no input files were supplied")]
    MissingInput,

    /// An input file could not be opened or read
    #[error("cannot read input file {}", .path.display())]
    UnreadableInput {
        /// The file that failed to open or read
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },

    /// A category output file could not be created or written
    #[error("cannot write output file {}", .path.display())]
    UnwritableOutput {
        /// The output file that failed to open or write
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },

    /// A persisted category file holds a line its numeric domain cannot parse
    #[error("{}: line {line}: {value:?} is not a valid {expected}", .path.display())]
    MalformedNumeric {
        /// The category file containing the bad line
        path: PathBuf,
        /// 1-based number of the bad line
        line: usize,
        /// The offending line text
        value: String,
        /// The numeric domain that rejected the line
        expected: &'static str,
    },
}

/// Result type for filtering operations
pub type Result<T> = std::result::Result<T, FilterError>;
