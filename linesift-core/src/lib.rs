//! Line classification, routing and statistics for the linesift tool
//!
//! The engine reads input text files line by line, classifies every line as
//! an integer, a float or a plain string, and routes each line to the output
//! file of its category. The routed files can then be aggregated into short
//! (count-only) or full (count, min, max, sum, average) statistics reports.
//!
//! # Example
//!
//! ```no_run
//! use linesift_core::{FilterConfig, Router, StatisticsAggregator};
//!
//! let config = FilterConfig::builder()
//!     .input_file("numbers.txt")
//!     .output_dir("out")
//!     .build()?;
//!
//! let aggregator = StatisticsAggregator::from_config(&config);
//! Router::new(config).route()?;
//!
//! print!("{}", aggregator.short_statistics()?);
//! # Ok::<(), linesift_core::FilterError>(())
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod config;
pub mod error;
pub mod router;
pub mod stats;

pub use category::{classify, Category};
pub use config::{FilterConfig, FilterConfigBuilder};
pub use error::{FilterError, Result};
pub use router::{RouteSummary, Router};
pub use stats::StatisticsAggregator;
