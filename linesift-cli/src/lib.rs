//! linesift CLI library
//!
//! This library provides the command-line interface for the linesift
//! line classification and routing tool.

pub mod cli;
pub mod config;
pub mod input;

pub use cli::Cli;
pub use config::CliConfig;
