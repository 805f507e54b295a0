//! Leaftrace CLI library.
//!
//! This library provides the core functionality for the Leaftrace
//! command-line interface: scanning product codes, driving the provenance
//! viewer, and rendering its four tab views.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
