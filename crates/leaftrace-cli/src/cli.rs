//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Leaftrace CLI - Scan product codes and browse their provenance records.
#[derive(Debug, Parser)]
#[command(name = "leaftrace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the simulated scan and fetch delays
    #[arg(long, global = true)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a product code and open its provenance record
    Scan(ScanArgs),

    /// View the provenance record for a code
    View(ViewArgs),

    /// View the demo product
    Demo,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Manually entered code (omit when simulating a camera or upload scan)
    pub code: Option<String>,

    /// Simulate a camera scan (3 s)
    #[arg(long, conflicts_with_all = ["upload", "code"])]
    pub camera: bool,

    /// Simulate an image-upload scan (2 s)
    #[arg(long, conflicts_with = "code")]
    pub upload: bool,
}

/// Arguments for the view command.
#[derive(Debug, Parser)]
pub struct ViewArgs {
    /// Product code to view
    pub code: String,

    /// Tab to render
    #[arg(short, long, value_enum, default_value = "timeline")]
    pub tab: TabArg,
}

/// Tab argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TabArg {
    /// Journey timeline
    Timeline,
    /// Location map
    Map,
    /// Farmer profile
    Farmer,
    /// Lab reports
    Reports,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TabArg> for leaftrace_viewer::Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Timeline => leaftrace_viewer::Tab::Timeline,
            TabArg::Map => leaftrace_viewer::Tab::Map,
            TabArg::Farmer => leaftrace_viewer::Tab::Farmer,
            TabArg::Reports => leaftrace_viewer::Tab::Reports,
        }
    }
}
