//! Leaftrace CLI - Scan product codes and browse their provenance records.

use clap::Parser;
use leaftrace_cli::commands;
use leaftrace_cli::repl;
use leaftrace_cli::{Cli, Command, Config, Formatter};
use leaftrace_viewer::Tab;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> leaftrace_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Determine whether the simulated delays apply
    let simulate_delays = !cli.no_delay && config.settings.simulate_delays;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            // Enter REPL mode
            repl::run_repl(simulate_delays, &formatter).await?;
        }
        Some(Command::Scan(args)) => {
            // Scanning navigates straight into the viewer
            let product = commands::execute_scan(args, simulate_delays, &formatter).await?;
            commands::show(product, Tab::Timeline, simulate_delays, &formatter).await?;
        }
        Some(Command::View(args)) => {
            commands::execute_view(args, simulate_delays, &formatter).await?;
        }
        Some(Command::Demo) => {
            commands::execute_demo(simulate_delays, &formatter).await?;
        }
    }

    Ok(())
}
