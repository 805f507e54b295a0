//! Leaftrace Gateway CLI
//!
//! Starts the Gateway HTTP server for provenance lookups.

use leaftrace_gateway::{config::GatewayConfig, start_server, GatewayError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        GatewayConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Use default test configuration
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: leaftrace-gateway --config <path-to-config.toml>");
        eprintln!();
        GatewayConfig::default_test_config()
    };

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Leaftrace Gateway - Mock Provenance Lookup Service");
    println!();
    println!("USAGE:");
    println!("    leaftrace-gateway --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    leaftrace-gateway --config config/gateway.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - fetch_delay_ms: Simulated fetch delay in milliseconds (default: 2000)");
    println!();
    println!("ROUTES:");
    println!("    GET /provenance/:id    Resolve the record for a scanned code");
    println!("    GET /health            Liveness check");
    println!();
}
