mod config;
mod logging;
mod server;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Proxifeed Server - proximity-bucketed posts feed
#[derive(Parser)]
#[command(name = "proxifeed-server")]
#[command(about = "Proxifeed Server - proximity-bucketed posts feed")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.bind_addr.set_port(port);
    }

    logging::init(&config.logging, cli.verbose);
    tracing::info!("Proxifeed Server starting");

    if cli.print_config {
        println!(
            "Effective configuration:\n{}",
            serde_json::to_string_pretty(&config)?
        );
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => server::run(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    let spec = config.sector_spec()?;
    println!("Configuration is valid");
    println!(
        "sector bucket width: {} m (SRID {})",
        spec.bucket_width_m(),
        spec.srid()
    );
    Ok(())
}
