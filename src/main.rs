//! EcoMaps Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Config is read from `--config`, or the first of
//! `~/.config/ecomaps/config.toml`, `/etc/ecomaps/config.toml` and
//! `./config.toml`. Environment variables override the file:
//! - `ECOMAPS_HOST`, `ECOMAPS_PORT`
//! - `ECOMAPS_DIST_DIR`
//! - `ECOMAPS_LOG_LEVEL`, `ECOMAPS_LOG_FORMAT`
//! - `RUST_LOG`: full filter override

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ecomaps::config::{generate_default_config, Config};
use ecomaps::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "ecomaps")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the EcoMaps recycling collection point map")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory containing the built frontend
        #[arg(long)]
        dist_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        dist_dir: None,
    }) {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
        Commands::Serve {
            host,
            port,
            dist_dir,
        } => {
            let mut config = match &cli.config {
                Some(path) => Config::load_with_env(path)?,
                None => Config::load_default(),
            };

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist_dir) = dist_dir {
                config.ui.dist_dir = dist_dir;
            }

            ecomaps::logging::init(&config.logging).context("initializing logging")?;

            tracing::info!("Starting EcoMaps server v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Serving frontend from {:?}", config.ui.dist_dir);

            serve(AppState::new(config)).await?;
        }
    }

    Ok(())
}
