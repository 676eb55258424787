//! Command-line interface for mediashelf.
//!
//! Provides commands for serving the HTTP API and inspecting the resolved
//! configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{self, ResolvedConfig};
use crate::core::MediaShelf;
use crate::server;

/// mediashelf - Shared-login movie and book tracker
#[derive(Parser, Debug)]
#[command(name = "mediashelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        /// Address to bind to (overrides config)
        #[arg(short, long)]
        bind: Option<String>,

        /// Start with an empty catalog instead of the sample items
        #[arg(long)]
        no_seed: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind, no_seed } => serve(bind, no_seed).await,
            Commands::Config => show_config(),
        }
    }
}

/// Start the HTTP API
async fn serve(bind: Option<String>, no_seed: bool) -> Result<()> {
    let cfg = config::config()?;
    let addr = match bind {
        Some(bind) => config::parse_bind(&bind)?,
        None => cfg.bind,
    };

    let shelf = build_shelf(cfg, no_seed)?;
    server::run(addr, shelf).await
}

/// Build the shelf described by `cfg`
fn build_shelf(cfg: &ResolvedConfig, no_seed: bool) -> Result<MediaShelf> {
    let mut shelf = MediaShelf::new(cfg.shared_password.clone());
    if cfg.seed_samples && !no_seed {
        shelf.seed_samples()?;
    }
    Ok(shelf)
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("MediaShelf Configuration");
    println!("{}", "-".repeat(40));
    println!(
        "Config file:  {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Bind:         {}", cfg.bind);
    println!("Password:     {}", redact(&cfg.shared_password));
    println!("Seed samples: {}", cfg.seed_samples);

    Ok(())
}

/// Hide a secret, keeping only its length visible
fn redact(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
