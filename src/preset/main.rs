//! Snap the preset target onto the preset links file.
//!
//! Runs with built-in defaults unless a TOML preset file is present.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use findlink::models::parse_target;
use findlink::{locate, LinkCollection};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "preset")]
#[command(about = "Snap the preset target onto the preset links file")]
struct Args {
    /// TOML preset overriding the built-in links path and target
    #[arg(short, long, default_value = "findlink.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = if args.config.exists() {
        info!("Using preset {}", args.config.display());
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Preset {} not found, using built-in defaults",
            args.config.display()
        );
        Config::default()
    };

    let target = parse_target(&config.target).context("Invalid target in preset")?;
    let links = LinkCollection::load_from_file(&config.links)?;
    let report = locate(&links, target, config.parallel);

    println!("{}", config.format.render(report.as_ref())?);

    Ok(())
}
