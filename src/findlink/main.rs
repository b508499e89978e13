//! Find the closest point on a set of road links.
//!
//! Reads a GeoJSON FeatureCollection of LineStrings, snaps the target onto
//! the nearest segment and prints the distance and the snapped point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use findlink::models::{parse_target, DEFAULT_LINKS_FILE, DEFAULT_TARGET};
use findlink::{locate, LinkCollection, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "findlink")]
#[command(about = "Snap a point onto the nearest road link")]
struct Args {
    /// GeoJSON file with LineString links
    #[arg(long, default_value = DEFAULT_LINKS_FILE)]
    links: PathBuf,

    /// Target as "lon,lat"
    #[arg(long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Scan links on all cores
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let target = parse_target(&args.target).context("Invalid --target")?;
    info!("Target: ({}, {})", target.x, target.y);

    let links = LinkCollection::load_from_file(&args.links)?;
    let report = locate(&links, target, args.parallel);

    println!("{}", args.format.render(report.as_ref())?);

    Ok(())
}
