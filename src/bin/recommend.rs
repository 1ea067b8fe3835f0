//! Plant recommendation CLI
//!
//! Loads the catalog, scores one water sample and prints the ranked plants
//! as JSON on stdout. Logs go to stderr.
//!
//! Usage:
//!   recommend --ph 6.8 --temperature 21 --dissolved-oxygen 6.5 --nitrate 120
//!   recommend --list

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aquafolia_recommender::{recommend, PlantCatalog, RecommenderConfig, WaterSample};

/// Rank aquaponic plants against measured water quality
#[derive(Parser, Debug)]
#[command(name = "recommend")]
#[command(version)]
struct Args {
    /// Catalog file (overrides AQUAFOLIA_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Maximum number of plants to return (overrides AQUAFOLIA_TOP_N)
    #[arg(long)]
    top_n: Option<usize>,

    /// pH (0-14)
    #[arg(long, required_unless_present = "list", allow_negative_numbers = true)]
    ph: Option<f64>,

    /// Temperature in °C (-10 to 50)
    #[arg(long, required_unless_present = "list", allow_negative_numbers = true)]
    temperature: Option<f64>,

    /// Dissolved oxygen in mg/L (0-50)
    #[arg(long, required_unless_present = "list", allow_negative_numbers = true)]
    dissolved_oxygen: Option<f64>,

    /// Ammonia in mg/L
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    ammonia: f64,

    /// Nitrate in mg/L (0-5000)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    nitrate: f64,

    /// Print per-dimension breakdowns instead of plain recommendations
    #[arg(long)]
    explain: bool,

    /// Print the whole catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquafolia_recommender=info,recommend=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = RecommenderConfig::from_env();
    if let Some(path) = args.catalog.clone() {
        config.catalog_path = path;
    }
    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }

    info!("Configuration:");
    info!("  Catalog: {:?}", config.catalog_path);
    info!("  Top N: {}", config.top_n);

    let catalog = PlantCatalog::load(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {:?}", config.catalog_path))?;
    info!("Catalog ready ({} plants, {:?})", catalog.len(), catalog.source());

    if args.list {
        println!("{}", serde_json::to_string_pretty(catalog.all())?);
        return Ok(());
    }

    // clap enforces these unless --list was given
    let sample = WaterSample::new(
        args.ph.context("--ph is required")?,
        args.temperature.context("--temperature is required")?,
        args.dissolved_oxygen.context("--dissolved-oxygen is required")?,
    )
    .with_ammonia(args.ammonia)
    .with_nitrate(args.nitrate);

    sample.validate().context("Invalid water sample")?;

    let recommendations = recommend(&catalog, &sample, config.top_n);
    info!("{} plants recommended", recommendations.len());

    if args.explain {
        let breakdowns: Vec<_> = recommendations
            .iter()
            .map(|r| r.explain(&sample))
            .collect();

        for breakdown in &breakdowns {
            for miss in breakdown.misses() {
                info!("{}: {}", breakdown.plant, miss.format_with_context());
            }
        }

        println!("{}", serde_json::to_string_pretty(&breakdowns)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    }

    Ok(())
}
