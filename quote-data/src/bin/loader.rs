use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quote_core::{AccessorySlot, eligible_variants};
use quote_data::load_catalog;

/// Validate catalog CSV files and print a summary.
///
/// The fabric CSV has columns: id, name, category, price_per_meter.
/// The accessory CSV has columns: slot, id, name, price, description,
/// max_width (empty for unconstrained; rail-type slots only).
#[derive(Parser, Debug)]
#[command(name = "catalog-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the fabric catalog CSV
    #[arg(short, long)]
    fabrics: PathBuf,

    /// Path to the accessory catalog CSV
    #[arg(short, long)]
    accessories: PathBuf,

    /// Report rail coverage for this item width (centimeters)
    #[arg(short, long)]
    width: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let fabrics = File::open(&args.fabrics)
        .with_context(|| format!("Failed to open: {}", args.fabrics.display()))?;
    let accessories = File::open(&args.accessories)
        .with_context(|| format!("Failed to open: {}", args.accessories.display()))?;

    let catalog = load_catalog(fabrics, accessories).context("Failed to load catalog")?;

    info!(fabrics = catalog.fabrics.len(), "fabric catalog loaded");
    for slot in AccessorySlot::ALL {
        info!(
            slot = slot.as_str(),
            variants = catalog.variants_for(slot).len(),
            "accessory slot loaded"
        );
    }

    if let Some(width) = args.width {
        let width = rust_decimal::Decimal::from(width);
        for slot in [AccessorySlot::Rail, AccessorySlot::SheerRail] {
            let eligible = eligible_variants(slot, catalog.variants_for(slot), width);
            println!(
                "{}: {} of {} variants eligible at {}cm",
                slot.as_str(),
                eligible.variants().len(),
                catalog.variants_for(slot).len(),
                width
            );
        }
    }

    println!(
        "Catalog OK: {} fabrics, {} accessory variants.",
        catalog.fabrics.len(),
        AccessorySlot::ALL
            .iter()
            .map(|s| catalog.variants_for(*s).len())
            .sum::<usize>()
    );

    Ok(())
}
