//! Sales Report - product-sales CSV cleaning, aggregation & static charts.
//!
//! Loads a sales export, normalizes its display-formatted numeric
//! columns, and renders the report charts plus a closing summary.

mod charts;
mod data;
mod report;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use data::{SalesCleaner, SalesLoader};
use report::Reporter;

#[derive(Parser)]
#[command(
    name = "sales_report",
    about = "Product-sales CSV analysis & static chart report"
)]
struct Cli {
    /// Path to the sales CSV export
    #[arg(default_value = "amazon_sales.csv")]
    input: String,

    /// Directory the chart images are written to
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let df = SalesLoader::load(&cli.input).with_context(|| format!("loading {}", cli.input))?;
    info!("Loaded {} rows from {}", df.height(), cli.input);

    let cleaned = SalesCleaner::clean(&df)?;
    info!(
        "Cleaned table: {} rows kept, {} dropped",
        cleaned.height(),
        df.height() - cleaned.height()
    );

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    Reporter::new(&cli.out_dir).run(&cleaned)?;
    Ok(())
}
