//! Chart command implementation.
//!
//! Buckets an exported entity collection by a field and writes the
//! labeled, colored counts the chart widgets render.

use super::models::ChartArgs;
use super::utils::read_collection;
use crate::chart::generate_chart_data;
use anyhow::{Context, Result};
use log::info;

/// Execute the chart command
///
/// **Public** - main entry point called from main.rs
pub fn execute_chart(args: ChartArgs) -> Result<()> {
    info!(
        "Generating chart data from {} by field '{}'",
        args.input_path.display(),
        args.field
    );

    // Entities stay untyped here so any store export can be bucketed
    let entities: Vec<serde_json::Value> = read_collection(&args.input_path, "entities")?;

    let slices = generate_chart_data(&entities, &args.field)
        .with_context(|| format!("Failed to bucket entities by '{}'", args.field))?;

    info!("Generated {} buckets", slices.len());

    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &slices)
        .context("Failed to serialize chart data")?;

    info!("✓ Chart data written to: {}", args.output.display());

    Ok(())
}
