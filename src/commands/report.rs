//! Report command implementation.
//!
//! Reads the roster, event, and alert exports, computes the compliance
//! metrics record, and writes it for the export collaborators.

use super::models::ReportArgs;
use super::utils::{read_collection, resolve_window};
use crate::events::{AlertRecord, ContactEvent, Patient};
use crate::metrics::calculate_metrics_with_window;
use crate::output::write_metrics;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading input collections...");
    let patients: Vec<Patient> = read_collection(&args.patients_path, "patients")?;
    let events: Vec<ContactEvent> = read_collection(&args.events_path, "events")?;
    let alerts: Vec<AlertRecord> = read_collection(&args.alerts_path, "alerts")?;

    info!(
        "Read {} patients, {} events, {} alerts",
        patients.len(),
        events.len(),
        alerts.len()
    );

    info!("Step 2/3: Calculating metrics...");
    let window = resolve_window(args.window_hours);
    let metrics = calculate_metrics_with_window(&patients, &events, &alerts, &window);

    info!("Step 3/3: Writing output...");
    write_metrics(&metrics, &args.output).context("Failed to write metrics JSON")?;

    info!("✓ Metrics written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("COMPLIANCE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("MDR Positive:          {}", metrics.mdr_positive);
        println!("Direct Contacts:       {}", metrics.direct_contacts);
        println!("Indirect Contacts:     {}", metrics.indirect_contacts);
        println!("Alerts Triggered:      {}", metrics.alerts_triggered);
        println!(
            "Median Isolation Time: {:.1}h",
            metrics.median_isolation_time
        );
        println!("Total Patients:        {}", metrics.total_patients);
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate report arguments
///
/// **Public** - called before execute_report for early validation
pub fn validate_report_args(args: &ReportArgs) -> Result<()> {
    if let Some(Some(hours)) = args.window_hours {
        if hours <= 0 {
            anyhow::bail!("Window hours must be positive");
        }
    }
    Ok(())
}
