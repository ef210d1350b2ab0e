//! MDR Trace CLI
//!
//! Contact-tracing network engine for MDR infection control.
//! Builds contamination networks and compliance reports from the
//! dashboard's JSON exports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use mdr_trace::commands::{
    display_schema, display_version, execute_chart, execute_network, execute_report,
    validate_network_args, validate_network_file, validate_report_args, ChartArgs, NetworkArgs,
    ReportArgs,
};

/// MDR Trace - contact tracing for MDR infection control
#[derive(Parser, Debug)]
#[command(name = "mdr-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a contamination network for an index patient
    Network {
        /// Path to the contact events JSON export
        #[arg(short, long, default_value = "events.json")]
        events: PathBuf,

        /// Index person id to build the network from
        #[arg(short, long)]
        index: String,

        /// Output path for the network JSON
        #[arg(short, long, default_value = "network.json")]
        output: PathBuf,

        /// Equipment exposure window radius in hours; omit the flag for
        /// same-calendar-day, give it without a value for the 24h default
        #[arg(long)]
        window_hours: Option<Option<i64>>,

        /// Expansion depth (1 = direct neighborhood only)
        #[arg(long, default_value = "1")]
        depth: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Compute compliance metrics over roster, events, and alerts
    Report {
        /// Path to the patient roster JSON export
        #[arg(short, long, default_value = "patients.json")]
        patients: PathBuf,

        /// Path to the contact events JSON export
        #[arg(short, long, default_value = "events.json")]
        events: PathBuf,

        /// Path to the alert log JSON export
        #[arg(short, long, default_value = "alerts.json")]
        alerts: PathBuf,

        /// Output path for the metrics JSON
        #[arg(short, long, default_value = "metrics.json")]
        output: PathBuf,

        /// Equipment exposure window radius in hours; omit the flag for
        /// same-calendar-day, give it without a value for the 24h default
        #[arg(long)]
        window_hours: Option<Option<i64>>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Bucket an entity collection by field for chart rendering
    Chart {
        /// Path to the entity collection JSON export
        #[arg(short, long, default_value = "patients.json")]
        input: PathBuf,

        /// Field to bucket by
        #[arg(short, long, default_value = "status")]
        field: String,

        /// Output path for the chart data JSON
        #[arg(short, long, default_value = "chart.json")]
        output: PathBuf,
    },

    /// Validate a network JSON file
    Validate {
        /// Path to network JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Network {
            events,
            index,
            output,
            window_hours,
            depth,
            summary,
        } => {
            let args = NetworkArgs {
                events_path: events,
                index_person_id: index,
                output,
                window_hours,
                max_depth: depth,
                print_summary: summary,
            };

            validate_network_args(&args)?;
            execute_network(args)?;
        }

        Commands::Report {
            patients,
            events,
            alerts,
            output,
            window_hours,
            summary,
        } => {
            let args = ReportArgs {
                patients_path: patients,
                events_path: events,
                alerts_path: alerts,
                output,
                window_hours,
                print_summary: summary,
            };

            validate_report_args(&args)?;
            execute_report(args)?;
        }

        Commands::Chart {
            input,
            field,
            output,
        } => {
            let args = ChartArgs {
                input_path: input,
                field,
                output,
            };

            execute_chart(args)?;
        }

        Commands::Validate { file } => {
            validate_network_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
