use std::path::PathBuf;

/// Arguments for the network command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct NetworkArgs {
    /// Path to the contact events JSON export
    pub events_path: PathBuf,

    /// Index person to build the network from
    pub index_person_id: String,

    /// Output path for the network JSON
    pub output: PathBuf,

    /// Exposure window radius in hours. None = same calendar day;
    /// Some(None) = flag given without a value, use the default radius
    pub window_hours: Option<Option<i64>>,

    /// Expansion depth (1 = direct neighborhood only)
    pub max_depth: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for NetworkArgs {
    fn default() -> Self {
        Self {
            events_path: PathBuf::from("events.json"),
            index_person_id: String::new(),
            output: PathBuf::from("network.json"),
            window_hours: None,
            max_depth: 1,
            print_summary: false,
        }
    }
}

/// Arguments for the report command
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the patient roster JSON export
    pub patients_path: PathBuf,

    /// Path to the contact events JSON export
    pub events_path: PathBuf,

    /// Path to the alert log JSON export
    pub alerts_path: PathBuf,

    /// Output path for the metrics JSON
    pub output: PathBuf,

    /// Exposure window radius in hours. None = same calendar day;
    /// Some(None) = flag given without a value, use the default radius
    pub window_hours: Option<Option<i64>>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            patients_path: PathBuf::from("patients.json"),
            events_path: PathBuf::from("events.json"),
            alerts_path: PathBuf::from("alerts.json"),
            output: PathBuf::from("metrics.json"),
            window_hours: None,
            print_summary: false,
        }
    }
}

/// Arguments for the chart command
#[derive(Debug, Clone)]
pub struct ChartArgs {
    /// Path to the entity collection JSON export
    pub input_path: PathBuf,

    /// Field to bucket by
    pub field: String,

    /// Output path for the chart data JSON
    pub output: PathBuf,
}

impl Default for ChartArgs {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("patients.json"),
            field: "status".to_string(),
            output: PathBuf::from("chart.json"),
        }
    }
}
