//! Compliance and epidemiological metrics.
//!
//! Aggregates the patient roster, the contact event log, and the alert
//! log into the fixed-shape record consumed by report exporters and
//! dashboard summary cards. Pure: output depends only on input contents.

use crate::events::{normalize_events, AlertKind, AlertRecord, ContactEvent, Patient};
use crate::network::builder::{
    direct_contact_candidates, equipment_contact_candidates, ExposureWindow,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed-shape metrics record.
///
/// Field names are a compatibility contract with the report/export
/// collaborators (PDF/Excel generators and summary cards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetrics {
    /// Patients with confirmed MDR-positive (red) status
    pub mdr_positive: usize,

    /// Distinct people reachable via the direct pass from any red patient
    pub direct_contacts: usize,

    /// Distinct people reachable via the equipment pass from any red patient
    pub indirect_contacts: usize,

    /// Total records in the alert log, regardless of kind
    pub alerts_triggered: usize,

    /// Median hours between lab result and isolation start; 0 when no
    /// patient has both timestamps
    pub median_isolation_time: f64,

    pub total_patients: usize,
}

/// Compute compliance metrics with the default same-day exposure window
///
/// **Public** - main entry point for the aggregator
pub fn calculate_metrics(
    patients: &[Patient],
    events: &[ContactEvent],
    alerts: &[AlertRecord],
) -> ComplianceMetrics {
    calculate_metrics_with_window(patients, events, alerts, &ExposureWindow::default())
}

/// Compute compliance metrics with an explicit exposure window
///
/// **Public** - the window is policy, so callers can parametrize it
pub fn calculate_metrics_with_window(
    patients: &[Patient],
    events: &[ContactEvent],
    alerts: &[AlertRecord],
    window: &ExposureWindow,
) -> ComplianceMetrics {
    let normalized = normalize_events(events);

    let mut direct: HashSet<String> = HashSet::new();
    let mut indirect: HashSet<String> = HashSet::new();

    // Each red patient is an index; contact sets are unioned and
    // deduplicated across all of them.
    for patient in patients.iter().filter(|p| p.status.is_mdr_positive()) {
        direct.extend(direct_contact_candidates(&normalized, &patient.id));
        indirect.extend(equipment_contact_candidates(&normalized, &patient.id, window));
    }

    let latencies = isolation_latencies(patients, alerts);
    debug!(
        "Metrics over {} patients: {} direct, {} indirect, {} latency samples",
        patients.len(),
        direct.len(),
        indirect.len(),
        latencies.len()
    );

    ComplianceMetrics {
        mdr_positive: patients.iter().filter(|p| p.status.is_mdr_positive()).count(),
        direct_contacts: direct.len(),
        indirect_contacts: indirect.len(),
        alerts_triggered: alerts.len(),
        median_isolation_time: median(latencies),
        total_patients: patients.len(),
    }
}

/// Hours between lab result and isolation start, one sample per red
/// patient that has both alert timestamps
///
/// **Private** - internal helper for calculate_metrics
fn isolation_latencies(patients: &[Patient], alerts: &[AlertRecord]) -> Vec<f64> {
    let mut samples = Vec::new();

    for patient in patients.iter().filter(|p| p.status.is_mdr_positive()) {
        let earliest = |kind: AlertKind| {
            alerts
                .iter()
                .filter(|a| a.kind == kind && a.patient_id.as_deref() == Some(patient.id.as_str()))
                .filter_map(|a| a.timestamp)
                .min()
        };

        let Some(lab_posted) = earliest(AlertKind::LabResultPosted) else {
            continue;
        };
        let Some(isolation_started) = earliest(AlertKind::IsolationStarted) else {
            continue;
        };

        let hours = (isolation_started - lab_posted).num_seconds() as f64 / 3600.0;
        samples.push(hours);
    }

    samples
}

/// Median of a sample; the mean of the two central values for even
/// sizes, and 0 for an empty sample (degenerate, not an error)
///
/// **Private** - internal helper for calculate_metrics
fn median(mut samples: Vec<f64>) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    samples.sort_by(|a, b| a.total_cmp(b));

    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        samples[mid]
    } else {
        (samples[mid - 1] + samples[mid]) / 2.0
    }
}
