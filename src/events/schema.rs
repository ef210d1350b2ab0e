//! Input record definitions for the tracing engine.
//!
//! These structs mirror the JSON documents exported by the dashboard's
//! record store (patients, contact events, alert log). The engine treats
//! every collection as an immutable snapshot per call.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One observed proximity or equipment-usage fact.
///
/// Invariant (enforced by the normalizer, not the type): exactly one of
/// `contact_person_id` or `equipment_id` is present. An event is either a
/// person contact or an equipment contact, never both, never neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEvent {
    /// Person whose exposure is being recorded
    #[serde(default, alias = "personId")]
    pub source_person_id: String,

    /// Another person present in the same room (person-contact events)
    #[serde(default, alias = "contactId", skip_serializing_if = "Option::is_none")]
    pub contact_person_id: Option<String>,

    /// Equipment used (equipment-contact events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,

    /// Room where the event was recorded
    #[serde(default)]
    pub room_id: String,

    /// When the event was recorded. The RFID feed emits local wall-clock
    /// timestamps without a zone offset, hence `NaiveDateTime`.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Elapsed minutes of co-presence (absent for equipment-only events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Patient risk status: confirmed / contact / safe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Red,
    Yellow,
    Green,
}

impl PatientStatus {
    /// True for confirmed MDR-positive patients
    pub fn is_mdr_positive(&self) -> bool {
        matches!(self, PatientStatus::Red)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Red => "red",
            PatientStatus::Yellow => "yellow",
            PatientStatus::Green => "green",
        }
    }
}

/// Patient roster entry, read as an immutable snapshot per call.
/// Mutation happens only in the excluded CRUD layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    pub status: PatientStatus,

    /// Free-text label consistent with `status` (e.g. "Confirmed")
    #[serde(default)]
    pub mdr_status: String,

    #[serde(default)]
    pub room: String,

    #[serde(default)]
    pub last_contact: Option<NaiveDateTime>,
}

/// Alert classification. The store writes human-readable trigger names;
/// aliases keep those parseable while the engine works on a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "lab_result_posted", alias = "MDR Lab Result Posted")]
    LabResultPosted,

    #[serde(rename = "isolation_started", alias = "Isolation Started")]
    IsolationStarted,

    #[serde(rename = "isolation_breach", alias = "Isolation Breach")]
    IsolationBreach,

    #[serde(rename = "other", other)]
    Other,
}

/// One record from the alert log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(rename = "type", alias = "kind", default = "AlertKind::default_other")]
    pub kind: AlertKind,

    /// Patient this alert refers to, when the trigger is patient-scoped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default)]
    pub read: bool,
}

impl AlertKind {
    fn default_other() -> Self {
        AlertKind::Other
    }
}
