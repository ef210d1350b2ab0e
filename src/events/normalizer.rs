//! Event normalizer: validates and classifies raw contact records.
//!
//! Every record is either a person-person contact, a person-equipment
//! contact, or invalid. Classification is pure; malformed records are
//! never fatal - they are collected and surfaced to the caller so noisy
//! real-world feeds degrade gracefully.

use super::schema::ContactEvent;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Why an event was rejected by the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// `sourcePersonId` missing or empty
    MissingSource,
    /// `timestamp` missing
    MissingTimestamp,
    /// Both `contactPersonId` and `equipmentId` present
    BothContactAndEquipment,
    /// Neither `contactPersonId` nor `equipmentId` present
    NeitherContactNorEquipment,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvalidReason::MissingSource => "missing source person id",
            InvalidReason::MissingTimestamp => "missing timestamp",
            InvalidReason::BothContactAndEquipment => "both contact and equipment ids present",
            InvalidReason::NeitherContactNorEquipment => "neither contact nor equipment id present",
        };
        f.write_str(msg)
    }
}

/// Result of classifying a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Person-person contact (shared room)
    Direct,
    /// Person-equipment contact
    Equipment,
    /// Malformed record, to be skipped
    Invalid(InvalidReason),
}

/// An event rejected during normalization, with its position in the
/// input batch for auditability
#[derive(Debug, Clone, Serialize)]
pub struct RejectedEvent {
    /// Index of the record in the original batch
    pub index: usize,
    pub reason: InvalidReason,
    pub event: ContactEvent,
}

/// Normalized event batch, split by kind
#[derive(Debug, Clone, Default)]
pub struct NormalizedEvents {
    /// Person-person contacts, in input order
    pub direct: Vec<ContactEvent>,
    /// Person-equipment contacts, in input order
    pub equipment: Vec<ContactEvent>,
    /// Records that failed validation
    pub rejected: Vec<RejectedEvent>,
}

impl NormalizedEvents {
    /// Total number of accepted events
    pub fn accepted_count(&self) -> usize {
        self.direct.len() + self.equipment.len()
    }
}

/// Classify a single contact event
///
/// **Public** - pure classification, no side effects
///
/// Returns `Direct` iff `contact_person_id` is present and non-empty and
/// no equipment id is set; `Equipment` iff `equipment_id` is present and
/// non-empty and no contact id is set; `Invalid` otherwise. Never panics.
pub fn classify(event: &ContactEvent) -> Classification {
    if event.source_person_id.trim().is_empty() {
        return Classification::Invalid(InvalidReason::MissingSource);
    }

    if event.timestamp.is_none() {
        return Classification::Invalid(InvalidReason::MissingTimestamp);
    }

    let has_contact = event
        .contact_person_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());
    let has_equipment = event
        .equipment_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());

    match (has_contact, has_equipment) {
        (true, false) => Classification::Direct,
        (false, true) => Classification::Equipment,
        (true, true) => Classification::Invalid(InvalidReason::BothContactAndEquipment),
        (false, false) => Classification::Invalid(InvalidReason::NeitherContactNorEquipment),
    }
}

/// Normalize a raw event batch into classified, validated sets
///
/// **Public** - main entry point for the normalizer
///
/// Invalid records are logged with a warning and collected into
/// `rejected`; the batch itself always succeeds.
pub fn normalize_events(events: &[ContactEvent]) -> NormalizedEvents {
    let mut normalized = NormalizedEvents::default();

    for (index, event) in events.iter().enumerate() {
        match classify(event) {
            Classification::Direct => normalized.direct.push(event.clone()),
            Classification::Equipment => normalized.equipment.push(event.clone()),
            Classification::Invalid(reason) => {
                warn!("Skipping event {}: {}", index, reason);
                normalized.rejected.push(RejectedEvent {
                    index,
                    reason,
                    event: event.clone(),
                });
            }
        }
    }

    debug!(
        "Normalized {} events: {} direct, {} equipment, {} rejected",
        events.len(),
        normalized.direct.len(),
        normalized.equipment.len(),
        normalized.rejected.len()
    );

    normalized
}
