//! Event records and normalization.
//!
//! This module handles:
//! - Input record definitions (contact events, patients, alerts)
//! - Classifying raw records into person or equipment contacts
//! - Rejecting malformed records without aborting the batch

pub mod normalizer;
pub mod schema;

// Re-export main types
pub use normalizer::{
    classify, normalize_events, Classification, InvalidReason, NormalizedEvents, RejectedEvent,
};
pub use schema::{AlertKind, AlertRecord, ContactEvent, Patient, PatientStatus};
