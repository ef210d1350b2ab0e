//! MDR Trace
//!
//! Contact-tracing network engine for multidrug-resistant (MDR)
//! organism spread tracking.
//!
//! Turns a flat log of proximity and equipment-usage events into a
//! directed contamination-exposure graph rooted at an index patient,
//! plus aggregate compliance metrics. The surrounding dashboard (CRUD,
//! auth, rendering, export formatting) consumes this engine's output
//! but does not participate in its logic.
//!
//! All engine functions are pure and synchronous over immutable
//! snapshots; data-quality problems degrade gracefully instead of
//! raising.

pub mod chart;
pub mod commands;
pub mod events;
pub mod metrics;
pub mod network;
pub mod output;
pub mod utils;
