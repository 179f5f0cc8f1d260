//! Tracking module - gates camera frames into the classification pipeline
//!
//! Re-exports only. All logic in submodules.

mod session;

pub use session::{InitTicket, TrackerStatus, TrackingSession};
