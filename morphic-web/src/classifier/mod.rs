//! Classifier module - geometric gesture classification + temporal voting
//!
//! Raw per-frame judgments come from `heuristics::classify`; `GestureStabilizer`
//! turns the raw stream into a flicker-free one.

mod fingers;
mod gesture;
mod heuristics;
mod history;
mod stabilizer;

pub use fingers::{finger_states, FingerStates, THUMB_EXTENSION_MARGIN};
pub use gesture::{DetectionQuality, GestureJudgment, GestureType, GESTURE_TYPES};
pub use heuristics::classify;
pub use history::GestureHistory;
pub use stabilizer::GestureStabilizer;
