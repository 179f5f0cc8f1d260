//! Error types surfaced across the JS boundary

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur outside the pure classification/animation core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MorphicError {
    /// The external landmark backend (MediaPipe Hands) failed to start
    #[error("hand tracker initialization failed: {0}")]
    TrackerInit(String),

    #[error("hand tracker is not initialized")]
    NotInitialized,

    /// A tracker initialization finished after its session was replaced
    #[error("stale hand tracker initialization ignored")]
    StaleInitialization,

    /// Config passed in from JS is out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Flat landmark buffer has the wrong length
    #[error("invalid landmark data length: {len} (expected a multiple of 63)")]
    InvalidLandmarkData { len: usize },

    #[error("scene has been disposed")]
    Disposed,

    #[error("render loop scheduling failed: {0}")]
    RenderLoop(String),
}

impl From<MorphicError> for JsValue {
    fn from(err: MorphicError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
