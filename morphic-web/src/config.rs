//! Tunables for the tracker and the scene
//!
//! Defaults match the shipped app. JS may pass partial overrides as plain
//! objects; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::MorphicError;
use crate::scene::ShapeControls;

fn invalid(reason: &str) -> Result<(), MorphicError> {
    Err(MorphicError::InvalidConfig(reason.to_string()))
}

/// True for finite `value` in `(0, 1]`
fn is_unit_fraction(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Gesture tracking configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Number of recent frames in the majority vote window
    pub history_size: usize,
    /// Fraction of the window a gesture must hold to be confirmed
    pub vote_ratio: f64,
    /// Confidence bonus for a confirmed gesture
    pub stabilized_boost: f32,
    pub detector: DetectorOptions,
}

impl TrackerConfig {
    /// Votes required to confirm a gesture: `ceil(history_size × vote_ratio)`
    pub fn vote_threshold(&self) -> usize {
        (self.history_size as f64 * self.vote_ratio).ceil() as usize
    }

    /// Reject values that would make the vote meaningless
    pub fn validate(&self) -> Result<(), MorphicError> {
        if self.history_size == 0 {
            return invalid("historySize must be at least 1");
        }
        if !is_unit_fraction(self.vote_ratio) {
            return invalid("voteRatio must be in (0, 1]");
        }
        if !(self.stabilized_boost.is_finite() && self.stabilized_boost >= 0.0) {
            return invalid("stabilizedBoost must be a non-negative number");
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            history_size: 5,
            vote_ratio: 0.6,
            stabilized_boost: 0.2,
            detector: DetectorOptions::default(),
        }
    }
}

/// Options handed to the landmark backend on the JS side
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Scene animation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    /// Fraction of the remaining distance covered per render tick
    pub lerp_factor: f64,
    /// Transition progress added per render tick
    pub transition_step: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Starting value for both target and current
    pub initial: ShapeControls,
}

impl SceneConfig {
    /// Reject bounds and rates the animation cannot run with
    pub fn validate(&self) -> Result<(), MorphicError> {
        if !is_unit_fraction(self.lerp_factor) {
            return invalid("lerpFactor must be in (0, 1]");
        }
        if !is_unit_fraction(self.transition_step) {
            return invalid("transitionStep must be in (0, 1]");
        }
        if !(self.min_size.is_finite() && self.max_size.is_finite()) {
            return invalid("minSize and maxSize must be finite");
        }
        if self.min_size <= 0.0 || self.min_size > self.max_size {
            return invalid("size bounds must satisfy 0 < minSize <= maxSize");
        }
        if !self.initial.size.is_finite() {
            return invalid("initial size must be finite");
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lerp_factor: 0.1,
            transition_step: 0.05,
            min_size: 0.5,
            max_size: 3.0,
            initial: ShapeControls::default(),
        }
    }
}
