//! Gesture labels and per-frame judgments

use serde::Serialize;

use crate::hand::LandmarkSet;
use crate::scene::ShapeKind;

/// Every gesture label
pub const GESTURE_TYPES: [GestureType; 4] = [
    GestureType::OpenPalm,
    GestureType::ClosedFist,
    GestureType::Pointing,
    GestureType::None,
];

/// Discrete gesture classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureType {
    OpenPalm,
    ClosedFist,
    Pointing,
    /// No hand, or an ambiguous pose
    None,
}

impl GestureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureType::OpenPalm => "open_palm",
            GestureType::ClosedFist => "closed_fist",
            GestureType::Pointing => "pointing",
            GestureType::None => "none",
        }
    }

    /// Human readable label for the gesture indicator
    pub fn label(&self) -> &'static str {
        match self {
            GestureType::OpenPalm => "Open Palm",
            GestureType::ClosedFist => "Closed Fist",
            GestureType::Pointing => "Pointing",
            GestureType::None => "No Gesture",
        }
    }

    /// Shape this gesture morphs the scene into
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            GestureType::OpenPalm => Some(ShapeKind::Sphere),
            GestureType::ClosedFist => Some(ShapeKind::Cube),
            GestureType::Pointing => Some(ShapeKind::Cone),
            GestureType::None => None,
        }
    }
}

/// Detection quality bucket shown next to the confidence bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DetectionQuality {
    Excellent,
    Good,
    Weak,
}

impl DetectionQuality {
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > 0.8 {
            DetectionQuality::Excellent
        } else if confidence > 0.6 {
            DetectionQuality::Good
        } else {
            DetectionQuality::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionQuality::Excellent => "Excellent",
            DetectionQuality::Good => "Good",
            DetectionQuality::Weak => "Weak",
        }
    }
}

/// One frame's gesture judgment
#[derive(Clone, Debug, PartialEq)]
pub struct GestureJudgment {
    pub gesture: GestureType,
    /// In [0, 1]
    pub confidence: f32,
    /// `None` when no hand was in frame
    pub landmarks: Option<LandmarkSet>,
}

impl GestureJudgment {
    pub fn new(gesture: GestureType, confidence: f32, landmarks: Option<LandmarkSet>) -> Self {
        Self {
            gesture,
            confidence,
            landmarks,
        }
    }

    /// Judgment for a frame with no hand in view
    pub fn no_hand() -> Self {
        Self::new(GestureType::None, 0.0, None)
    }

    pub fn quality(&self) -> DetectionQuality {
        DetectionQuality::from_confidence(self.confidence)
    }
}
