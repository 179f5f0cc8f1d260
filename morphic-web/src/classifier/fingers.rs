//! Per-finger extension tests
//!
//! Assumes an upright, camera-facing hand: image y grows downwards, so an
//! extended finger has its tip above (smaller y than) its lower joints.

use crate::hand::{
    LandmarkSet, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP,
    RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP, WRIST,
};

/// Thumb tip must be this much farther from the wrist than the IP joint
pub const THUMB_EXTENSION_MARGIN: f32 = 1.1;

/// Extension state of all five fingers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// Number of extended fingers, thumb included (0-5)
    pub fn extended_count(&self) -> usize {
        self.as_array().iter().filter(|&&extended| extended).count()
    }

    /// Index up, the other three long fingers curled. Thumb is ignored.
    pub fn is_index_only(&self) -> bool {
        self.index && !self.middle && !self.ring && !self.pinky
    }
}

/// Evaluate extension for every finger of one hand
pub fn finger_states(hand: &LandmarkSet) -> FingerStates {
    FingerStates {
        thumb: thumb_extended(hand),
        index: hand[INDEX_TIP].y < hand[INDEX_PIP].y && hand[INDEX_TIP].y < hand[INDEX_MCP].y,
        middle: hand[MIDDLE_TIP].y < hand[MIDDLE_PIP].y,
        ring: hand[RING_TIP].y < hand[RING_PIP].y,
        pinky: hand[PINKY_TIP].y < hand[PINKY_PIP].y,
    }
}

/// The thumb folds across the palm rather than towards it, so compare
/// wrist distances instead of heights.
fn thumb_extended(hand: &LandmarkSet) -> bool {
    let wrist = &hand[WRIST];
    let tip_distance = hand[THUMB_TIP].planar_distance(wrist);
    let ip_distance = hand[THUMB_IP].planar_distance(wrist);
    tip_distance > ip_distance * THUMB_EXTENSION_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{HandLandmark, LANDMARK_COUNT};

    fn hand_with(edits: &[(usize, f32, f32)]) -> LandmarkSet {
        let mut points = [HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        for &(idx, x, y) in edits {
            points[idx] = HandLandmark::new(x, y, 0.0);
        }
        LandmarkSet::new(points)
    }

    #[test]
    fn test_flat_hand_has_nothing_extended() {
        // all joints coincide: no tip is strictly above its joint
        let hand = hand_with(&[]);
        assert_eq!(finger_states(&hand).extended_count(), 0);
    }

    #[test]
    fn test_index_requires_tip_above_mcp_too() {
        let hand = hand_with(&[
            (INDEX_TIP, 0.5, 0.4),
            (INDEX_PIP, 0.5, 0.45),
            (INDEX_MCP, 0.5, 0.3),
        ]);
        assert!(!finger_states(&hand).index);

        let hand = hand_with(&[
            (INDEX_TIP, 0.5, 0.2),
            (INDEX_PIP, 0.5, 0.45),
            (INDEX_MCP, 0.5, 0.3),
        ]);
        assert!(finger_states(&hand).index);
    }

    #[test]
    fn test_thumb_margin() {
        // tip exactly 10% farther than IP: not enough
        let hand = hand_with(&[(WRIST, 0.0, 0.0), (THUMB_IP, 0.0, 0.5), (THUMB_TIP, 0.0, 0.55)]);
        assert!(!finger_states(&hand).thumb);

        let hand = hand_with(&[(WRIST, 0.0, 0.0), (THUMB_IP, 0.0, 0.5), (THUMB_TIP, 0.0, 0.6)]);
        assert!(finger_states(&hand).thumb);
    }

    #[test]
    fn test_thumb_ignores_depth() {
        let flat = hand_with(&[(WRIST, 0.0, 0.0), (THUMB_IP, 0.0, 0.5), (THUMB_TIP, 0.0, 0.5)]);
        let mut hand = *flat.points();
        hand[THUMB_TIP].z = 10.0;
        assert!(!finger_states(&LandmarkSet::new(hand)).thumb);
    }

    #[test]
    fn test_index_only() {
        let states = FingerStates {
            thumb: true,
            index: true,
            ..Default::default()
        };
        assert!(states.is_index_only());
        assert_eq!(states.extended_count(), 2);
    }
}
