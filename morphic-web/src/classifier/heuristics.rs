//! Rule-based gesture classification
//!
//! Precedence: pointing, open palm, closed fist, otherwise none.
//! Pure function of the landmark set.

use super::fingers::{finger_states, FingerStates};
use super::gesture::{GestureJudgment, GestureType};
use crate::hand::{LandmarkSet, INDEX_PIP, INDEX_TIP, MIDDLE_TIP};

// ============================================================================
// CONFIDENCE TUNING
// ============================================================================

const POINTING_BASE: f32 = 0.4;
const POINTING_BONUS: f32 = 0.3;
/// Max horizontal drift between index tip and PIP for a "straight" finger
const STRAIGHTNESS_THRESHOLD: f32 = 0.05;
/// Min vertical gap between index tip and middle tip for an "isolated" finger
const ISOLATION_THRESHOLD: f32 = 0.1;

const OPEN_PALM_BASE: f32 = 0.6;
const OPEN_PALM_PER_FINGER: f32 = 0.1;

const FIST_BASE: f32 = 0.9;
const FIST_PENALTY: f32 = 0.2;
const FIST_FLOOR: f32 = 0.5;

/// Classify one hand into a raw gesture judgment.
///
/// `hand` must hold 21 landmarks in MediaPipe order; this is not checked.
pub fn classify(hand: &LandmarkSet) -> GestureJudgment {
    let fingers = finger_states(hand);
    let (gesture, confidence) = judge(hand, &fingers);
    GestureJudgment::new(gesture, confidence, Some(*hand))
}

fn judge(hand: &LandmarkSet, fingers: &FingerStates) -> (GestureType, f32) {
    let extended = fingers.extended_count();

    if fingers.is_index_only() {
        return (GestureType::Pointing, pointing_confidence(hand));
    }

    match extended {
        4 | 5 => (GestureType::OpenPalm, open_palm_confidence(extended)),
        0 | 1 => (GestureType::ClosedFist, fist_confidence(extended)),
        _ => (GestureType::None, 0.0),
    }
}

fn pointing_confidence(hand: &LandmarkSet) -> f32 {
    let index_tip = hand[INDEX_TIP];
    let index_pip = hand[INDEX_PIP];
    let middle_tip = hand[MIDDLE_TIP];

    let straightness = if (index_tip.x - index_pip.x).abs() < STRAIGHTNESS_THRESHOLD {
        POINTING_BONUS
    } else {
        0.0
    };
    let isolation = if (index_tip.y - middle_tip.y).abs() > ISOLATION_THRESHOLD {
        POINTING_BONUS
    } else {
        0.0
    };

    (POINTING_BASE + straightness + isolation).min(1.0)
}

fn open_palm_confidence(extended: usize) -> f32 {
    (OPEN_PALM_BASE + OPEN_PALM_PER_FINGER * (extended as f32 - 4.0)).min(1.0)
}

fn fist_confidence(extended: usize) -> f32 {
    (FIST_BASE - FIST_PENALTY * extended as f32).max(FIST_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::hand::{
        HandLandmark, INDEX_MCP, LANDMARK_COUNT, MIDDLE_PIP, PINKY_PIP, PINKY_TIP, RING_PIP,
        RING_TIP, THUMB_IP, THUMB_TIP, WRIST,
    };

    const FINGERS: [(usize, usize); 4] = [
        (INDEX_TIP, INDEX_PIP),
        (MIDDLE_TIP, MIDDLE_PIP),
        (RING_TIP, RING_PIP),
        (PINKY_TIP, PINKY_PIP),
    ];

    /// Upright hand with every finger curled (tips below PIPs)
    fn curled_hand() -> [HandLandmark; LANDMARK_COUNT] {
        let mut p = [HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        p[WRIST] = HandLandmark::new(0.5, 0.9, 0.0);
        p[THUMB_IP] = HandLandmark::new(0.4, 0.7, 0.0);
        p[THUMB_TIP] = HandLandmark::new(0.42, 0.72, 0.0);
        p[INDEX_MCP] = HandLandmark::new(0.45, 0.6, 0.0);
        for (tip, pip) in FINGERS {
            p[pip] = HandLandmark::new(0.5, 0.5, 0.0);
            p[tip] = HandLandmark::new(0.5, 0.6, 0.0);
        }
        p
    }

    fn extend(p: &mut [HandLandmark; LANDMARK_COUNT], tip: usize) {
        p[tip].y = 0.2;
    }

    fn extend_thumb(p: &mut [HandLandmark; LANDMARK_COUNT]) {
        p[THUMB_TIP] = HandLandmark::new(0.2, 0.5, 0.0);
    }

    #[test]
    fn test_closed_fist() {
        let judgment = classify(&LandmarkSet::new(curled_hand()));
        assert_eq!(judgment.gesture, GestureType::ClosedFist);
        assert_abs_diff_eq!(judgment.confidence, 0.9, epsilon = 1e-6);
    }

    #[test]
    fn test_fist_with_thumb_out() {
        let mut p = curled_hand();
        extend_thumb(&mut p);
        let judgment = classify(&LandmarkSet::new(p));
        assert_eq!(judgment.gesture, GestureType::ClosedFist);
        assert_abs_diff_eq!(judgment.confidence, 0.7, epsilon = 1e-6);
    }

    #[test]
    fn test_open_palm_four_and_five() {
        let mut p = curled_hand();
        for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
            extend(&mut p, tip);
        }
        let judgment = classify(&LandmarkSet::new(p));
        assert_eq!(judgment.gesture, GestureType::OpenPalm);
        assert_abs_diff_eq!(judgment.confidence, 0.6, epsilon = 1e-6);

        extend_thumb(&mut p);
        let judgment = classify(&LandmarkSet::new(p));
        assert_eq!(judgment.gesture, GestureType::OpenPalm);
        assert_abs_diff_eq!(judgment.confidence, 0.7, epsilon = 1e-6);
    }

    #[test]
    fn test_pointing_takes_precedence_over_fist() {
        // index alone is one extended finger, which would also be a fist
        let mut p = curled_hand();
        extend(&mut p, INDEX_TIP);
        let judgment = classify(&LandmarkSet::new(p));
        assert_eq!(judgment.gesture, GestureType::Pointing);
        // straight (same x as PIP) and isolated (0.2 vs 0.6)
        assert_abs_diff_eq!(judgment.confidence, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pointing_bonuses() {
        let mut p = curled_hand();
        // crooked, and level with the curled middle finger
        p[INDEX_TIP] = HandLandmark::new(0.6, 0.45, 0.0);
        p[MIDDLE_TIP].y = 0.5;
        let judgment = classify(&LandmarkSet::new(p));
        assert_eq!(judgment.gesture, GestureType::Pointing);
        assert_abs_diff_eq!(judgment.confidence, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_pointing_with_thumb_out() {
        let mut p = curled_hand();
        extend(&mut p, INDEX_TIP);
        extend_thumb(&mut p);
        assert_eq!(classify(&LandmarkSet::new(p)).gesture, GestureType::Pointing);
    }

    #[test]
    fn test_ambiguous_is_none() {
        let mut p = curled_hand();
        extend(&mut p, MIDDLE_TIP);
        extend(&mut p, RING_TIP);
        let judgment = classify(&LandmarkSet::new(p));
        assert_eq!(judgment.gesture, GestureType::None);
        assert_eq!(judgment.confidence, 0.0);
        assert!(judgment.landmarks.is_some());
    }

    #[test]
    fn test_three_extended_is_none() {
        let mut p = curled_hand();
        extend(&mut p, INDEX_TIP);
        extend(&mut p, MIDDLE_TIP);
        extend(&mut p, RING_TIP);
        assert_eq!(classify(&LandmarkSet::new(p)).gesture, GestureType::None);
    }
}
