//! Majority-vote stabilizer
//!
//! Trades up to `threshold - 1` frames of latency for flicker suppression:
//! a gesture is only reported once it holds the vote threshold within the
//! history window.

use tracing::debug;

use super::gesture::{GestureJudgment, GestureType};
use super::history::GestureHistory;
use crate::config::TrackerConfig;

/// Temporal smoother over raw classifier output
pub struct GestureStabilizer {
    history: GestureHistory,
    /// Votes needed to confirm a gesture
    threshold: usize,
    /// Confidence bonus on confirmation
    boost: f32,
    /// Last emitted gesture, for change logging
    last_emitted: GestureType,
}

impl GestureStabilizer {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            history: GestureHistory::new(config.history_size),
            threshold: config.vote_threshold(),
            boost: config.stabilized_boost,
            last_emitted: GestureType::None,
        }
    }

    /// Record `raw` and return the smoothed judgment for this frame.
    ///
    /// If the window's most common gesture reaches the threshold, it is
    /// emitted with `raw`'s confidence boosted (capped at 1.0) and `raw`'s
    /// landmarks. Otherwise `raw` passes through untouched.
    pub fn stabilize(&mut self, raw: GestureJudgment) -> GestureJudgment {
        self.history.push(raw.gesture);

        let judgment = match self.history.most_common() {
            Some((gesture, votes)) if votes >= self.threshold => GestureJudgment {
                gesture,
                confidence: (raw.confidence + self.boost).min(1.0),
                landmarks: raw.landmarks,
            },
            _ => raw,
        };

        if judgment.gesture != self.last_emitted {
            debug!(
                from = self.last_emitted.as_str(),
                to = judgment.gesture.as_str(),
                confidence = judgment.confidence,
                "gesture changed"
            );
            self.last_emitted = judgment.gesture;
        }

        judgment
    }

    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    /// Forget all votes (new tracking session)
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_emitted = GestureType::None;
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn raw(gesture: GestureType, confidence: f32) -> GestureJudgment {
        GestureJudgment::new(gesture, confidence, None)
    }

    #[test]
    fn test_third_frame_confirms() {
        let mut stabilizer = GestureStabilizer::default();
        let outputs: Vec<_> = (0..3)
            .map(|_| stabilizer.stabilize(raw(GestureType::OpenPalm, 0.5)))
            .collect();

        assert_eq!(outputs[0].gesture, GestureType::OpenPalm);
        assert_abs_diff_eq!(outputs[0].confidence, 0.5);
        assert_abs_diff_eq!(outputs[1].confidence, 0.5);
        assert_eq!(outputs[2].gesture, GestureType::OpenPalm);
        assert_abs_diff_eq!(outputs[2].confidence, 0.7, epsilon = 1e-6);
    }

    #[test]
    fn test_boost_is_capped() {
        let mut stabilizer = GestureStabilizer::default();
        let mut last = raw(GestureType::None, 0.0);
        for _ in 0..4 {
            last = stabilizer.stabilize(raw(GestureType::ClosedFist, 0.9));
        }
        assert_eq!(last.confidence, 1.0);
    }

    #[test]
    fn test_alternating_passes_through_until_third_vote() {
        let mut stabilizer = GestureStabilizer::default();
        let sequence = [
            GestureType::OpenPalm,
            GestureType::ClosedFist,
            GestureType::OpenPalm,
            GestureType::ClosedFist,
        ];
        for gesture in sequence {
            let input = raw(gesture, 0.6);
            assert_eq!(stabilizer.stabilize(input.clone()), input);
        }

        // fifth frame gives open palm 3 of 5 votes
        let output = stabilizer.stabilize(raw(GestureType::OpenPalm, 0.6));
        assert_eq!(output.gesture, GestureType::OpenPalm);
        assert_abs_diff_eq!(output.confidence, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_three_way_flicker_never_confirms() {
        let mut stabilizer = GestureStabilizer::default();
        let sequence = [
            GestureType::OpenPalm,
            GestureType::ClosedFist,
            GestureType::Pointing,
            GestureType::OpenPalm,
            GestureType::ClosedFist,
            GestureType::Pointing,
        ];
        for gesture in sequence {
            let input = raw(gesture, 0.6);
            assert_eq!(stabilizer.stabilize(input.clone()), input);
        }
    }

    #[test]
    fn test_majority_overrides_outlier_frame() {
        let mut stabilizer = GestureStabilizer::default();
        for _ in 0..4 {
            stabilizer.stabilize(raw(GestureType::Pointing, 0.7));
        }
        // single flicker frame is voted down
        let output = stabilizer.stabilize(raw(GestureType::OpenPalm, 0.6));
        assert_eq!(output.gesture, GestureType::Pointing);
        assert_abs_diff_eq!(output.confidence, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_absent_hand_stabilizes_to_none() {
        let mut stabilizer = GestureStabilizer::default();
        for _ in 0..5 {
            stabilizer.stabilize(raw(GestureType::OpenPalm, 0.7));
        }
        let mut output = raw(GestureType::OpenPalm, 0.0);
        for _ in 0..3 {
            output = stabilizer.stabilize(GestureJudgment::no_hand());
        }
        assert_eq!(output.gesture, GestureType::None);
        assert_abs_diff_eq!(output.confidence, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_reset_forgets_votes() {
        let mut stabilizer = GestureStabilizer::default();
        for _ in 0..5 {
            stabilizer.stabilize(raw(GestureType::Pointing, 0.4));
        }
        stabilizer.reset();
        assert!(stabilizer.history().is_empty());
        let output = stabilizer.stabilize(raw(GestureType::ClosedFist, 0.5));
        assert_abs_diff_eq!(output.confidence, 0.5);
    }
}
