//! Shape transition sequencer
//!
//! Idle → Transitioning (progress 0 → 1 in fixed steps per render tick) →
//! swap geometry → Idle. The sequencer only sees "target kind differs from
//! current kind" each tick; it has no notion of which kind is pending, so a
//! target that changes mid-transition does not restart progress.

use tracing::info;

/// Peak shimmer added on top of the base color at full progress
pub const SHIMMER_AMPLITUDE: f64 = 0.3;

/// Tolerance for float step accumulation
const COMPLETION_EPSILON: f64 = 1e-9;

/// Outcome of one render tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionTick {
    /// No transition in flight
    Idle,
    /// Transition advanced to the given progress
    Advancing(f64),
    /// Mismatch went away mid-transition; progress is held
    Held(f64),
    /// Progress reached the given value (1.0): the caller must swap
    /// geometry now. The sequencer is already back to idle.
    Swap(f64),
}

/// Discrete shape-swap state machine
pub struct TransitionSequencer {
    step: f64,
    /// Ticks needed to go from 0 to 1
    ticks_to_complete: u32,
    ticks: u32,
    transitioning: bool,
}

impl TransitionSequencer {
    pub fn new(step: f64) -> Self {
        let step = if step > 0.0 { step.min(1.0) } else { 0.05 };
        // progress is ticks × step, so count ticks instead of summing floats
        let ticks_to_complete = ((1.0 / step) - COMPLETION_EPSILON).ceil().max(1.0) as u32;
        Self {
            step,
            ticks_to_complete,
            ticks: 0,
            transitioning: false,
        }
    }

    /// Advance one render tick given whether target and current kinds differ
    pub fn tick(&mut self, shape_mismatch: bool) -> TransitionTick {
        if !shape_mismatch {
            return if self.transitioning {
                TransitionTick::Held(self.progress())
            } else {
                TransitionTick::Idle
            };
        }

        if !self.transitioning {
            self.transitioning = true;
            self.ticks = 0;
            info!(ticks = self.ticks_to_complete, "shape transition started");
        }

        self.ticks += 1;

        if self.ticks >= self.ticks_to_complete {
            let progress = self.progress();
            self.transitioning = false;
            self.ticks = 0;
            return TransitionTick::Swap(progress);
        }

        TransitionTick::Advancing(self.progress())
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f64 {
        (self.ticks as f64 * self.step).min(1.0)
    }

    /// Shimmer intensity for the shader, proportional to progress
    pub fn shimmer(&self) -> f64 {
        SHIMMER_AMPLITUDE * self.progress()
    }

    pub fn ticks_to_complete(&self) -> u32 {
        self.ticks_to_complete
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
        self.transitioning = false;
    }
}

impl Default for TransitionSequencer {
    fn default() -> Self {
        Self::new(0.05)
    }
}
