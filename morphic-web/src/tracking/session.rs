//! Tracking session - initialization, start/stop gate, per-frame pipeline
//!
//! The landmark backend (MediaPipe Hands) lives on the JS side. Its
//! initialization result is reported here; until it succeeds no frame ever
//! reaches the classifier.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{info, warn};

use crate::classifier::{classify, GestureJudgment, GestureStabilizer};
use crate::config::TrackerConfig;
use crate::error::MorphicError;
use crate::hand::LandmarkSet;

/// Landmark backend state
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerStatus {
    Uninitialized,
    Ready,
    Failed(String),
}

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one in-flight backend initialization.
///
/// Only the newest ticket of the session that issued it is honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitTicket {
    session: u64,
    attempt: u32,
}

/// One hand-tracking session: classifier + stabilizer behind a start/stop gate
pub struct TrackingSession {
    id: u64,
    attempts: u32,
    config: TrackerConfig,
    stabilizer: GestureStabilizer,
    status: TrackerStatus,
    tracking: bool,
    /// Latest stabilized judgment, for the gesture indicator
    last: GestureJudgment,
}

impl TrackingSession {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            attempts: 0,
            stabilizer: GestureStabilizer::new(&config),
            status: TrackerStatus::Uninitialized,
            tracking: false,
            last: GestureJudgment::no_hand(),
            config,
        }
    }

    /// Mark the start of an asynchronous backend initialization
    pub fn begin_initialization(&mut self) -> InitTicket {
        self.attempts = self.attempts.wrapping_add(1);
        InitTicket {
            session: self.id,
            attempt: self.attempts,
        }
    }

    /// Record an asynchronous outcome, unless a newer attempt or a different
    /// session has taken over since `ticket` was issued.
    pub fn finish_initialization(
        &mut self,
        ticket: InitTicket,
        outcome: Result<(), String>,
    ) -> Result<(), MorphicError> {
        let current = InitTicket {
            session: self.id,
            attempt: self.attempts,
        };
        if ticket != current {
            warn!(?ticket, ?current, "ignoring stale tracker initialization");
            return Err(MorphicError::StaleInitialization);
        }
        self.complete_initialization(outcome)
    }

    /// Record the outcome of the backend's initialization.
    ///
    /// Success starts a fresh gesture history. Failure is returned as
    /// `MorphicError::TrackerInit` and leaves the session unusable until a
    /// later attempt succeeds.
    pub fn complete_initialization(
        &mut self,
        outcome: Result<(), String>,
    ) -> Result<(), MorphicError> {
        match outcome {
            Ok(()) => {
                self.stabilizer.reset();
                self.last = GestureJudgment::no_hand();
                self.status = TrackerStatus::Ready;
                info!("hand tracker initialized");
                Ok(())
            }
            Err(reason) => {
                warn!(%reason, "hand tracker initialization failed");
                self.status = TrackerStatus::Failed(reason.clone());
                self.tracking = false;
                Err(MorphicError::TrackerInit(reason))
            }
        }
    }

    pub fn status(&self) -> &TrackerStatus {
        &self.status
    }

    pub fn is_initialized(&self) -> bool {
        self.status == TrackerStatus::Ready
    }

    /// Let camera frames through to the classifier
    pub fn start(&mut self) -> Result<(), MorphicError> {
        if !self.is_initialized() {
            return Err(MorphicError::NotInitialized);
        }
        if !self.tracking {
            self.tracking = true;
            info!("tracking started");
        }
        Ok(())
    }

    /// Stop feeding frames. Gesture history is kept.
    pub fn stop(&mut self) {
        if self.tracking {
            self.tracking = false;
            info!("tracking stopped");
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Run one camera frame through classify + stabilize.
    ///
    /// `hand` is `None` when the backend saw no hand. Returns `None` when the
    /// frame was gated (not initialized or not tracking).
    pub fn process_frame(&mut self, hand: Option<&LandmarkSet>) -> Option<GestureJudgment> {
        if !self.tracking || !self.is_initialized() {
            return None;
        }

        let raw = match hand {
            Some(landmarks) => classify(landmarks),
            None => GestureJudgment::no_hand(),
        };
        let judgment = self.stabilizer.stabilize(raw);
        self.last = judgment.clone();
        Some(judgment)
    }

    pub fn last_gesture(&self) -> &GestureJudgment {
        &self.last
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
