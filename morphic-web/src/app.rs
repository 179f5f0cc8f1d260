//! Morphic app - tracking session wired to the scene controller
//!
//! Camera frames and render frames arrive on independent clocks. Each
//! stabilized gesture from `process_frame` becomes one target update; each
//! `render_tick` advances the animation. Stopping tracking only halts the
//! former.

use crate::classifier::GestureJudgment;
use crate::config::{SceneConfig, TrackerConfig};
use crate::error::MorphicError;
use crate::hand::LandmarkSet;
use crate::renderer::ShapeRenderer;
use crate::scene::{ControlUpdate, SceneController, SceneSnapshot};
use crate::tracking::TrackingSession;

pub struct MorphicApp<R: ShapeRenderer> {
    session: TrackingSession,
    scene: SceneController<R>,
}

impl<R: ShapeRenderer> MorphicApp<R> {
    /// Validates both configs; nothing is built if either is rejected
    pub fn new(
        tracker: TrackerConfig,
        scene: SceneConfig,
        renderer: R,
    ) -> Result<Self, MorphicError> {
        tracker.validate()?;
        Ok(Self {
            scene: SceneController::new(scene, renderer)?,
            session: TrackingSession::new(tracker),
        })
    }

    /// Camera frame callback: classify, stabilize, update the scene target
    pub fn process_frame(&mut self, hand: Option<&LandmarkSet>) -> Option<GestureJudgment> {
        let judgment = self.session.process_frame(hand)?;
        self.scene.on_gesture_event(&judgment);
        Some(judgment)
    }

    /// Render frame callback
    pub fn render_tick(&mut self, time: f64) -> Option<SceneSnapshot> {
        self.scene.on_render_tick(time)
    }

    /// Start/stop toggle. Returns the new tracking state.
    pub fn set_tracking(&mut self, enabled: bool) -> Result<bool, MorphicError> {
        if enabled {
            self.session.start()?;
        } else {
            self.session.stop();
        }
        Ok(self.session.is_tracking())
    }

    pub fn update_controls(&mut self, update: &ControlUpdate) {
        self.scene.update_controls(update);
    }

    pub fn dispose(&mut self) {
        self.session.stop();
        self.scene.dispose();
    }

    pub fn session(&self) -> &TrackingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TrackingSession {
        &mut self.session
    }

    pub fn scene(&self) -> &SceneController<R> {
        &self.scene
    }
}
