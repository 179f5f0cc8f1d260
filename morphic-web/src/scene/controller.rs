//! Scene controller - owns target/current state and the transition sequencer
//!
//! Two entry points with disjoint write sets:
//! - `on_gesture_event` / `update_controls` write `target` only.
//! - `on_render_tick` writes `current` and the transition state only,
//!   reading `target`.

use serde::Serialize;
use tracing::info;

use super::controls::{ControlUpdate, Rgb, Rotation, ShapeControls, ShapeKind};
use super::reaction::apply_gesture_event;
use super::transition::{TransitionSequencer, TransitionTick, SHIMMER_AMPLITUDE};
use crate::classifier::GestureJudgment;
use crate::config::SceneConfig;
use crate::error::MorphicError;
use crate::renderer::ShapeRenderer;

/// Read-only view of the current scene state, published every render tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub shape_type: ShapeKind,
    pub size: f64,
    pub color: Rgb,
    pub rotation: Rotation,
    pub transition_progress: f64,
    pub shimmer: f64,
    pub is_transitioning: bool,
    /// Render clock in seconds, for time-based shader effects
    pub time: f64,
}

/// Gesture-driven shape animation state
pub struct SceneController<R: ShapeRenderer> {
    config: SceneConfig,
    target: ShapeControls,
    current: ShapeControls,
    sequencer: TransitionSequencer,
    renderer: R,
    time: f64,
    disposed: bool,
}

impl<R: ShapeRenderer> SceneController<R> {
    /// Create the scene and acquire geometry for the initial shape.
    ///
    /// Fails with `InvalidConfig` before touching the renderer.
    pub fn new(config: SceneConfig, mut renderer: R) -> Result<Self, MorphicError> {
        config.validate()?;
        let mut initial = config.initial;
        initial.size = initial.size.clamp(config.min_size, config.max_size);
        renderer.acquire(initial.shape_type);

        Ok(Self {
            sequencer: TransitionSequencer::new(config.transition_step),
            target: initial,
            current: initial,
            renderer,
            time: 0.0,
            disposed: false,
            config,
        })
    }

    // ========================================================================
    // GESTURE SIDE (writes target)
    // ========================================================================

    /// Apply one stabilized gesture sample. Returns whether the target changed.
    pub fn on_gesture_event(&mut self, gesture: &GestureJudgment) -> bool {
        if self.disposed {
            return false;
        }
        apply_gesture_event(gesture, &mut self.target, &self.config)
    }

    /// Set target fields directly; size is clamped to the configured range
    pub fn update_controls(&mut self, update: &ControlUpdate) {
        if self.disposed {
            return;
        }
        self.target.apply_update(update, self.config.min_size, self.config.max_size);
    }

    // ========================================================================
    // RENDER SIDE (writes current)
    // ========================================================================

    /// Advance one render frame. `time` is the render clock in seconds.
    ///
    /// Returns `None` once the scene is disposed.
    pub fn on_render_tick(&mut self, time: f64) -> Option<SceneSnapshot> {
        if self.disposed {
            return None;
        }
        self.time = time;

        let mismatch = self.target.shape_type != self.current.shape_type;
        let tick = self.sequencer.tick(mismatch);
        if let TransitionTick::Swap(_) = tick {
            let from = self.current.shape_type;
            self.renderer.acquire(self.target.shape_type);
            self.current.shape_type = self.target.shape_type;
            info!(from = from.as_str(), to = self.current.shape_type.as_str(), "shape swapped");
        }

        self.current.advance_toward(&self.target, self.config.lerp_factor);

        // the swap frame still draws at full progress
        let snapshot = match tick {
            TransitionTick::Swap(progress) => {
                self.snapshot_at(progress, SHIMMER_AMPLITUDE * progress)
            }
            _ => self.snapshot(),
        };
        self.renderer.draw(&snapshot);
        Some(snapshot)
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.snapshot_at(self.sequencer.progress(), self.sequencer.shimmer())
    }

    fn snapshot_at(&self, progress: f64, shimmer: f64) -> SceneSnapshot {
        SceneSnapshot {
            shape_type: self.current.shape_type,
            size: self.current.size,
            color: self.current.color,
            rotation: self.current.rotation,
            transition_progress: progress,
            shimmer,
            is_transitioning: self.sequencer.is_transitioning(),
            time: self.time,
        }
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Release renderer resources. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.renderer.release();
        self.sequencer.reset();
        self.disposed = true;
        info!("scene disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn target(&self) -> &ShapeControls {
        &self.target
    }

    pub fn current(&self) -> &ShapeControls {
        &self.current
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::GestureType;

    /// Records renderer calls
    #[derive(Default)]
    struct RecordingRenderer {
        acquired: Vec<ShapeKind>,
        draws: usize,
        releases: usize,
    }

    impl ShapeRenderer for RecordingRenderer {
        fn acquire(&mut self, kind: ShapeKind) {
            self.acquired.push(kind);
        }

        fn draw(&mut self, _snapshot: &SceneSnapshot) {
            self.draws += 1;
        }

        fn release(&mut self) {
            self.releases += 1;
        }
    }

    fn controller() -> SceneController<RecordingRenderer> {
        SceneController::new(SceneConfig::default(), RecordingRenderer::default()).unwrap()
    }

    fn gesture(kind: GestureType) -> GestureJudgment {
        GestureJudgment::new(kind, 0.9, None)
    }

    #[test]
    fn test_initial_state() {
        let scene = controller();
        assert_eq!(scene.renderer().acquired, vec![ShapeKind::Sphere]);
        assert_eq!(scene.current(), scene.target());
        assert_eq!(scene.current().color, Rgb::new(0.0, 0.8, 1.0));
    }

    #[test]
    fn test_gesture_writes_target_only() {
        let mut scene = controller();
        assert!(scene.on_gesture_event(&gesture(GestureType::ClosedFist)));
        assert_eq!(scene.target().shape_type, ShapeKind::Cube);
        assert_eq!(*scene.current(), ShapeControls::default());
    }

    #[test]
    fn test_swap_after_twenty_ticks() {
        let mut scene = controller();
        scene.on_gesture_event(&gesture(GestureType::Pointing));

        for tick in 1..20 {
            let snapshot = scene.on_render_tick(tick as f64 / 60.0).unwrap();
            assert_eq!(snapshot.shape_type, ShapeKind::Sphere);
            assert!(snapshot.is_transitioning);
        }
        let snapshot = scene.on_render_tick(20.0 / 60.0).unwrap();
        assert_eq!(snapshot.shape_type, ShapeKind::Cone);
        assert!(!snapshot.is_transitioning);
        assert_eq!(snapshot.transition_progress, 1.0);
        assert_eq!(snapshot.shimmer, SHIMMER_AMPLITUDE);
        // sequencer itself is back to idle
        assert_eq!(scene.snapshot().transition_progress, 0.0);
        assert_eq!(scene.renderer().acquired, vec![ShapeKind::Sphere, ShapeKind::Cone]);

        // no further swaps once kinds match
        for _ in 0..40 {
            scene.on_render_tick(1.0);
        }
        assert_eq!(scene.renderer().acquired.len(), 2);
    }

    #[test]
    fn test_retarget_mid_transition_keeps_progress() {
        let mut scene = controller();
        scene.on_gesture_event(&gesture(GestureType::ClosedFist));
        for _ in 0..10 {
            scene.on_render_tick(0.0);
        }
        // switch destination; the in-flight transition is not restarted
        scene.on_gesture_event(&gesture(GestureType::Pointing));
        for _ in 0..9 {
            scene.on_render_tick(0.0);
        }
        let snapshot = scene.on_render_tick(0.0).unwrap();
        assert_eq!(snapshot.shape_type, ShapeKind::Cone);
        assert_eq!(scene.renderer().acquired, vec![ShapeKind::Sphere, ShapeKind::Cone]);
    }

    #[test]
    fn test_interpolation_runs_during_transition() {
        let mut scene = controller();
        scene.on_gesture_event(&gesture(GestureType::OpenPalm));
        scene.update_controls(&ControlUpdate {
            shape_type: Some(ShapeKind::Cube),
            ..Default::default()
        });
        let before = scene.current().size;
        let snapshot = scene.on_render_tick(0.0).unwrap();
        assert!(snapshot.is_transitioning);
        assert!(snapshot.size > before);
        assert!(snapshot.shimmer > 0.0);
    }

    #[test]
    fn test_none_gesture_ignored() {
        let mut scene = controller();
        assert!(!scene.on_gesture_event(&GestureJudgment::no_hand()));
        assert_eq!(*scene.target(), ShapeControls::default());
    }

    #[test]
    fn test_dispose_idempotent() {
        let mut scene = controller();
        scene.dispose();
        scene.dispose();
        assert_eq!(scene.renderer().releases, 1);
        assert!(scene.on_render_tick(0.0).is_none());
        assert!(!scene.on_gesture_event(&gesture(GestureType::OpenPalm)));
        assert_eq!(scene.renderer().draws, 0);
    }

    #[test]
    fn test_initial_size_clamped() {
        let config = SceneConfig {
            initial: ShapeControls {
                size: 9.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let scene = SceneController::new(config, RecordingRenderer::default()).unwrap();
        assert_eq!(scene.target().size, 3.0);
    }

    #[test]
    fn test_invalid_bounds_rejected_without_acquire() {
        let config = SceneConfig {
            min_size: 3.0,
            max_size: 0.5,
            ..Default::default()
        };
        let result = SceneController::new(config, RecordingRenderer::default());
        assert!(matches!(result, Err(MorphicError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_size_update_ignored() {
        let mut scene = controller();
        scene.update_controls(&ControlUpdate {
            size: Some(f64::NAN),
            ..Default::default()
        });
        assert_eq!(scene.target().size, 1.0);
    }
}
