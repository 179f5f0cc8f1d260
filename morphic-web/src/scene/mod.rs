//! Scene module - target/current shape state and shape transitions
//!
//! Re-exports only. All logic in submodules.

mod controls;
mod controller;
mod reaction;
mod transition;

pub use controls::{lerp, ControlUpdate, Rgb, Rotation, ShapeControls, ShapeKind};
pub use controller::{SceneController, SceneSnapshot};
pub use reaction::apply_gesture_event;
pub use transition::{TransitionSequencer, TransitionTick, SHIMMER_AMPLITUDE};
