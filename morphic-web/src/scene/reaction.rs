//! Gesture → target reaction table
//!
//! Each confirmed gesture sample nudges the target by a small delta from its
//! present value, so holding a gesture makes the shape drift continuously.
//!
//! | Gesture     | Shape  | Size               | Color drift             | Rotation         |
//! |-------------|--------|--------------------|-------------------------|------------------|
//! | open palm   | sphere | +0.03, max 2.5     | r +0.025, g/b -0.015    | -                |
//! | closed fist | cube   | -0.025, min 0.6    | r/g -0.015, b +0.025    | -                |
//! | pointing    | cone   | fixed 1.2          | r/b -0.01, g +0.02      | +0.08/0.05/0.03  |

use super::controls::{ControlUpdate, Rgb, Rotation, ShapeControls, ShapeKind};
use crate::classifier::{GestureJudgment, GestureType};
use crate::config::SceneConfig;

const GROW_STEP: f64 = 0.03;
const GROW_LIMIT: f64 = 2.5;
const SHRINK_STEP: f64 = 0.025;
const SHRINK_LIMIT: f64 = 0.6;
const POINTING_SIZE: f64 = 1.2;

/// Per-sample rotation increment while pointing
const SPIN_STEP: Rotation = Rotation::new(0.08, 0.05, 0.03);

/// Target change for one gesture sample, or `None` for no gesture
pub fn gesture_update(gesture: GestureType, target: &ShapeControls) -> Option<ControlUpdate> {
    let c = target.color;

    let update = match gesture {
        GestureType::OpenPalm => ControlUpdate {
            shape_type: Some(ShapeKind::Sphere),
            size: Some((target.size + GROW_STEP).min(GROW_LIMIT)),
            color: Some(Rgb::new(
                (c.r + 0.025).min(1.0),
                (c.g - 0.015).max(0.0),
                (c.b - 0.015).max(0.0),
            )),
            rotation: None,
        },
        GestureType::ClosedFist => ControlUpdate {
            shape_type: Some(ShapeKind::Cube),
            size: Some((target.size - SHRINK_STEP).max(SHRINK_LIMIT)),
            color: Some(Rgb::new(
                (c.r - 0.015).max(0.0),
                (c.g - 0.015).max(0.0),
                (c.b + 0.025).min(1.0),
            )),
            rotation: None,
        },
        GestureType::Pointing => ControlUpdate {
            shape_type: Some(ShapeKind::Cone),
            size: Some(POINTING_SIZE),
            color: Some(Rgb::new(
                (c.r - 0.01).max(0.0),
                (c.g + 0.02).min(1.0),
                (c.b - 0.01).max(0.0),
            )),
            rotation: Some(Rotation::new(
                target.rotation.x + SPIN_STEP.x,
                target.rotation.y + SPIN_STEP.y,
                target.rotation.z + SPIN_STEP.z,
            )),
        },
        GestureType::None => return None,
    };

    Some(update)
}

/// Apply one stabilized gesture sample to `target`.
///
/// Returns `false` (and leaves `target` alone) for `GestureType::None`.
pub fn apply_gesture_event(
    gesture: &GestureJudgment,
    target: &mut ShapeControls,
    config: &SceneConfig,
) -> bool {
    match gesture_update(gesture.gesture, target) {
        Some(update) => {
            target.apply_update(&update, config.min_size, config.max_size);
            true
        }
        None => false,
    }
}
