//! App state and JS entry points
//!
//! JS owns the camera and the MediaPipe Hands instance. It reports backend
//! initialization, forwards landmark frames, toggles tracking and reads back
//! gesture reports, scene snapshots and geometry.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::render_loop::RenderLoop;
use crate::app::MorphicApp;
use crate::classifier::GestureJudgment;
use crate::config::{SceneConfig, TrackerConfig};
use crate::error::MorphicError;
use crate::hand::{LandmarkSet, HAND_SKELETON};
use crate::renderer::{MeshRenderer, VertexLayoutInfo};
use crate::scene::ControlUpdate;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static APP: RefCell<Option<MorphicApp<MeshRenderer>>> = const { RefCell::new(None) };
    static RENDER_LOOP: RefCell<Option<RenderLoop>> = const { RefCell::new(None) };
}

/// Gesture indicator payload
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GestureReport {
    #[serde(rename = "type")]
    gesture: &'static str,
    label: &'static str,
    confidence: f32,
    quality: &'static str,
    shape: Option<&'static str>,
}

impl From<&GestureJudgment> for GestureReport {
    fn from(judgment: &GestureJudgment) -> Self {
        Self {
            gesture: judgment.gesture.as_str(),
            label: judgment.gesture.label(),
            confidence: judgment.confidence,
            quality: judgment.quality().as_str(),
            shape: judgment.gesture.shape().map(|s| s.as_str()),
        }
    }
}

fn with_app<T>(f: impl FnOnce(&mut MorphicApp<MeshRenderer>) -> T) -> Result<T, MorphicError> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f).ok_or(MorphicError::Disposed))
}

fn config_or_default<T>(value: JsValue) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Build the scene and start the render loop. Either config may be undefined.
#[wasm_bindgen]
pub fn create_scene(tracker_config: JsValue, scene_config: JsValue) -> Result<(), JsValue> {
    let tracker: TrackerConfig = config_or_default(tracker_config)?;
    let scene: SceneConfig = config_or_default(scene_config)?;
    let app = MorphicApp::new(tracker, scene, MeshRenderer::new()).map_err(|e| {
        tracing::warn!(error = %e, "rejecting scene config");
        e
    })?;

    dispose();
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    let render_loop = RenderLoop::start(|time| {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app.render_tick(time);
            }
        });
    })?;
    RENDER_LOOP.with(|cell| *cell.borrow_mut() = Some(render_loop));
    Ok(())
}

/// Options JS should pass to the MediaPipe Hands instance
#[wasm_bindgen]
pub fn detector_options() -> Result<JsValue, JsValue> {
    let options = with_app(|app| app.session().config().detector.clone())?;
    to_js(&options)
}

/// Await the backend's async initializer and record the outcome.
///
/// If `create_scene` replaced the app while the initializer was pending, the
/// outcome is dropped with `StaleInitialization`.
#[wasm_bindgen]
pub async fn initialize_tracker(init: js_sys::Function) -> Result<(), JsValue> {
    let ticket = with_app(|app| app.session_mut().begin_initialization())?;
    let outcome = match init.call0(&JsValue::NULL) {
        Ok(value) => JsFuture::from(js_sys::Promise::resolve(&value))
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e)),
        Err(e) => Err(format!("{:?}", e)),
    };

    with_app(|app| app.session_mut().finish_initialization(ticket, outcome))??;
    Ok(())
}

/// Stop the render loop and release geometry. Safe to call more than once.
#[wasm_bindgen]
pub fn dispose() {
    RENDER_LOOP.with(|cell| {
        if let Some(mut render_loop) = cell.borrow_mut().take() {
            render_loop.stop();
        }
    });
    APP.with(|cell| {
        if let Some(mut app) = cell.borrow_mut().take() {
            app.dispose();
        }
    });
}

// ============================================================================
// TRACKING
// ============================================================================

/// Start/stop toggle; returns the resulting tracking state
#[wasm_bindgen]
pub fn set_tracking(enabled: bool) -> Result<bool, JsValue> {
    Ok(with_app(|app| app.set_tracking(enabled))??)
}

/// Called from JavaScript with a flat Float32Array (num_hands × 21 × xyz).
///
/// Returns the stabilized gesture report, or `undefined` if tracking is off.
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) -> Result<JsValue, JsValue> {
    let hand = LandmarkSet::first_from_flat(flat_data, num_hands).map_err(|e| {
        tracing::warn!(error = %e, "dropping landmark frame");
        e
    })?;

    match with_app(|app| app.process_frame(hand.as_ref()))? {
        Some(judgment) => to_js(&GestureReport::from(&judgment)),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Latest stabilized gesture
#[wasm_bindgen]
pub fn get_gesture() -> Result<JsValue, JsValue> {
    let report = with_app(|app| GestureReport::from(app.session().last_gesture()))?;
    to_js(&report)
}

/// Hand skeleton as flat index pairs, for overlay drawing
#[wasm_bindgen]
pub fn hand_skeleton() -> Vec<u32> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}

// ============================================================================
// SCENE
// ============================================================================

/// Partial target update `{ shapeType?, size?, color?, rotation? }`
#[wasm_bindgen]
pub fn update_controls(update: JsValue) -> Result<(), JsValue> {
    let update: ControlUpdate = config_or_default(update)?;
    with_app(|app| app.update_controls(&update))?;
    Ok(())
}

/// Current (interpolated) scene state
#[wasm_bindgen]
pub fn get_scene_snapshot() -> Result<JsValue, JsValue> {
    let snapshot = with_app(|app| app.scene().snapshot())?;
    to_js(&snapshot)
}

/// Increments whenever geometry was rebuilt
#[wasm_bindgen]
pub fn geometry_generation() -> Result<u32, JsValue> {
    Ok(with_app(|app| app.scene().renderer().generation())?)
}

#[wasm_bindgen]
pub fn shape_body_vertices() -> Result<Vec<f32>, JsValue> {
    Ok(with_app(|app| app.scene().renderer().body_floats())?)
}

#[wasm_bindgen]
pub fn shape_glow_vertices() -> Result<Vec<f32>, JsValue> {
    Ok(with_app(|app| app.scene().renderer().glow_floats())?)
}

/// Stride, step mode and attribute offsets of the vertex buffers above,
/// ready to drop into a `GPUVertexBufferLayout`
#[wasm_bindgen]
pub fn vertex_layout() -> Result<JsValue, JsValue> {
    to_js(&VertexLayoutInfo::for_vertex())
}

/// Packed `ShapeUniforms` for this frame (16 floats)
#[wasm_bindgen]
pub fn shape_uniforms() -> Result<Vec<f32>, JsValue> {
    Ok(with_app(|app| app.scene().renderer().uniform_floats())?)
}
