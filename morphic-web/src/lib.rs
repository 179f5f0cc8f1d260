//! Morphic Web - gesture-controlled 3D shapes
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - The wasm_bindgen start hook
//!
//! Data flow: landmarks (JS) → `classifier` → stabilizer → `scene` target →
//! per-frame interpolation + shape transition → `renderer` → JS draws.

pub mod app;
pub mod classifier;
pub mod config;
pub mod error;
pub mod hand;
pub mod renderer;
pub mod scene;
pub mod tracking;

mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    apply_hand_landmarks, create_scene, detector_options, dispose, geometry_generation,
    get_gesture, get_scene_snapshot, hand_skeleton, initialize_tracker, set_tracking,
    shape_body_vertices, shape_glow_vertices, shape_uniforms, update_controls, vertex_layout,
};

pub use app::MorphicApp;
pub use error::MorphicError;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    web_sys::console::log_1(&"✅ Morphic Web loaded".into());
}
