//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod app_state;
mod render_loop;

pub use app_state::{
    // Lifecycle
    create_scene,
    detector_options,
    initialize_tracker,
    dispose,
    // Tracking
    set_tracking,
    apply_hand_landmarks,
    get_gesture,
    hand_skeleton,
    // Scene
    update_controls,
    get_scene_snapshot,
    geometry_generation,
    shape_body_vertices,
    shape_glow_vertices,
    shape_uniforms,
    vertex_layout,
};
