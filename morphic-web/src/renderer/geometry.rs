//! Rendering collaborator seam - geometry lifecycle and per-frame uniforms
//!
//! The scene core never touches GPU objects. It tells a `ShapeRenderer`
//! when to acquire geometry for a shape kind, hands it a snapshot every
//! frame, and releases it on dispose.

use tracing::debug;

use super::shapes::{ShapeMesh, Vertex};
use crate::scene::{SceneSnapshot, ShapeKind};

/// Base fresnel glow strength
pub const GLOW_INTENSITY: f32 = 1.5;

/// Per-frame shader inputs, laid out as four vec4s
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeUniforms {
    /// rgb + glow intensity
    pub color: [f32; 4],
    /// xyz euler radians + uniform scale
    pub transform: [f32; 4],
    /// time (s), transition progress, shimmer, unused
    pub params: [f32; 4],
    _pad: [f32; 4],
}

impl ShapeUniforms {
    pub fn from_snapshot(snapshot: &SceneSnapshot) -> Self {
        let [r, g, b] = snapshot.color.to_array();
        let [x, y, z] = snapshot.rotation.to_array();
        Self {
            color: [r, g, b, GLOW_INTENSITY],
            transform: [x, y, z, snapshot.size as f32],
            params: [
                snapshot.time as f32,
                snapshot.transition_progress as f32,
                snapshot.shimmer as f32,
                0.0,
            ],
            _pad: [0.0; 4],
        }
    }
}

/// Consumer of the scene state
pub trait ShapeRenderer {
    /// Build geometry for `kind`, releasing anything held before
    fn acquire(&mut self, kind: ShapeKind);

    /// Consume one frame of scene state
    fn draw(&mut self, snapshot: &SceneSnapshot);

    /// Drop all owned resources. Called at most once per acquire, but must
    /// tolerate repeated calls.
    fn release(&mut self);
}

/// CPU-side renderer: builds meshes and packs uniforms for upload by JS
#[derive(Default)]
pub struct MeshRenderer {
    mesh: Option<ShapeMesh>,
    uniforms: ShapeUniforms,
    /// Bumped on every acquire so JS knows to re-upload vertex buffers
    generation: u32,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self) -> Option<&ShapeMesh> {
        self.mesh.as_ref()
    }

    pub fn uniforms(&self) -> &ShapeUniforms {
        &self.uniforms
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Body vertices as raw floats (position xyz, normal xyz)
    pub fn body_floats(&self) -> Vec<f32> {
        self.mesh
            .as_ref()
            .map(|m| bytemuck::cast_slice::<Vertex, f32>(&m.body).to_vec())
            .unwrap_or_default()
    }

    pub fn glow_floats(&self) -> Vec<f32> {
        self.mesh
            .as_ref()
            .map(|m| bytemuck::cast_slice::<Vertex, f32>(&m.glow).to_vec())
            .unwrap_or_default()
    }

    pub fn uniform_floats(&self) -> Vec<f32> {
        bytemuck::cast_slice::<ShapeUniforms, f32>(std::slice::from_ref(&self.uniforms)).to_vec()
    }
}

impl ShapeRenderer for MeshRenderer {
    fn acquire(&mut self, kind: ShapeKind) {
        self.release();
        let mesh = ShapeMesh::build(kind);
        debug!(
            shape = kind.as_str(),
            body = mesh.body.len(),
            glow = mesh.glow.len(),
            "geometry acquired"
        );
        self.mesh = Some(mesh);
        self.generation = self.generation.wrapping_add(1);
    }

    fn draw(&mut self, snapshot: &SceneSnapshot) {
        self.uniforms = ShapeUniforms::from_snapshot(snapshot);
    }

    fn release(&mut self) {
        if let Some(mesh) = self.mesh.take() {
            debug!(shape = mesh.kind.as_str(), "geometry released");
        }
    }
}
