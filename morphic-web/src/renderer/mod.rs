//! Renderer module - geometry and uniforms handed to the JS renderer
//!
//! Re-exports only. All logic in submodules.

mod geometry;
mod shapes;

pub use geometry::{MeshRenderer, ShapeRenderer, ShapeUniforms, GLOW_INTENSITY};
pub use shapes::{
    create_box_vertices, create_cone_vertices, create_sphere_vertices, ShapeMesh, Vertex,
    VertexAttributeInfo, VertexLayoutInfo,
};
