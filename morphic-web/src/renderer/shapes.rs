//! Shape primitives - procedural meshes for sphere, cube and cone
//!
//! All meshes are non-indexed triangle lists centered on the origin, with
//! per-vertex normals for the fresnel glow shader.

use std::f32::consts::{PI, TAU};

use serde::Serialize;

use crate::scene::ShapeKind;

/// Vertex structure for lit shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

// ============================================================================
// LAYOUT EXPORT
// ============================================================================

/// `Vertex::desc()` in the shape of a WebGPU `GPUVertexBufferLayout`, so the
/// JS pipeline reads stride and offsets instead of hard-coding them
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexLayoutInfo {
    pub array_stride: u64,
    pub step_mode: &'static str,
    pub attributes: Vec<VertexAttributeInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexAttributeInfo {
    pub format: &'static str,
    pub offset: u64,
    pub shader_location: u32,
}

impl VertexLayoutInfo {
    pub fn from_layout(layout: &wgpu::VertexBufferLayout<'_>) -> Self {
        Self {
            array_stride: layout.array_stride,
            step_mode: match layout.step_mode {
                wgpu::VertexStepMode::Vertex => "vertex",
                wgpu::VertexStepMode::Instance => "instance",
            },
            attributes: layout
                .attributes
                .iter()
                .map(|attr| VertexAttributeInfo {
                    format: web_format(attr.format),
                    offset: attr.offset,
                    shader_location: attr.shader_location,
                })
                .collect(),
        }
    }

    /// Layout of `Vertex`
    pub fn for_vertex() -> Self {
        Self::from_layout(&Vertex::desc())
    }
}

/// WebGPU spelling of the float formats our vertices use
fn web_format(format: wgpu::VertexFormat) -> &'static str {
    match format {
        wgpu::VertexFormat::Float32 => "float32",
        wgpu::VertexFormat::Float32x2 => "float32x2",
        wgpu::VertexFormat::Float32x3 => "float32x3",
        wgpu::VertexFormat::Float32x4 => "float32x4",
        _ => "unsupported",
    }
}

/// Body + glow shell for one shape kind
#[derive(Clone, Debug)]
pub struct ShapeMesh {
    pub kind: ShapeKind,
    pub body: Vec<Vertex>,
    /// Slightly larger shell drawn back-faced with additive blending
    pub glow: Vec<Vertex>,
}

impl ShapeMesh {
    pub fn build(kind: ShapeKind) -> Self {
        let (body, glow) = match kind {
            ShapeKind::Sphere => (
                create_sphere_vertices(1.0, 64, 64),
                create_sphere_vertices(1.2, 32, 32),
            ),
            ShapeKind::Cube => (
                create_box_vertices(1.5, 32),
                create_box_vertices(1.8, 16),
            ),
            ShapeKind::Cone => (
                create_cone_vertices(1.0, 2.0, 32, 32),
                create_cone_vertices(1.2, 2.4, 16, 16),
            ),
        };
        Self { kind, body, glow }
    }
}

/// Push a quad (a, b, c, d counter-clockwise) as two triangles
fn push_quad(out: &mut Vec<Vertex>, quad: [Vertex; 4]) {
    let [a, b, c, d] = quad;
    out.extend_from_slice(&[a, b, c, a, c, d]);
}

/// Generate vertices for a UV sphere
pub fn create_sphere_vertices(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> Vec<Vertex> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let point = |i: u32, j: u32| {
        let u = i as f32 / w as f32 * TAU;
        let v = j as f32 / h as f32 * PI;
        let normal = [-u.cos() * v.sin(), v.cos(), u.sin() * v.sin()];
        Vertex {
            position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
            normal,
        }
    };

    let mut vertices = Vec::with_capacity((w * h * 6) as usize);
    for j in 0..h {
        for i in 0..w {
            push_quad(
                &mut vertices,
                [point(i, j), point(i, j + 1), point(i + 1, j + 1), point(i + 1, j)],
            );
        }
    }
    vertices
}

/// Generate vertices for an axis-aligned cube with `segments` subdivisions per face edge
pub fn create_box_vertices(size: f32, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(1);
    let half = size / 2.0;

    // (normal, u axis, v axis) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity((6 * segments * segments * 6) as usize);
    for (normal, u_axis, v_axis) in faces {
        let point = |i: u32, j: u32| {
            let u = (i as f32 / segments as f32 - 0.5) * size;
            let v = (j as f32 / segments as f32 - 0.5) * size;
            let position =
                std::array::from_fn(|k| normal[k] * half + u_axis[k] * u + v_axis[k] * v);
            Vertex { position, normal }
        };

        for j in 0..segments {
            for i in 0..segments {
                push_quad(
                    &mut vertices,
                    [point(i, j), point(i + 1, j), point(i + 1, j + 1), point(i, j + 1)],
                );
            }
        }
    }
    vertices
}

/// Generate vertices for a cone standing on the xz plane, apex at `+height / 2`
pub fn create_cone_vertices(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> Vec<Vertex> {
    let radial = radial_segments.max(3);
    let rows = height_segments.max(1);
    let half = height / 2.0;
    // slope of the side normal
    let slope = radius / height;

    let side = |i: u32, j: u32| {
        let theta = i as f32 / radial as f32 * TAU;
        let t = j as f32 / rows as f32; // 0 at apex, 1 at base
        let r = radius * t;
        let (sin, cos) = theta.sin_cos();
        let n = [sin, slope, cos];
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        Vertex {
            position: [r * sin, half - t * height, r * cos],
            normal: [n[0] / len, n[1] / len, n[2] / len],
        }
    };

    let mut vertices = Vec::with_capacity((radial * rows * 6 + radial * 3) as usize);
    for j in 0..rows {
        for i in 0..radial {
            push_quad(
                &mut vertices,
                [side(i, j), side(i, j + 1), side(i + 1, j + 1), side(i + 1, j)],
            );
        }
    }

    // base cap
    let down = [0.0, -1.0, 0.0];
    let rim = |angle: f32| Vertex {
        position: [radius * angle.sin(), -half, radius * angle.cos()],
        normal: down,
    };
    let center = Vertex {
        position: [0.0, -half, 0.0],
        normal: down,
    };
    for i in 0..radial {
        let a = i as f32 / radial as f32 * TAU;
        let b = (i + 1) as f32 / radial as f32 * TAU;
        vertices.push(center);
        vertices.push(rim(b));
        vertices.push(rim(a));
    }
    vertices
}
