//! Animatable shape parameters
//!
//! The same struct holds both the gesture-driven target and the per-frame
//! current value. Scene math is f64 so rotation accumulators stay exact over
//! long sessions.

use serde::{Deserialize, Serialize};

/// Linear interpolation from `start` towards `end`
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Renderable shape kinds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Sphere,
    Cube,
    Cone,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cone => "cone",
        }
    }
}

/// RGB color, channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    pub fn lerp(self, target: Rgb, factor: f64) -> Self {
        Self {
            r: lerp(self.r, target.r, factor),
            g: lerp(self.g, target.g, factor),
            b: lerp(self.b, target.b, factor),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

/// Euler rotation in radians, unbounded
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(self, target: Rotation, factor: f64) -> Self {
        Self {
            x: lerp(self.x, target.x, factor),
            y: lerp(self.y, target.y, factor),
            z: lerp(self.z, target.z, factor),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

/// One full set of shape parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeControls {
    pub shape_type: ShapeKind,
    pub size: f64,
    pub color: Rgb,
    pub rotation: Rotation,
}

impl ShapeControls {
    /// Step the continuous parameters towards `target`.
    ///
    /// Shape kind is left alone; it only changes through a transition swap.
    pub fn advance_toward(&mut self, target: &ShapeControls, factor: f64) {
        self.size = lerp(self.size, target.size, factor);
        self.color = self.color.lerp(target.color, factor);
        self.rotation = self.rotation.lerp(target.rotation, factor);
    }
}

impl ShapeControls {
    /// Assign the fields present in `update`.
    ///
    /// Size is clamped to `[min_size, max_size]`, color channels to [0, 1].
    /// A non-finite size is ignored.
    pub fn apply_update(&mut self, update: &ControlUpdate, min_size: f64, max_size: f64) {
        if let Some(shape_type) = update.shape_type {
            self.shape_type = shape_type;
        }
        if let Some(size) = update.size.filter(|size| size.is_finite()) {
            self.size = size.clamp(min_size, max_size);
        }
        if let Some(color) = update.color {
            self.color = color.clamped();
        }
        if let Some(rotation) = update.rotation {
            self.rotation = rotation;
        }
    }
}

impl Default for ShapeControls {
    fn default() -> Self {
        Self {
            shape_type: ShapeKind::Sphere,
            size: 1.0,
            color: Rgb::new(0.0, 0.8, 1.0),
            rotation: Rotation::default(),
        }
    }
}

/// Partial update of target parameters; `None` fields are left unchanged
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlUpdate {
    pub shape_type: Option<ShapeKind>,
    pub size: Option<f64>,
    pub color: Option<Rgb>,
    pub rotation: Option<Rotation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_never_reaches_target() {
        let mut current = 0.0;
        for _ in 0..200 {
            let next = lerp(current, 1.0, 0.1);
            assert!(next > current);
            assert!(next < 1.0);
            current = next;
        }
        assert!(1.0 - current < 1e-9);
    }

    #[test]
    fn test_lerp_approaches_from_above() {
        let mut current = 3.0;
        for _ in 0..50 {
            let next = lerp(current, 0.5, 0.1);
            assert!(next < current && next > 0.5);
            current = next;
        }
    }

    #[test]
    fn test_advance_keeps_shape_kind() {
        let mut current = ShapeControls::default();
        let target = ShapeControls {
            shape_type: ShapeKind::Cone,
            size: 2.0,
            color: Rgb::new(1.0, 0.0, 0.0),
            rotation: Rotation::new(1.0, 2.0, 3.0),
        };
        current.advance_toward(&target, 0.1);

        assert_eq!(current.shape_type, ShapeKind::Sphere);
        assert_abs_diff_eq!(current.size, 1.1, epsilon = 1e-12);
        assert_abs_diff_eq!(current.color.r, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(current.color.g, 0.72, epsilon = 1e-12);
        assert_abs_diff_eq!(current.rotation.z, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_update_clamps_size() {
        let mut target = ShapeControls::default();
        target.apply_update(&ControlUpdate { size: Some(7.0), ..Default::default() }, 0.5, 3.0);
        assert_eq!(target.size, 3.0);
        target.apply_update(&ControlUpdate { size: Some(0.1), ..Default::default() }, 0.5, 3.0);
        assert_eq!(target.size, 0.5);
    }

    #[test]
    fn test_apply_update_partial() {
        let mut target = ShapeControls::default();
        let update = ControlUpdate {
            shape_type: Some(ShapeKind::Cube),
            ..Default::default()
        };
        target.apply_update(&update, 0.5, 3.0);
        assert_eq!(target.shape_type, ShapeKind::Cube);
        assert_eq!(target.size, 1.0);
        assert_eq!(target.color, ShapeControls::default().color);
    }

    #[test]
    fn test_rgb_clamped() {
        let color = Rgb::new(1.5, -0.2, 0.4).clamped();
        assert_eq!(color, Rgb::new(1.0, 0.0, 0.4));
    }
}
