//! Hand landmark storage - 21 points in MediaPipe Hands order
//!
//! A `LandmarkSet` is produced once per processed camera frame and never
//! mutated afterwards. Decoding from the flat `Float32Array` layout used by
//! the JS side lives here as well.

use crate::error::MorphicError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand
pub const LANDMARK_COUNT: usize = 21;

/// Flat floats per hand (21 landmarks × x, y, z)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

/// Hand skeleton connections, used by the presentation layer for overlays
#[rustfmt::skip]
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark (normalized image coordinates, relative depth)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandLandmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance in the image plane (depth ignored)
    pub fn planar_distance(&self, other: &HandLandmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One hand's 21 landmarks in fixed anatomical order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Decode one hand from `[x0, y0, z0, x1, ...]`
    pub fn from_flat(data: &[f32]) -> Result<Self, MorphicError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(MorphicError::InvalidLandmarkData { len: data.len() });
        }

        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (point, xyz) in points.iter_mut().zip(data.chunks_exact(3)) {
            *point = HandLandmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Ok(Self { points })
    }

    /// Decode the first hand of a multi-hand flat buffer.
    ///
    /// Returns `Ok(None)` when `num_hands` is zero. Only one hand is tracked,
    /// any further hands in the buffer are ignored.
    pub fn first_from_flat(data: &[f32], num_hands: usize) -> Result<Option<Self>, MorphicError> {
        if num_hands == 0 {
            return Ok(None);
        }
        if data.len() % FLOATS_PER_HAND != 0 || data.len() < num_hands * FLOATS_PER_HAND {
            return Err(MorphicError::InvalidLandmarkData { len: data.len() });
        }
        Self::from_flat(&data[..FLOATS_PER_HAND]).map(Some)
    }

    pub fn get(&self, index: usize) -> &HandLandmark {
        &self.points[index]
    }

    pub fn points(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            points: [HandLandmark::default(); LANDMARK_COUNT],
        }
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = HandLandmark;

    fn index(&self, index: usize) -> &HandLandmark {
        &self.points[index]
    }
}
