//! Room geometry: dimensions, derived wall planes, and room-local points.
//!
//! The room is centered on the origin: x spans `-width/2 ..= +width/2` (left
//! wall to right wall), z spans `-depth/2 ..= +depth/2` (back wall to front
//! opening), and y is height off the floor. All values are millimeters.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};

/// A point in room-local space, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin, used as the initial preview position for template drags.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Whether all three coordinates are finite numbers. Pointer-ray
    /// intersections can produce NaN/infinity when the ray runs parallel to
    /// the drag plane; such samples are dropped at the engine boundary.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Room dimensions in millimeters.
///
/// Owned by the project-level collaborator and immutable for the duration of
/// an editing session. Dimensions are assumed positive; a non-positive
/// dimension yields a degenerate wall set and is an upstream caller error,
/// not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub width_mm: f64,
    pub depth_mm: f64,
    pub height_mm: f64,
}

impl Room {
    #[must_use]
    pub fn new(width_mm: f64, depth_mm: f64, height_mm: f64) -> Self {
        Self { width_mm, depth_mm, height_mm }
    }

    /// Derive the four wall planes for this room.
    #[must_use]
    pub fn walls(&self) -> WallSet {
        WallSet {
            left: -self.width_mm / 2.0,
            right: self.width_mm / 2.0,
            back: -self.depth_mm / 2.0,
            front: self.depth_mm / 2.0,
        }
    }
}

impl Default for Room {
    /// Starter room shown before the host configures the project:
    /// 4.0 × 3.0 m floor, 2.5 m ceiling.
    fn default() -> Self {
        Self::new(4000.0, 3000.0, 2500.0)
    }
}

/// The four wall planes of a room: x positions for left/right, z positions
/// for back/front. Recomputed from [`Room`] on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSet {
    pub left: f64,
    pub right: f64,
    pub back: f64,
    pub front: f64,
}
