#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in the pad's local coordinate space (CSS pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The top-left corner of the pad; also the "never laid out" center.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width and height of a rectangular region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum of two sizes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// The point halfway across both axes.
    #[must_use]
    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pull `target` toward `center` so it lies within `radius` of it.
///
/// Points already inside the disk are returned unchanged. A target sitting
/// exactly on the center keeps a scale of 1.0 rather than dividing by zero.
#[must_use]
pub fn clamp_to_disk(target: Point, center: Point, radius: f64) -> Point {
    let tx = target.x - center.x;
    let ty = target.y - center.y;
    let touch_radius = tx.hypot(ty);
    let scale = if touch_radius > radius { radius / touch_radius } else { 1.0 };
    Point {
        x: center.x + tx * scale,
        y: center.y + ty * scale,
    }
}
