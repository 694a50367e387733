//! Angle math and four-way direction classification.
//!
//! Angles are measured in degrees from the positive x axis in the range
//! `(-180, 180]`. Positions below the center (larger screen y) give positive
//! angles, positions above give negative ones, so a clockwise sweep on screen
//! reads Right → Down → Left → Up.

#[cfg(test)]
#[path = "direction_test.rs"]
mod direction_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{BUCKET_HALF_DEG, BUCKET_OUTER_DEG};
use crate::geometry::Point;

/// Coarse direction of the handle relative to the pad center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Down,
    Up,
    Left,
}

impl Direction {
    /// Every direction, in clockwise screen order starting at Right.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Classify an angle in degrees.
    ///
    /// Buckets are exclusive on the lower bound and inclusive on the upper,
    /// so exactly 45° is Right and exactly -45° is Up.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        if degrees > -BUCKET_HALF_DEG && degrees <= BUCKET_HALF_DEG {
            Self::Right
        } else if degrees > BUCKET_HALF_DEG && degrees <= BUCKET_OUTER_DEG {
            Self::Down
        } else if degrees > -BUCKET_OUTER_DEG && degrees <= -BUCKET_HALF_DEG {
            Self::Up
        } else {
            Self::Left
        }
    }

    /// Lowercase name used in logs and summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::Up => "up",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Angle of `target` around `center` in degrees, or `None` when they coincide.
///
/// `dx` grows to the right and `dy` grows upward (screen y inverted). The
/// magnitude is the angle between the offset and the positive x axis; the sign
/// is negative when the target sits above the center. This is evaluated as a
/// single `atan2`, which has no domain edge and keeps the diagonals exact.
#[must_use]
pub fn degrees_between(center: Point, target: Point) -> Option<f64> {
    let dx = target.x - center.x;
    let dy = center.y - target.y;
    if dx.hypot(dy) <= 0.0 {
        return None;
    }
    let degrees = (target.y - center.y).atan2(dx).to_degrees();
    // atan2 reports -180 for a signed-zero y; the range is (-180, 180].
    Some(if degrees <= -180.0 { 180.0 } else { degrees })
}

/// Direction of `target` around `center`, or `None` at rest.
#[must_use]
pub fn direction_between(center: Point, target: Point) -> Option<Direction> {
    degrees_between(center, target).map(Direction::from_degrees)
}
