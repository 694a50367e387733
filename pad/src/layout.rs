//! Layout helpers: where the pad's center sits and how large the pad wants to be.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::DEFAULT_RADIUS_FACTOR;
use crate::geometry::{Point, Size};

/// A host size constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The host imposes no constraint.
    Unspecified,
    /// The pad may be at most this many pixels.
    AtMost(u32),
    /// The pad must be exactly this many pixels.
    Exactly(u32),
}

impl MeasureSpec {
    /// Resolve this constraint against the pad's desired size on that axis.
    #[must_use]
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            Self::Unspecified => desired,
            Self::AtMost(limit) => limit.min(desired),
            Self::Exactly(size) => size,
        }
    }
}

/// Center of the pad for the given content bounds.
///
/// The background never gets cropped: each axis uses the larger of the
/// content and background extent.
#[must_use]
pub fn center_for(content: Size, background: Size) -> Point {
    content.union(background).half()
}

/// Fallback outer radius derived from the first laid-out center.
#[must_use]
pub fn default_outer_radius(center: Point) -> f64 {
    DEFAULT_RADIUS_FACTOR * center.x.hypot(center.y)
}
