//! Input model: pointer lifecycle events and the pressed/released state.
//!
//! The pad tracks a single pointer stream. `PointerEvent` is the tagged form
//! hosts can forward as-is (it is also the on-disk shape of recorded traces);
//! `PointerState` is the only externally observable "pressed" signal.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Whether a pointer session is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerState {
    /// No pointer is down; the handle rests at the center.
    #[default]
    Inactive,
    /// A pointer went down and has not been released yet.
    Active,
}

impl PointerState {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// One host event delivered to the pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Content bounds changed (CSS pixels).
    Layout { width: u32, height: u32 },
    /// A pointer went down at `(x, y)`.
    Down { x: f64, y: f64 },
    /// The pointer moved to `(x, y)`. `history` holds batched samples older
    /// than the live one, oldest first.
    Move {
        #[serde(default)]
        history: Vec<Point>,
        x: f64,
        y: f64,
    },
    /// The pointer was released.
    Up,
}
