//! Per-direction tallies shared by replay and fuzz summaries.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt;

use pad::direction::Direction;
use serde::Serialize;

/// How many readings landed in each direction, plus readings at rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectionCounts {
    pub right: usize,
    pub down: usize,
    pub up: usize,
    pub left: usize,
    pub rest: usize,
}

impl DirectionCounts {
    pub fn record(&mut self, reading: Option<Direction>) {
        let slot = match reading {
            Some(Direction::Right) => &mut self.right,
            Some(Direction::Down) => &mut self.down,
            Some(Direction::Up) => &mut self.up,
            Some(Direction::Left) => &mut self.left,
            None => &mut self.rest,
        };
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub fn get(&self, direction: Direction) -> usize {
        match direction {
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Up => self.up,
            Direction::Left => self.left,
        }
    }

    /// All recorded readings, including those at rest.
    #[must_use]
    pub fn total(&self) -> usize {
        self.right + self.down + self.up + self.left + self.rest
    }
}

impl fmt::Display for DirectionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in Direction::ALL {
            writeln!(f, "  {:<6}{}", direction, self.get(direction))?;
        }
        write!(f, "  {:<6}{}", "rest", self.rest)
    }
}
