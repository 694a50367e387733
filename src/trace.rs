//! Recorded pointer traces and their replay through a pad.
//!
//! A trace is either a JSON array of entries or one entry per line (JSONL).
//! Each entry is a [`PointerEvent`] with an optional `at_ms` offset from the
//! start of the recording:
//!
//! ```json
//! [
//!   { "type": "layout", "width": 240, "height": 240 },
//!   { "type": "down", "x": 120.0, "y": 120.0, "at_ms": 0 },
//!   { "type": "move", "history": [{ "x": 130.0, "y": 118.0 }], "x": 150.0, "y": 110.0, "at_ms": 16 },
//!   { "type": "up", "at_ms": 48 }
//! ]
//! ```

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use std::time::Duration;

use pad::engine::{Action, PadCore};
use pad::geometry::Point;
use pad::input::{PointerEvent, PointerState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::report::DirectionCounts;

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Milliseconds since the start of the recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_ms: Option<u64>,
    #[serde(flatten)]
    pub event: PointerEvent,
}

/// Parse a trace document, accepting a JSON array or JSONL.
///
/// Blank lines in JSONL input are skipped.
///
/// # Errors
///
/// Returns the first JSON error encountered.
pub fn parse_trace(input: &str) -> Result<Vec<TraceEntry>, serde_json::Error> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input);
    }
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(serde_json::from_str)
        .collect()
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub renders: usize,
    /// Pointer samples applied, history included.
    pub samples: usize,
    pub readings: DirectionCounts,
    pub final_state: PointerState,
    pub final_position: Point,
    pub center: Point,
    pub outer_radius: f64,
}

/// Feeds trace entries into a pad and accumulates a [`ReplaySummary`].
pub struct Replayer<'a> {
    core: &'a mut PadCore,
    summary: ReplaySummary,
}

impl<'a> Replayer<'a> {
    pub fn new(core: &'a mut PadCore) -> Self {
        Self { core, summary: ReplaySummary::default() }
    }

    /// Apply one entry.
    pub fn apply(&mut self, entry: &TraceEntry) {
        self.summary.events += 1;
        if let PointerEvent::Move { history, .. } = &entry.event {
            self.summary.samples += history.len() + 1;
            for sample in history {
                trace!(x = sample.x, y = sample.y, "history sample");
            }
        }

        let actions = self.core.handle_event(&entry.event);
        let mut reading = None;
        for action in actions {
            match action {
                Action::Direction(direction) => reading = Some(direction),
                Action::RenderNeeded => self.summary.renders += 1,
            }
        }

        match &entry.event {
            PointerEvent::Move { .. } => {
                let handle = self.core.handle_position();
                self.summary.readings.record(reading);
                match reading {
                    Some(direction) => info!(%direction, x = handle.x, y = handle.y, at_ms = entry.at_ms, "reading"),
                    None => debug!(x = handle.x, y = handle.y, "handle at rest"),
                }
            }
            PointerEvent::Down { x, y } => debug!(x, y, "pointer down"),
            PointerEvent::Up => debug!("pointer up"),
            PointerEvent::Layout { width, height } => {
                let center = self.core.center();
                debug!(width, height, cx = center.x, cy = center.y, "layout");
            }
        }
    }

    /// Finish and report.
    #[must_use]
    pub fn finish(self) -> ReplaySummary {
        ReplaySummary {
            final_state: self.core.pointer_state(),
            final_position: self.core.handle_position(),
            center: self.core.center(),
            outer_radius: self.core.outer_radius(),
            ..self.summary
        }
    }
}

/// Replay every entry immediately.
pub fn replay(core: &mut PadCore, entries: &[TraceEntry]) -> ReplaySummary {
    let mut replayer = Replayer::new(core);
    for entry in entries {
        replayer.apply(entry);
    }
    replayer.finish()
}

/// Replay entries in real time, waiting until each entry's `at_ms`.
///
/// Entries without a timestamp are applied as soon as they are reached.
pub async fn replay_paced(core: &mut PadCore, entries: &[TraceEntry]) -> ReplaySummary {
    let start = tokio::time::Instant::now();
    let mut replayer = Replayer::new(core);
    for entry in entries {
        if let Some(at_ms) = entry.at_ms {
            tokio::time::sleep_until(start + Duration::from_millis(at_ms)).await;
        }
        replayer.apply(entry);
    }
    replayer.finish()
}
