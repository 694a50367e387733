//! Randomized drags that check the clamp invariant on every sample.

#[cfg(test)]
#[path = "fuzz_test.rs"]
mod fuzz_test;

use pad::engine::PadCore;
use pad::geometry::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{trace, warn};

use crate::report::DirectionCounts;

/// Slack allowed on the clamp invariant for floating-point rounding.
pub const CLAMP_EPSILON: f64 = 1e-9;

/// Longest batched history generated for a single move.
const MAX_HISTORY: usize = 4;

/// Moves per simulated pointer session.
const MOVES_PER_SESSION: usize = 8;

/// Upper bound on `spread`; keeps the sampling range finite.
pub const MAX_SPREAD: f64 = 1_000.0;

/// Fuzz run parameters.
#[derive(Debug, Clone, Copy)]
pub struct FuzzParams {
    /// Total pointer samples to generate, history included.
    pub samples: usize,
    pub seed: u64,
    pub width: u32,
    pub height: u32,
    /// How far past the pad bounds samples may land, as a multiple of its size.
    /// Non-finite values fall back to `0.0`; larger ones are capped at [`MAX_SPREAD`].
    pub spread: f64,
}

/// Outcome of a fuzz run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FuzzReport {
    pub samples: usize,
    pub sessions: usize,
    pub readings: DirectionCounts,
    pub violations: usize,
    /// Largest handle distance from the center seen after any sample.
    pub max_distance: f64,
    pub outer_radius: f64,
}

impl FuzzReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations == 0
    }
}

/// Drive `core` through seeded random pointer sessions.
///
/// The pad is laid out to `width`×`height` first. Every session is
/// down → several moves (each with a random history) → up, and the handle's
/// distance from the center is checked after every applied sample and after
/// every release.
pub fn fuzz(core: &mut PadCore, params: FuzzParams) -> FuzzReport {
    core.layout(params.width, params.height);
    let radius = core.outer_radius();
    let center = core.center();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut report = FuzzReport { outer_radius: radius, ..FuzzReport::default() };

    let w = f64::from(params.width);
    let h = f64::from(params.height);
    let spread = if params.spread.is_finite() { params.spread.abs().min(MAX_SPREAD) } else { 0.0 };
    let random_point = |rng: &mut StdRng| {
        let x = rng.random_range(-w * spread..=w * (1.0 + spread));
        let y = rng.random_range(-h * spread..=h * (1.0 + spread));
        Point::new(x, y)
    };

    while report.samples < params.samples {
        report.sessions += 1;
        core.pointer_down(random_point(&mut rng));

        for _ in 0..MOVES_PER_SESSION {
            if report.samples >= params.samples {
                break;
            }
            let remaining = params.samples - report.samples - 1;
            let history_len = rng.random_range(0..=MAX_HISTORY).min(remaining);
            let history: Vec<Point> = (0..history_len).map(|_| random_point(&mut rng)).collect();
            let current = random_point(&mut rng);

            let mut worst = 0.0_f64;
            let reading = core.pointer_move_each(&history, current, |p| {
                worst = worst.max(p.distance(center));
            });
            report.samples += history_len + 1;
            report.readings.record(reading);
            report.max_distance = report.max_distance.max(worst);
            if worst > radius + CLAMP_EPSILON {
                report.violations += 1;
                warn!(distance = worst, radius, x = current.x, y = current.y, "handle escaped the outer radius");
            }
            trace!(x = current.x, y = current.y, history = history_len, ?reading, "fuzz move");
        }

        core.pointer_up();
        if core.handle_position() != center || core.pointer_state().is_active() {
            report.violations += 1;
            warn!("pad did not come to rest on release");
        }
    }
    report
}
