//! Shared numeric constants for the pad crate.

// ── Direction buckets ───────────────────────────────────────────

/// Half-width of each direction bucket in degrees.
pub const BUCKET_HALF_DEG: f64 = 45.0;

/// Upper bound of the Down bucket (and lower bound of Left on the positive side).
pub const BUCKET_OUTER_DEG: f64 = 135.0;

// ── Layout ──────────────────────────────────────────────────────

/// Fraction of the center's distance from the origin used as the fallback outer radius.
pub const DEFAULT_RADIUS_FACTOR: f64 = 0.5;

// ── Presenter ───────────────────────────────────────────────────

/// Fully opaque alpha.
pub const OPAQUE: f64 = 1.0;
