//! Configuration errors.
//!
//! Geometry and state handling never fail; only building the pad from a
//! config and a set of visual assets can.

/// Error returned while constructing a pad or its presenters.
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    /// The resolver has no asset under this id.
    #[error("asset `{0}` could not be resolved")]
    UnresolvedAsset(String),
    /// The asset exists but has no positive, finite intrinsic size.
    #[error("asset `{id}` has no measurable size ({width}x{height})")]
    UnmeasurableAsset { id: String, width: f64, height: f64 },
    /// A configured outer radius was negative or not finite.
    #[error("outer radius must be a finite number no less than zero, got {0}")]
    InvalidOuterRadius(f64),
    /// The config document could not be parsed.
    #[error("invalid pad config: {0}")]
    Config(#[from] serde_json::Error),
}
