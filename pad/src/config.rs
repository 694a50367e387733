//! Construction config for a pad.
//!
//! Hosts either build a [`PadConfig`] in code or load it from JSON:
//!
//! ```json
//! {
//!   "outer_radius": 96.0,
//!   "background": "rocker_bg",
//!   "handle": { "inactive": "rocker_ball", "active": "rocker_ball_pressed" },
//!   "assets": {
//!     "rocker_bg": { "width": 240.0, "height": 240.0 },
//!     "rocker_ball": { "width": 80.0, "height": 80.0 },
//!     "rocker_ball_pressed": { "width": 88.0, "height": 88.0 }
//!   }
//! }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PadError;
use crate::geometry::Size;
use crate::presenter::StaticAssets;

/// Default background asset id.
pub const DEFAULT_BACKGROUND: &str = "rocker_bg";

/// Default handle asset id.
pub const DEFAULT_HANDLE: &str = "rocker_ball";

/// Which asset(s) a presenter draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetSpec {
    /// One asset used in both appearances.
    Single(String),
    /// Separate assets for the released and pressed appearances.
    TwoState { inactive: String, active: String },
}

fn default_background() -> AssetSpec {
    AssetSpec::Single(DEFAULT_BACKGROUND.to_owned())
}

fn default_handle() -> AssetSpec {
    AssetSpec::Single(DEFAULT_HANDLE.to_owned())
}

/// Everything needed to construct a pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadConfig {
    /// Maximum handle travel from the center. `None` derives it on first layout.
    #[serde(default)]
    pub outer_radius: Option<f64>,
    #[serde(default = "default_background")]
    pub background: AssetSpec,
    #[serde(default = "default_handle")]
    pub handle: AssetSpec,
    /// Intrinsic sizes for hosts without a real image loader.
    #[serde(default)]
    pub assets: BTreeMap<String, Size>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            outer_radius: None,
            background: default_background(),
            handle: default_handle(),
            assets: BTreeMap::new(),
        }
    }
}

impl PadConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Config`] for malformed JSON and
    /// [`PadError::InvalidOuterRadius`] for an unusable radius.
    pub fn from_json(json: &str) -> Result<Self, PadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configured radius, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidOuterRadius`] when the radius is negative or
    /// not finite. Zero is accepted and means "derive on first layout".
    pub fn validate(&self) -> Result<(), PadError> {
        match self.outer_radius {
            Some(r) if !r.is_finite() || r < 0.0 => Err(PadError::InvalidOuterRadius(r)),
            _ => Ok(()),
        }
    }

    /// The configured radius, or `0.0` when it should be derived on first layout.
    #[must_use]
    pub fn initial_outer_radius(&self) -> f64 {
        self.outer_radius.filter(|r| r.is_finite() && *r > 0.0).unwrap_or(0.0)
    }

    /// A resolver over the static `assets` table.
    #[must_use]
    pub fn static_assets(&self) -> StaticAssets {
        StaticAssets::new(self.assets.clone())
    }
}
