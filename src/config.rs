//! Harness configuration: the pad config file plus command-line overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fs;
use std::path::Path;

use pad::config::PadConfig;
use pad::engine::PadCore;
use tracing::info;

use crate::CliError;

/// Load the pad config from `path` (defaults when absent) and apply overrides.
///
/// # Errors
///
/// Returns [`CliError::ReadConfig`] when the file cannot be read and
/// [`CliError::Pad`] when it is malformed or the resulting radius is invalid.
pub fn load_pad_config(path: Option<&Path>, outer_radius: Option<f64>) -> Result<PadConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.display().to_string(),
                source,
            })?;
            PadConfig::from_json(&text)?
        }
        None => PadConfig::default(),
    };
    if outer_radius.is_some() {
        config.outer_radius = outer_radius;
    }
    config.validate()?;
    Ok(config)
}

/// Build the pad core for `config`.
///
/// With an `assets` table the presenters are resolved strictly; without one
/// the pad runs headless.
///
/// # Errors
///
/// Returns [`CliError::Pad`] when a configured asset cannot be resolved.
pub fn build_core(config: &PadConfig) -> Result<PadCore, CliError> {
    if config.assets.is_empty() {
        info!("no asset sizes configured; running headless");
        return Ok(PadCore::headless(config));
    }
    Ok(PadCore::new(config, &config.static_assets())?)
}
