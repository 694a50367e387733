#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_uses_single_assets() {
    let config = PadConfig::default();
    assert_eq!(config.outer_radius, None);
    assert_eq!(config.background, AssetSpec::Single(DEFAULT_BACKGROUND.into()));
    assert_eq!(config.handle, AssetSpec::Single(DEFAULT_HANDLE.into()));
    assert!(config.assets.is_empty());
}

#[test]
fn empty_object_parses_to_default() {
    let config = PadConfig::from_json("{}").unwrap();
    assert_eq!(config, PadConfig::default());
}

#[test]
fn two_state_handle_parses() {
    let json = r#"{
        "outer_radius": 96.0,
        "handle": { "inactive": "ball", "active": "ball_pressed" },
        "assets": { "ball": { "width": 80.0, "height": 80.0 } }
    }"#;
    let config = PadConfig::from_json(json).unwrap();
    assert_eq!(config.outer_radius, Some(96.0));
    assert_eq!(
        config.handle,
        AssetSpec::TwoState { inactive: "ball".into(), active: "ball_pressed".into() }
    );
    assert_eq!(config.assets.get("ball"), Some(&Size::new(80.0, 80.0)));
}

#[test]
fn negative_radius_is_rejected() {
    let err = PadConfig::from_json(r#"{"outer_radius": -4.0}"#).unwrap_err();
    assert!(matches!(err, PadError::InvalidOuterRadius(r) if r == -4.0));
}

#[test]
fn zero_radius_means_derive_on_layout() {
    let config = PadConfig::from_json(r#"{"outer_radius": 0.0}"#).unwrap();
    assert_eq!(config.outer_radius, Some(0.0));
    assert_eq!(config.initial_outer_radius(), 0.0);
}

#[test]
fn non_finite_radius_is_rejected() {
    let config = PadConfig { outer_radius: Some(f64::INFINITY), ..PadConfig::default() };
    assert!(matches!(config.validate(), Err(PadError::InvalidOuterRadius(_))));
    let config = PadConfig { outer_radius: Some(f64::NAN), ..PadConfig::default() };
    assert!(matches!(config.validate(), Err(PadError::InvalidOuterRadius(_))));
}

#[test]
fn malformed_json_is_config_error() {
    let err = PadConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PadError::Config(_)));
    assert!(err.to_string().starts_with("invalid pad config"));
}

#[test]
fn initial_radius_falls_back_to_zero() {
    let mut config = PadConfig::default();
    assert_eq!(config.initial_outer_radius(), 0.0);
    config.outer_radius = Some(f64::NAN);
    assert_eq!(config.initial_outer_radius(), 0.0);
    config.outer_radius = Some(42.0);
    assert_eq!(config.initial_outer_radius(), 42.0);
}
