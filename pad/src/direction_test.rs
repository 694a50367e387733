#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// degrees_between
// =============================================================

#[test]
fn degrees_on_axes() {
    let c = Point::ORIGIN;
    assert_eq!(degrees_between(c, pt(1.0, 0.0)), Some(0.0));
    assert_eq!(degrees_between(c, pt(0.0, 1.0)), Some(90.0));
    assert_eq!(degrees_between(c, pt(-1.0, 0.0)), Some(180.0));
    assert_eq!(degrees_between(c, pt(0.0, -1.0)), Some(-90.0));
}

#[test]
fn degrees_on_diagonals_are_exact() {
    let c = Point::ORIGIN;
    assert_eq!(degrees_between(c, pt(1.0, 1.0)), Some(45.0));
    assert_eq!(degrees_between(c, pt(1.0, -1.0)), Some(-45.0));
    assert_eq!(degrees_between(c, pt(-1.0, 1.0)), Some(135.0));
    assert_eq!(degrees_between(c, pt(-1.0, -1.0)), Some(-135.0));
    assert_eq!(degrees_between(c, pt(10.0, 10.0)), Some(45.0));
}

#[test]
fn degrees_relative_to_offset_center() {
    let c = pt(100.0, 50.0);
    assert_eq!(degrees_between(c, pt(150.0, 50.0)), Some(0.0));
    assert_eq!(degrees_between(c, pt(100.0, 80.0)), Some(90.0));
}

#[test]
fn degrees_at_center_is_none() {
    let c = pt(3.0, 4.0);
    assert_eq!(degrees_between(c, c), None);
}

#[test]
fn degrees_never_reports_minus_180() {
    let d = degrees_between(pt(0.0, 0.0), pt(-5.0, -0.0));
    assert_eq!(d, Some(180.0));
}

#[test]
fn degrees_stay_in_half_open_range() {
    let c = pt(20.0, 20.0);
    for i in 0..360 {
        let rad = f64::from(i).to_radians();
        let target = pt(20.0 + 10.0 * rad.cos(), 20.0 + 10.0 * rad.sin());
        let d = degrees_between(c, target).unwrap();
        assert!(d > -180.0 && d <= 180.0, "{d} out of range for step {i}");
    }
}

// =============================================================
// Direction::from_degrees
// =============================================================

#[test]
fn classify_bucket_centers() {
    assert_eq!(Direction::from_degrees(0.0), Direction::Right);
    assert_eq!(Direction::from_degrees(90.0), Direction::Down);
    assert_eq!(Direction::from_degrees(-90.0), Direction::Up);
    assert_eq!(Direction::from_degrees(180.0), Direction::Left);
}

#[test]
fn classify_boundaries_belong_to_lower_bucket() {
    assert_eq!(Direction::from_degrees(45.0), Direction::Right);
    assert_eq!(Direction::from_degrees(135.0), Direction::Down);
    assert_eq!(Direction::from_degrees(-45.0), Direction::Up);
    assert_eq!(Direction::from_degrees(-135.0), Direction::Left);
}

#[test]
fn classify_just_past_boundaries() {
    assert_eq!(Direction::from_degrees(45.000_001), Direction::Down);
    assert_eq!(Direction::from_degrees(-44.999_999), Direction::Right);
    assert_eq!(Direction::from_degrees(135.000_001), Direction::Left);
    assert_eq!(Direction::from_degrees(-134.999_999), Direction::Up);
}

// =============================================================
// direction_between
// =============================================================

#[test]
fn direction_cardinal_points() {
    let c = Point::ORIGIN;
    assert_eq!(direction_between(c, pt(1.0, 0.0)), Some(Direction::Right));
    assert_eq!(direction_between(c, pt(0.0, 1.0)), Some(Direction::Down));
    assert_eq!(direction_between(c, pt(-1.0, 0.0)), Some(Direction::Left));
    assert_eq!(direction_between(c, pt(0.0, -1.0)), Some(Direction::Up));
}

#[test]
fn direction_at_exact_45_is_right() {
    assert_eq!(direction_between(Point::ORIGIN, pt(1.0, 1.0)), Some(Direction::Right));
}

#[test]
fn direction_at_rest_is_none() {
    assert_eq!(direction_between(pt(8.0, 8.0), pt(8.0, 8.0)), None);
}

// =============================================================
// Naming
// =============================================================

#[test]
fn direction_display_is_lowercase() {
    assert_eq!(Direction::Right.to_string(), "right");
    assert_eq!(Direction::Up.to_string(), "up");
}

#[test]
fn direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    let d: Direction = serde_json::from_str("\"left\"").unwrap();
    assert_eq!(d, Direction::Left);
}

#[test]
fn direction_all_is_distinct() {
    for (i, a) in Direction::ALL.iter().enumerate() {
        for (j, b) in Direction::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

#[test]
fn direction_display_honors_width() {
    assert_eq!(format!("{:<6}|", Direction::Up), "up    |");
}
