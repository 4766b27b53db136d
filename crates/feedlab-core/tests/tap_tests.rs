// Host-side tests for the discrete-tap trail.

use feedlab_core::{rest_point, TapTrail, GHOST_OPACITY};
use glam::Vec2;

#[test]
fn starts_at_rest_with_no_ghost() {
    let tap = TapTrail::new(rest_point());
    assert_eq!(tap.marker_position(), Vec2::new(188.0, 322.0));
    assert_eq!(tap.trailing_position(), Vec2::new(188.0, 322.0));
    assert_eq!(tap.ghost(), None);
    assert!((tap.marker_scale() - 1.0).abs() < 1e-6);
}

#[test]
fn first_tap_ghosts_the_rest_point() {
    let mut tap = TapTrail::new(rest_point());
    tap.tap_ended(Vec2::new(40.0, 40.0));
    assert_eq!(tap.ghost(), Some(Vec2::new(188.0, 322.0)));
}

#[test]
fn two_taps_leave_ghost_marker_and_trailing_in_the_right_places() {
    // (10,10) then (20,20): ghost at (10,10), marker and trailing at (20,20).
    let mut tap = TapTrail::new(rest_point());
    tap.tap_ended(Vec2::new(10.0, 10.0));
    for _ in 0..300 {
        tap.advance(1.0 / 60.0);
    }
    tap.tap_ended(Vec2::new(20.0, 20.0));
    assert_eq!(tap.ghost(), Some(Vec2::new(10.0, 10.0)));
    assert_eq!(tap.marker_target(), Vec2::new(20.0, 20.0));
    assert_eq!(tap.trailing_target(), Vec2::new(20.0, 20.0));
    for _ in 0..600 {
        tap.advance(1.0 / 60.0);
    }
    assert!((tap.marker_position() - Vec2::new(20.0, 20.0)).length() < 0.5);
    assert!((tap.trailing_position() - Vec2::new(20.0, 20.0)).length() < 0.5);
    // the ghost froze; settling moved nothing else
    assert_eq!(tap.ghost(), Some(Vec2::new(10.0, 10.0)));
}

#[test]
fn marker_scale_never_skips_the_zero_frame() {
    let mut tap = TapTrail::new(rest_point());
    tap.tap_ended(Vec2::new(100.0, 100.0));
    // exactly zero on the tap frame, then growing back toward one
    assert_eq!(tap.marker_scale(), 0.0);
    tap.advance(0.05);
    let early = tap.marker_scale();
    assert!(early > 0.0);
    for _ in 0..600 {
        tap.advance(1.0 / 60.0);
    }
    assert!((tap.marker_scale() - 1.0).abs() < 0.01);
}

#[test]
fn ghost_is_overwritten_only_by_the_next_tap() {
    // No expiry: the ghost holds its position through arbitrary idle time.
    let mut tap = TapTrail::new(rest_point());
    tap.tap_ended(Vec2::new(60.0, 80.0));
    let ghost = tap.ghost();
    for _ in 0..6000 {
        tap.advance(1.0 / 60.0);
    }
    assert_eq!(tap.ghost(), ghost);
    tap.tap_ended(Vec2::new(90.0, 90.0));
    assert_eq!(tap.ghost(), Some(Vec2::new(60.0, 80.0)));
}

#[test]
fn trailing_follower_is_slower_than_the_marker() {
    let mut tap = TapTrail::new(rest_point());
    let target = Vec2::new(40.0, 40.0);
    tap.tap_ended(target);
    tap.advance(0.15);
    let marker_dist = (tap.marker_position() - target).length();
    let trailing_dist = (tap.trailing_position() - target).length();
    assert!(
        marker_dist < trailing_dist,
        "marker ({marker_dist}) should lead trailing ({trailing_dist})"
    );
}

#[test]
fn ghost_opacity_is_a_fixed_constant() {
    // The ghost renders at a fixed opacity; there is no fade animation.
    assert!(GHOST_OPACITY > 0.0 && GHOST_OPACITY < 1.0);
}
