// Host-side tests for the continuous-drag trail.

use feedlab_core::{
    rest_point, PointerTrail, TRAIL_DAMPING_RATIO, TRAIL_RESPONSE_BASE_SECS,
    TRAIL_RESPONSE_STEP_SECS, TRAIL_RING_COUNT,
};
use glam::Vec2;

fn make_trail() -> PointerTrail {
    PointerTrail::new(
        TRAIL_RING_COUNT,
        rest_point(),
        TRAIL_RESPONSE_BASE_SECS,
        TRAIL_RESPONSE_STEP_SECS,
        TRAIL_DAMPING_RATIO,
    )
}

#[test]
fn followers_rest_on_the_default_point_before_input() {
    let trail = make_trail();
    assert_eq!(trail.len(), 30);
    for i in 0..trail.len() {
        assert_eq!(trail.position_of(i), Vec2::new(188.0, 322.0));
        assert_eq!(trail.target_of(i), Vec2::new(188.0, 322.0));
    }
}

#[test]
fn every_follower_targets_the_most_recent_position() {
    // Property: for any sequence of moves, the Kth follower's target equals
    // the last event's position, independent of K.
    let mut trail = make_trail();
    for p in [
        Vec2::new(10.0, 40.0),
        Vec2::new(310.0, 80.0),
        Vec2::new(120.0, 600.0),
    ] {
        trail.pointer_moved(p);
        trail.advance(0.01);
    }
    for i in 0..trail.len() {
        assert_eq!(trail.target_of(i), Vec2::new(120.0, 600.0));
    }
}

#[test]
fn response_times_are_strictly_increasing_by_index() {
    let trail = make_trail();
    for i in 0..trail.len() - 1 {
        assert!(
            trail.response_of(i) < trail.response_of(i + 1),
            "follower {} response {} !< follower {} response {}",
            i,
            trail.response_of(i),
            i + 1,
            trail.response_of(i + 1)
        );
    }
}

#[test]
fn rapid_retargets_are_last_write_wins() {
    // (50,50) then immediately (60,60): nothing may come to rest at (50,50).
    let mut trail = make_trail();
    trail.pointer_moved(Vec2::new(50.0, 50.0));
    trail.pointer_moved(Vec2::new(60.0, 60.0));
    for i in 0..trail.len() {
        assert_eq!(trail.target_of(i), Vec2::new(60.0, 60.0));
    }
    // and all followers actually converge there
    for _ in 0..600 {
        trail.advance(1.0 / 60.0);
    }
    for pos in trail.positions() {
        assert!(
            (pos - Vec2::new(60.0, 60.0)).length() < 1.0,
            "follower stuck at ({}, {})",
            pos.x,
            pos.y
        );
    }
}

#[test]
fn duplicate_positions_leave_targets_unchanged() {
    // Idempotence: re-sending the same position restarts the same animation
    // to the same value; resting targets must not move.
    let mut trail = make_trail();
    trail.pointer_moved(Vec2::new(200.0, 100.0));
    trail.advance(0.1);
    let before: Vec<Vec2> = (0..trail.len()).map(|i| trail.target_of(i)).collect();
    trail.pointer_moved(Vec2::new(200.0, 100.0));
    let after: Vec<Vec2> = (0..trail.len()).map(|i| trail.target_of(i)).collect();
    assert_eq!(before, after);
}

#[test]
fn retarget_does_not_teleport_followers() {
    let mut trail = make_trail();
    trail.pointer_moved(Vec2::new(0.0, 0.0));
    trail.advance(0.05);
    let before: Vec<Vec2> = trail.positions().collect();
    trail.pointer_moved(Vec2::new(350.0, 600.0));
    let after: Vec<Vec2> = trail.positions().collect();
    for (b, a) in before.iter().zip(after.iter()) {
        assert!((*b - *a).length() < 1e-2, "position jumped on retarget");
    }
}

#[test]
fn slower_followers_lag_behind_faster_ones() {
    // The trail effect: shortly after a move, follower i sits closer to the
    // target than follower i+1 (monotone lag along the index). Sampled early
    // enough that even the fastest follower has not started oscillating.
    let mut trail = make_trail();
    trail.pointer_moved(Vec2::new(300.0, 500.0));
    trail.advance(0.03);
    let target = Vec2::new(300.0, 500.0);
    for i in 0..trail.len() - 1 {
        let near = (trail.position_of(i) - target).length();
        let far = (trail.position_of(i + 1) - target).length();
        assert!(
            near <= far + 1e-3,
            "follower {i} ({near}) not ahead of follower {} ({far})",
            i + 1
        );
    }
}
