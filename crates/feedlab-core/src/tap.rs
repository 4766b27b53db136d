//! Discrete-tap trail: a current marker, one frozen ghost, and a slow
//! trailing follower.
//!
//! Each tap runs a three-stage transition: the prior current position is
//! captured as a ghost, frozen at fixed opacity until the next tap
//! overwrites it (no expiry); the marker snaps its scale to zero and springs
//! back to one while its position eases to the tap; and the trailing
//! follower converges on the same point with a slower hand-tuned spring.

use glam::Vec2;

use crate::constants::{
    TAP_MARKER_DAMPING_RATIO, TAP_MARKER_RESPONSE_SECS, TAP_POP_DAMPING_RATIO,
    TAP_POP_RESPONSE_SECS, TAP_TRAILING_DAMPING_RATIO, TAP_TRAILING_RESPONSE_SECS,
};
use crate::spring::{SpringPoint, SpringSpec, SpringValue};

pub struct TapTrail {
    marker: SpringPoint,
    marker_scale: SpringValue,
    trailing: SpringPoint,
    ghost: Option<Vec2>,
}

impl TapTrail {
    /// Marker and trailing follower both rest on `rest`; no ghost yet.
    pub fn new(rest: Vec2) -> Self {
        Self {
            marker: SpringPoint::new(
                SpringSpec::new(TAP_MARKER_RESPONSE_SECS, TAP_MARKER_DAMPING_RATIO),
                rest,
            ),
            marker_scale: SpringValue::new(
                SpringSpec::new(TAP_POP_RESPONSE_SECS, TAP_POP_DAMPING_RATIO),
                1.0,
            ),
            trailing: SpringPoint::new(
                SpringSpec::new(TAP_TRAILING_RESPONSE_SECS, TAP_TRAILING_DAMPING_RATIO),
                rest,
            ),
            ghost: None,
        }
    }

    /// A tap landed at `position`: ghost the prior current position, pop the
    /// marker in from scale zero, and send the trailing follower after it.
    pub fn tap_ended(&mut self, position: Vec2) {
        self.ghost = Some(self.marker.target());
        self.marker.retarget(position);
        self.marker_scale.snap(0.0);
        self.marker_scale.retarget(1.0);
        self.trailing.retarget(position);
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.marker.advance(dt_secs);
        self.marker_scale.advance(dt_secs);
        self.trailing.advance(dt_secs);
    }

    #[inline]
    pub fn marker_position(&self) -> Vec2 {
        self.marker.value()
    }

    #[inline]
    pub fn marker_target(&self) -> Vec2 {
        self.marker.target()
    }

    /// Scale of the current marker; exactly 0.0 on the frame a tap lands.
    #[inline]
    pub fn marker_scale(&self) -> f32 {
        self.marker_scale.value()
    }

    /// The frozen prior position, if any tap has landed yet.
    #[inline]
    pub fn ghost(&self) -> Option<Vec2> {
        self.ghost
    }

    #[inline]
    pub fn trailing_position(&self) -> Vec2 {
        self.trailing.value()
    }

    #[inline]
    pub fn trailing_target(&self) -> Vec2 {
        self.trailing.target()
    }
}
