//! Continuous-drag trail: a fixed set of followers chasing the live pointer.
//!
//! Every follower targets the most recent pointer position; only the timing
//! differs. Follower `i` responds in `base + i * step` seconds, strictly
//! increasing with the index, which is what spreads the set into a visible
//! trail while the pointer moves.

use glam::Vec2;

use crate::spring::{SpringPoint, SpringSpec};

pub struct PointerTrail {
    followers: Vec<SpringPoint>,
    target: Vec2,
}

impl PointerTrail {
    /// `count` followers resting on `rest`, follower `i` with response
    /// `base_response_secs + i * response_step_secs`.
    pub fn new(
        count: usize,
        rest: Vec2,
        base_response_secs: f32,
        response_step_secs: f32,
        damping_ratio: f32,
    ) -> Self {
        let followers = (0..count)
            .map(|i| {
                let response = base_response_secs + i as f32 * response_step_secs;
                SpringPoint::new(SpringSpec::new(response, damping_ratio), rest)
            })
            .collect();
        Self {
            followers,
            target: rest,
        }
    }

    /// Record `position` as the new target for every follower. Rapid
    /// successive calls simply retarget in-flight transitions; there is no
    /// queueing and no history beyond the live target.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.target = position;
        for f in &mut self.followers {
            f.retarget(position);
        }
    }

    pub fn advance(&mut self, dt_secs: f32) {
        for f in &mut self.followers {
            f.advance(dt_secs);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.followers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    /// The most recent pointer position; every follower rests here.
    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn position_of(&self, index: usize) -> Vec2 {
        self.followers[index].value()
    }

    #[inline]
    pub fn target_of(&self, index: usize) -> Vec2 {
        self.followers[index].target()
    }

    #[inline]
    pub fn response_of(&self, index: usize) -> f32 {
        self.followers[index].spec().response_secs
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.followers.iter().map(|f| f.value())
    }
}
