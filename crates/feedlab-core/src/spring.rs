//! Animated value holders with spring easing.
//!
//! Each holder evaluates the damped harmonic oscillator analytically, so a
//! value's position is a pure function of (start, start velocity, target,
//! elapsed time) and never of any other holder. Retargeting captures the
//! current position and velocity as the new start, which is what gives
//! last-write-wins semantics: a new target implicitly replaces any in-flight
//! transition, no cancellation token involved.

use glam::Vec2;

/// Settling multiplier for a critically damped spring: the solution reaches
/// within 1% of target at t = 6.6 / omega, so omega = 6.6 / response.
const SETTLE_FACTOR: f32 = 6.6;
const MIN_RESPONSE_SECS: f32 = 0.01;
const SETTLE_EPS: f32 = 0.01;

/// Transition curve descriptor: how long a value takes to reach its target
/// (within 1% for the critically damped case) and how much it may overshoot
/// on the way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    pub response_secs: f32,
    pub damping_ratio: f32,
}

impl SpringSpec {
    pub fn new(response_secs: f32, damping_ratio: f32) -> Self {
        Self {
            response_secs: response_secs.max(MIN_RESPONSE_SECS),
            damping_ratio: damping_ratio.max(0.05),
        }
    }

    /// Critically damped: fastest approach with no overshoot.
    pub fn smooth(response_secs: f32) -> Self {
        Self::new(response_secs, 1.0)
    }

    #[inline]
    fn omega(&self) -> f32 {
        SETTLE_FACTOR / self.response_secs
    }
}

/// Closed-form displacement and velocity at time `t` for a spring whose
/// target is 0, starting from displacement `x0` with velocity `v0`.
fn solve(spec: SpringSpec, x0: f32, v0: f32, t: f32) -> (f32, f32) {
    let w = spec.omega();
    let z = spec.damping_ratio;
    if z < 0.999 {
        // underdamped: x(t) = e^(-z w t) (x0 cos(wd t) + c sin(wd t))
        let wd = w * (1.0 - z * z).sqrt();
        let c = (v0 + z * w * x0) / wd;
        let decay = (-z * w * t).exp();
        let (s, co) = (wd * t).sin_cos();
        let x = decay * (x0 * co + c * s);
        let dx = decay * (-z * w * (x0 * co + c * s) + wd * (c * co - x0 * s));
        (x, dx)
    } else if z < 1.001 {
        // critically damped: x(t) = (x0 + b t) e^(-w t), b = v0 + w x0
        let b = v0 + w * x0;
        let decay = (-w * t).exp();
        let x = (x0 + b * t) * decay;
        let dx = (b - w * (x0 + b * t)) * decay;
        (x, dx)
    } else {
        // overdamped: two real exponents
        let g = w * (z * z - 1.0).sqrt();
        let r1 = -z * w + g;
        let r2 = -z * w - g;
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// A scalar chasing a target with spring easing.
#[derive(Clone, Copy, Debug)]
pub struct SpringValue {
    spec: SpringSpec,
    start: f32,
    start_velocity: f32,
    target: f32,
    elapsed: f32,
}

impl SpringValue {
    /// Create a holder at rest on `value`.
    pub fn new(spec: SpringSpec, value: f32) -> Self {
        Self {
            spec,
            start: value,
            start_velocity: 0.0,
            target: value,
            elapsed: 0.0,
        }
    }

    /// Replace the target, carrying the current position and velocity over so
    /// the motion stays continuous. Retargeting to the same value restarts
    /// the same animation to the same value.
    pub fn retarget(&mut self, target: f32) {
        let (v, vel) = (self.value(), self.velocity());
        self.start = v;
        self.start_velocity = vel;
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Jump to `value` instantly, at rest.
    pub fn snap(&mut self, value: f32) {
        self.start = value;
        self.start_velocity = 0.0;
        self.target = value;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.elapsed += dt_secs.max(0.0);
    }

    #[inline]
    pub fn value(&self) -> f32 {
        let (x, _) = solve(
            self.spec,
            self.start - self.target,
            self.start_velocity,
            self.elapsed,
        );
        self.target + x
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        let (_, dx) = solve(
            self.spec,
            self.start - self.target,
            self.start_velocity,
            self.elapsed,
        );
        dx
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn spec(&self) -> SpringSpec {
        self.spec
    }

    /// Whether the value has come to rest at its target (within 1% of the
    /// distance travelled, floored at a small absolute epsilon).
    pub fn settled(&self) -> bool {
        let travel = (self.start - self.target).abs();
        (self.value() - self.target).abs() <= (0.01 * travel).max(SETTLE_EPS)
            && self.velocity().abs() <= (0.1 * travel).max(SETTLE_EPS)
    }
}

/// A 2D point chasing a target with spring easing. The oscillator is
/// separable, so each axis is solved independently with the same spec.
#[derive(Clone, Copy, Debug)]
pub struct SpringPoint {
    spec: SpringSpec,
    start: Vec2,
    start_velocity: Vec2,
    target: Vec2,
    elapsed: f32,
}

impl SpringPoint {
    pub fn new(spec: SpringSpec, value: Vec2) -> Self {
        Self {
            spec,
            start: value,
            start_velocity: Vec2::ZERO,
            target: value,
            elapsed: 0.0,
        }
    }

    pub fn retarget(&mut self, target: Vec2) {
        let (v, vel) = (self.value(), self.velocity());
        self.start = v;
        self.start_velocity = vel;
        self.target = target;
        self.elapsed = 0.0;
    }

    pub fn snap(&mut self, value: Vec2) {
        self.start = value;
        self.start_velocity = Vec2::ZERO;
        self.target = value;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.elapsed += dt_secs.max(0.0);
    }

    pub fn value(&self) -> Vec2 {
        let d = self.start - self.target;
        let (x, _) = solve(self.spec, d.x, self.start_velocity.x, self.elapsed);
        let (y, _) = solve(self.spec, d.y, self.start_velocity.y, self.elapsed);
        self.target + Vec2::new(x, y)
    }

    pub fn velocity(&self) -> Vec2 {
        let d = self.start - self.target;
        let (_, dx) = solve(self.spec, d.x, self.start_velocity.x, self.elapsed);
        let (_, dy) = solve(self.spec, d.y, self.start_velocity.y, self.elapsed);
        Vec2::new(dx, dy)
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn spec(&self) -> SpringSpec {
        self.spec
    }

    pub fn settled(&self) -> bool {
        let travel = (self.start - self.target).length();
        (self.value() - self.target).length() <= (0.01 * travel).max(SETTLE_EPS)
            && self.velocity().length() <= (0.1 * travel).max(SETTLE_EPS)
    }
}
