//! Easing curves and transition timing.
//!
//! A transition is described by a [`TransitionSpec`]: how long it runs, how
//! long it waits before starting, and which [`Easing`] maps linear time to
//! visual progress.

/// Trait for values that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing functions applied to the linear progress of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    /// No easing. The swipe-out flight uses this so the surface keeps the
    /// speed it was released with.
    Linear,
    EaseIn,
    EaseOut,
    /// The standard `ease` curve, used for bounce-back.
    EaseInOut,
    /// Fast out, slow in (material standard curve).
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => UnitBezier::new(0.42, 0.0, 1.0, 1.0).ease(fraction),
            Easing::EaseOut => UnitBezier::new(0.0, 0.0, 0.58, 1.0).ease(fraction),
            Easing::EaseInOut => UnitBezier::new(0.42, 0.0, 0.58, 1.0).ease(fraction),
            Easing::FastOutSlowIn => UnitBezier::new(0.4, 0.0, 0.2, 1.0).ease(fraction),
            Easing::LinearOutSlowIn => UnitBezier::new(0.0, 0.0, 0.2, 1.0).ease(fraction),
            Easing::FastOutLinearIn => UnitBezier::new(0.4, 0.0, 1.0, 1.0).ease(fraction),
        }
    }
}

const SOLVE_EPSILON: f32 = 1e-6;

/// Unit cubic bezier from `(0, 0)` to `(1, 1)`, kept as the polynomial
/// coefficients `[a, b, c]` of `a*t^3 + b*t^2 + c*t` per axis.
#[derive(Clone, Copy)]
struct UnitBezier {
    x: [f32; 3],
    y: [f32; 3],
}

impl UnitBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: coefficients(x1, x2),
            y: coefficients(y1, y2),
        }
    }

    fn ease(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            0.0
        } else if fraction >= 1.0 {
            1.0
        } else {
            polynomial(self.y, self.parameter_for(fraction))
        }
    }

    /// Curve parameter at which the x axis reaches `x`.
    fn parameter_for(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = polynomial(self.x, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = derivative(self.x, t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // x is monotonic on [0, 1] for control points inside the unit square.
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..16 {
            let error = polynomial(self.x, t) - x;
            if error.abs() < SOLVE_EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = (low + high) * 0.5;
        }
        t
    }
}

fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    [1.0 - c - b, b, c]
}

fn polynomial([a, b, c]: [f32; 3], t: f32) -> f32 {
    ((a * t + b) * t + c) * t
}

fn derivative([a, b, c]: [f32; 3], t: f32) -> f32 {
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Transition timing: duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before the transition starts moving, in milliseconds.
    pub delay_millis: u64,
}

impl TransitionSpec {
    /// Create a tween with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the transition starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Linear progress in `[0, 1]` after `elapsed_nanos` of wall time,
    /// accounting for the start delay. A zero-length transition completes
    /// as soon as its delay has passed.
    pub fn linear_progress(&self, elapsed_nanos: u64) -> f32 {
        let delay_nanos = self.delay_millis.saturating_mul(1_000_000);
        if elapsed_nanos < delay_nanos {
            return 0.0;
        }
        let duration_nanos = self.duration_millis.saturating_mul(1_000_000);
        if duration_nanos == 0 {
            return 1.0;
        }
        let running = elapsed_nanos - delay_nanos;
        (running as f64 / duration_nanos as f64).clamp(0.0, 1.0) as f32
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
