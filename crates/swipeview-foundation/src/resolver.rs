//! Release decision: dismiss the surface or bring it back.

use crate::config::DirectionSelector;
use crate::thresholds::SizeDerivedThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Direction of a non-zero horizontal displacement.
    pub fn of(delta_x: f32) -> Option<Self> {
        if delta_x > 0.0 {
            Some(SwipeDirection::Right)
        } else if delta_x < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    SwipeOut(SwipeDirection),
    BounceBack,
}

impl Outcome {
    pub fn is_swipe_out(self) -> bool {
        matches!(self, Outcome::SwipeOut(_))
    }
}

/// Decides the outcome of a released contact.
///
/// The release must travel at least the swipe-out distance, or move at
/// least the swipe-out speed, and its displacement must point into an
/// allowed direction. Only the displacement's direction is checked: a
/// fast flick back toward the start still dismisses in the direction the
/// surface was dragged.
pub fn resolve(
    delta_x: f32,
    velocity: f32,
    directions: DirectionSelector,
    thresholds: &SizeDerivedThresholds,
) -> Outcome {
    if !directions.permits(delta_x) || !thresholds.reached_by(delta_x, velocity) {
        return Outcome::BounceBack;
    }
    match SwipeDirection::of(delta_x) {
        Some(direction) => Outcome::SwipeOut(direction),
        None => Outcome::BounceBack,
    }
}
