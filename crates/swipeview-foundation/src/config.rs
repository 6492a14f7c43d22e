//! Swipe configuration.
//!
//! Hosts build a [`SwipeConfig`] once and hand it to the recognizer. The
//! recognizer never mutates it mid-gesture: a config set while a contact is
//! active is held back until the contact resolves.

use crate::gesture_constants::{
    BOUNCE_BACK_DURATION_MILLIS, MAX_SWIPE_OUT_DURATION_MILLIS, MIN_SWIPE_OUT_DURATION_MILLIS,
    MIN_SWIPE_OUT_THRESHOLD, PAGING_TOUCH_SLOP,
};
use swipeview_animation::{Easing, TransitionSpec};

/// Which horizontal directions a setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectionSelector {
    Left,
    Right,
    #[default]
    Both,
    None,
}

impl DirectionSelector {
    /// Maps an external setting name. Anything other than `"left"`,
    /// `"right"` or `"both"` selects no direction at all.
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => DirectionSelector::Left,
            "right" => DirectionSelector::Right,
            "both" => DirectionSelector::Both,
            _ => DirectionSelector::None,
        }
    }

    pub fn allows_left(self) -> bool {
        matches!(self, DirectionSelector::Left | DirectionSelector::Both)
    }

    pub fn allows_right(self) -> bool {
        matches!(self, DirectionSelector::Right | DirectionSelector::Both)
    }

    /// Whether a horizontal displacement points into a selected direction.
    /// A zero displacement has no direction and is never permitted.
    pub fn permits(self, delta_x: f32) -> bool {
        (self.allows_left() && delta_x < 0.0) || (self.allows_right() && delta_x > 0.0)
    }
}

impl From<&str> for DirectionSelector {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Timing of the dismiss flight.
///
/// The duration is the remaining distance divided by the release speed,
/// clamped to `[min_duration_millis, max_duration_millis]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOutTiming {
    pub easing: Easing,
    pub min_duration_millis: u64,
    pub max_duration_millis: u64,
}

impl SwipeOutTiming {
    /// Transition spec for flying `remaining_distance` pixels after a
    /// release at `velocity` px/s. Speeds under 1 px/ms count as 1 px/ms.
    pub fn spec_for(&self, remaining_distance: f32, velocity: f32) -> TransitionSpec {
        let speed_per_ms = (velocity.abs() / 1000.0).max(1.0);
        let millis = (remaining_distance.abs() / speed_per_ms).round() as u64;
        let max = self.max_duration_millis.max(self.min_duration_millis);
        TransitionSpec::tween(millis.clamp(self.min_duration_millis, max), self.easing)
    }
}

impl Default for SwipeOutTiming {
    fn default() -> Self {
        Self {
            easing: Easing::Linear,
            min_duration_millis: MIN_SWIPE_OUT_DURATION_MILLIS,
            max_duration_millis: MAX_SWIPE_OUT_DURATION_MILLIS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Directions the surface may be swiped out in.
    pub swipe_direction: DirectionSelector,
    /// Directions in which dragging fades the surface.
    pub opacity_direction: DirectionSelector,
    /// Master switch for the fade; `false` keeps alpha at 1 while dragging.
    pub change_opacity: bool,
    /// Minimum horizontal travel before a contact commits to a swipe.
    pub touch_slop: f32,
    /// Floor for the swipe-out thresholds.
    pub min_threshold: f32,
    /// Fixed swipe-out distance replacing the width-derived one.
    pub swipe_out_distance: Option<f32>,
    /// Fixed swipe-out speed replacing the width-derived one.
    pub swipe_out_speed: Option<f32>,
    pub bounce_back: TransitionSpec,
    pub swipe_out: SwipeOutTiming,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_direction: DirectionSelector::Both,
            opacity_direction: DirectionSelector::Both,
            change_opacity: true,
            touch_slop: PAGING_TOUCH_SLOP,
            min_threshold: MIN_SWIPE_OUT_THRESHOLD,
            swipe_out_distance: None,
            swipe_out_speed: None,
            bounce_back: TransitionSpec::tween(BOUNCE_BACK_DURATION_MILLIS, Easing::EaseInOut),
            swipe_out: SwipeOutTiming::default(),
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swipe_direction(mut self, direction: DirectionSelector) -> Self {
        self.swipe_direction = direction;
        self
    }

    pub fn with_opacity_direction(mut self, direction: DirectionSelector) -> Self {
        self.opacity_direction = direction;
        self
    }

    pub fn with_change_opacity(mut self, change_opacity: bool) -> Self {
        self.change_opacity = change_opacity;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_min_threshold(mut self, min_threshold: f32) -> Self {
        self.min_threshold = min_threshold;
        self
    }

    pub fn with_swipe_out_distance(mut self, distance: f32) -> Self {
        self.swipe_out_distance = Some(distance);
        self
    }

    pub fn with_swipe_out_speed(mut self, speed: f32) -> Self {
        self.swipe_out_speed = Some(speed);
        self
    }

    pub fn with_bounce_back(mut self, spec: TransitionSpec) -> Self {
        self.bounce_back = spec;
        self
    }

    pub fn with_swipe_out_timing(mut self, timing: SwipeOutTiming) -> Self {
        self.swipe_out = timing;
        self
    }

    /// Whether the live fade applies to a drag with this displacement.
    pub fn fades(&self, delta_x: f32) -> bool {
        self.change_opacity && self.opacity_direction.permits(delta_x)
    }

    /// Replaces values no gesture could meaningfully use. Non-finite or
    /// negative slop and floor fall back to their defaults, unusable
    /// overrides are dropped.
    pub fn sanitized(mut self) -> Self {
        if !is_usable(self.touch_slop) {
            log::warn!(
                "ignoring touch slop {}, using {}",
                self.touch_slop,
                PAGING_TOUCH_SLOP
            );
            self.touch_slop = PAGING_TOUCH_SLOP;
        }
        if !is_usable(self.min_threshold) {
            log::warn!(
                "ignoring threshold floor {}, using {}",
                self.min_threshold,
                MIN_SWIPE_OUT_THRESHOLD
            );
            self.min_threshold = MIN_SWIPE_OUT_THRESHOLD;
        }
        if let Some(distance) = self.swipe_out_distance.filter(|d| !is_usable(*d)) {
            log::warn!("ignoring swipe-out distance override {}", distance);
            self.swipe_out_distance = None;
        }
        if let Some(speed) = self.swipe_out_speed.filter(|s| !is_usable(*s)) {
            log::warn!("ignoring swipe-out speed override {}", speed);
            self.swipe_out_speed = None;
        }
        self
    }
}

fn is_usable(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
