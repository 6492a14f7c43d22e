use crate::config::SwipeConfig;
use crate::gesture_constants::UNREACHABLE_THRESHOLD;

/// Distance and speed a release must reach to dismiss the surface.
///
/// Derived from the surface width (half of it in each case) unless the
/// configuration pins a value. Both stay unreachable until a width is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDerivedThresholds {
    /// Logical pixels.
    pub swipe_out_distance: f32,
    /// Logical pixels per second.
    pub swipe_out_speed: f32,
}

impl Default for SizeDerivedThresholds {
    fn default() -> Self {
        Self::UNREACHABLE
    }
}

impl SizeDerivedThresholds {
    pub const UNREACHABLE: Self = Self {
        swipe_out_distance: UNREACHABLE_THRESHOLD,
        swipe_out_speed: UNREACHABLE_THRESHOLD,
    };

    /// Thresholds for a surface of `width`, or for a surface whose width is
    /// not yet known when `width` is `None`.
    pub fn resolve(width: Option<f32>, config: &SwipeConfig) -> Self {
        let floor = config.min_threshold;
        let derived = width
            .map(|width| (width / 2.0).max(floor))
            .unwrap_or(UNREACHABLE_THRESHOLD);
        Self {
            swipe_out_distance: config
                .swipe_out_distance
                .map(|distance| distance.max(floor))
                .unwrap_or(derived),
            swipe_out_speed: config
                .swipe_out_speed
                .map(|speed| speed.max(floor))
                .unwrap_or(derived),
        }
    }

    /// Whether a release with this displacement and velocity travelled far
    /// or fast enough. Both comparisons are inclusive.
    pub fn reached_by(&self, delta_x: f32, velocity: f32) -> bool {
        delta_x.abs() >= self.swipe_out_distance || velocity.abs() >= self.swipe_out_speed
    }
}
