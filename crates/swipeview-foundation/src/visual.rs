//! Maps a live drag to the translation and opacity shown under the finger.

use crate::config::SwipeConfig;
use crate::gesture_constants::MIN_FADE_ALPHA;
use swipeview_animation::Lerp;

/// Translation and opacity of the swiped surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVisual {
    pub translation_x: f32,
    pub alpha: f32,
}

impl SurfaceVisual {
    pub const REST: Self = Self {
        translation_x: 0.0,
        alpha: 1.0,
    };

    pub fn new(translation_x: f32, alpha: f32) -> Self {
        Self {
            translation_x,
            alpha,
        }
    }
}

impl Default for SurfaceVisual {
    fn default() -> Self {
        Self::REST
    }
}

impl Lerp for SurfaceVisual {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            translation_x: self.translation_x.lerp(&target.translation_x, fraction),
            alpha: self.alpha.lerp(&target.alpha, fraction),
        }
    }
}

/// Visual for a drag of `delta_x` against a swipe-out distance.
///
/// Displacement toward a direction that is not allowed is shown as zero,
/// whether or not the contact has committed. The fade scales linearly from
/// alpha 1 at rest to [`MIN_FADE_ALPHA`] at the swipe-out distance. A
/// swipe-out distance of zero or less counts as already reached.
pub fn live_effect(delta_x: f32, config: &SwipeConfig, swipe_out_distance: f32) -> SurfaceVisual {
    let translation_x = if config.swipe_direction.permits(delta_x) {
        delta_x
    } else {
        0.0
    };

    let alpha = if config.fades(translation_x) {
        let progress = if swipe_out_distance > 0.0 {
            (translation_x.abs() / swipe_out_distance).min(1.0)
        } else {
            1.0
        };
        1.0 - (1.0 - MIN_FADE_ALPHA) * progress
    } else {
        1.0
    };

    SurfaceVisual {
        translation_x,
        alpha,
    }
}
