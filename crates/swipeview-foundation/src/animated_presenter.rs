//! Reference [`Presenter`] that animates the surface on host frames.
//!
//! The host reads [`AnimatedPresenter::visual`] when it draws and calls
//! [`AnimatedPresenter::advance`] once per frame while
//! [`AnimatedPresenter::is_animating`] is true.

use crate::presenter::{Presenter, TransitionCompletion, TransitionRequest};
use crate::visual::SurfaceVisual;
use swipeview_animation::TransitionDriver;

pub struct AnimatedPresenter {
    driver: TransitionDriver<SurfaceVisual>,
}

impl Default for AnimatedPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatedPresenter {
    pub fn new() -> Self {
        Self {
            driver: TransitionDriver::new(SurfaceVisual::REST),
        }
    }

    /// What the surface should look like right now.
    pub fn visual(&self) -> SurfaceVisual {
        *self.driver.value()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Steps the running transition to `frame_time_nanos`. Settling the
    /// transition reports its completion from inside this call.
    pub fn advance(&mut self, frame_time_nanos: u64) -> SurfaceVisual {
        self.driver.advance(frame_time_nanos)
    }

    /// Like [`advance`](Self::advance), on the presenter's own clock.
    pub fn tick_now(&mut self) -> SurfaceVisual {
        self.driver.tick_now()
    }
}

impl Presenter for AnimatedPresenter {
    fn apply_live_effect(&mut self, translation_x: f32, alpha: f32) {
        // Snapping supersedes a transition still running from an earlier
        // gesture; its completion is dropped.
        self.driver.snap_to(SurfaceVisual::new(translation_x, alpha));
    }

    fn run_transition(&mut self, request: TransitionRequest, on_complete: TransitionCompletion) {
        log::trace!(
            "transition to {:?} over {}ms",
            request.target(),
            request.spec.duration_millis
        );
        self.driver.start(request.target(), request.spec, move || on_complete.complete());
    }
}
