//! Frame-driven transition runner.
//!
//! The driver holds at most one running transition. Starting a new one
//! supersedes the old: the old completion is dropped and never fires.
//! Time only moves when the host calls [`TransitionDriver::advance`] (or
//! [`TransitionDriver::tick_now`]), so tests can step frames explicitly.

use crate::animation::{Lerp, TransitionSpec};
use web_time::Instant;

/// A start/target pair evaluated over a [`TransitionSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    pub start: T,
    pub target: T,
    pub spec: TransitionSpec,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(start: T, target: T, spec: TransitionSpec) -> Self {
        Self {
            start,
            target,
            spec,
        }
    }

    /// Value after `elapsed_nanos` since the tween started.
    pub fn value_at(&self, elapsed_nanos: u64) -> T {
        let linear = self.spec.linear_progress(elapsed_nanos);
        if linear >= 1.0 {
            return self.target.clone();
        }
        let progress = self.spec.easing.transform(linear);
        self.start.lerp(&self.target, progress)
    }

    pub fn is_finished(&self, elapsed_nanos: u64) -> bool {
        self.spec.linear_progress(elapsed_nanos) >= 1.0
    }
}

struct RunningTransition<T> {
    tween: Tween<T>,
    /// Set from the first frame after `start`.
    start_time_nanos: Option<u64>,
    on_finished: Option<Box<dyn FnOnce()>>,
}

/// Runs one transition at a time for a value of type `T`.
pub struct TransitionDriver<T> {
    current: T,
    running: Option<RunningTransition<T>>,
    clock_origin: Instant,
}

impl<T: Lerp + Clone> TransitionDriver<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            running: None,
            clock_origin: Instant::now(),
        }
    }

    /// Current value, as of the last frame.
    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Target of the running transition, if any.
    pub fn target(&self) -> Option<&T> {
        self.running.as_ref().map(|running| &running.tween.target)
    }

    /// Starts a transition from the current value to `target`.
    ///
    /// `on_finished` runs exactly once, from the frame that settles the
    /// transition. If another transition starts first, or the driver snaps,
    /// it is dropped without running.
    pub fn start(&mut self, target: T, spec: TransitionSpec, on_finished: impl FnOnce() + 'static) {
        let tween = Tween::new(self.current.clone(), target, spec);
        self.running = Some(RunningTransition {
            tween,
            start_time_nanos: None,
            on_finished: Some(Box::new(on_finished)),
        });
    }

    /// Jumps to `value`, cancelling any running transition.
    pub fn snap_to(&mut self, value: T) {
        self.running = None;
        self.current = value;
    }

    /// Moves the running transition to `frame_time_nanos` and returns the
    /// resulting value. Frame times are expected to be monotonic; the first
    /// frame after `start` becomes the transition's time origin.
    pub fn advance(&mut self, frame_time_nanos: u64) -> T {
        let Some(running) = self.running.as_mut() else {
            return self.current.clone();
        };

        let start_time = *running.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        self.current = running.tween.value_at(elapsed);

        if running.tween.is_finished(elapsed) {
            let on_finished = running.on_finished.take();
            self.running = None;
            if let Some(on_finished) = on_finished {
                on_finished();
            }
        }

        self.current.clone()
    }

    /// Advances using the driver's own monotonic clock.
    pub fn tick_now(&mut self) -> T {
        let nanos = self.clock_origin.elapsed().as_nanos();
        self.advance(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl<T: Lerp + Clone + Default> Default for TransitionDriver<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
