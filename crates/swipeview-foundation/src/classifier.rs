//! Decides when a contact stops being an incidental touch and becomes a
//! horizontal swipe.

use crate::config::DirectionSelector;
use crate::input::{GestureSample, PointerId};

/// State of the single live contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub pointer: PointerId,
    /// `raw_x` at contact start.
    pub initial_x: f32,
    /// Latest `raw_x - initial_x`.
    pub current_delta_x: f32,
    /// Latched once the contact is recognized as a swipe; never cleared
    /// before the contact ends.
    pub committed: bool,
}

/// Result of classifying one move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyResult {
    pub delta_x: f32,
    /// True only on the move that latched the commit.
    pub newly_committed: bool,
    /// Whether the recognizer should own the contact exclusively.
    pub claim: bool,
}

#[derive(Clone, Debug)]
pub struct GestureClassifier {
    touch_slop: f32,
    state: Option<GestureState>,
}

impl GestureClassifier {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            state: None,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Takes effect for the next contact onwards.
    pub fn set_touch_slop(&mut self, touch_slop: f32) {
        self.touch_slop = touch_slop;
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_committed(&self) -> bool {
        self.state.is_some_and(|state| state.committed)
    }

    pub fn on_contact_start(&mut self, pointer: PointerId, sample: GestureSample) {
        self.state = Some(GestureState {
            pointer,
            initial_x: sample.raw_x,
            current_delta_x: 0.0,
            committed: false,
        });
    }

    /// Updates the displacement and latches the commit once the drag is
    /// strictly past the slop in a permitted direction.
    ///
    /// Must follow `on_contact_start`. Without an active contact this
    /// asserts in debug builds and reports nothing in release builds.
    pub fn on_contact_move(
        &mut self,
        sample: GestureSample,
        directions: DirectionSelector,
    ) -> ClassifyResult {
        debug_assert!(
            self.state.is_some(),
            "on_contact_move called without an active contact"
        );
        let Some(state) = self.state.as_mut() else {
            return ClassifyResult {
                delta_x: 0.0,
                newly_committed: false,
                claim: false,
            };
        };

        let delta_x = sample.raw_x - state.initial_x;
        state.current_delta_x = delta_x;

        let was_committed = state.committed;
        state.committed =
            was_committed || (delta_x.abs() > self.touch_slop && directions.permits(delta_x));

        ClassifyResult {
            delta_x,
            newly_committed: !was_committed && state.committed,
            claim: state.committed,
        }
    }

    /// Ends the contact, returning its final state with the displacement
    /// measured at `sample`.
    pub fn on_contact_end(&mut self, sample: GestureSample) -> Option<GestureState> {
        let mut state = self.state.take()?;
        state.current_delta_x = sample.raw_x - state.initial_x;
        Some(state)
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
