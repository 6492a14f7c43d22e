//! Swipe-to-dismiss state machine.
//!
//! A contact goes `Idle -> Tracking -> Committed` while the finger is down
//! and resolves exactly once when it is released or cancelled. Resolution
//! returns the machine to Idle immediately; the settling transition runs on
//! the presenter and reports back through a [`TransitionCompletion`] tagged
//! with the gesture's sequence number, so a completion that arrives after
//! the next contact started is dropped instead of leaking into it.
//!
//! Hosts with an intercept/handle split (a parent peeks at events before a
//! child sees them) call [`SwipeRecognizer::should_claim_gesture`] from the
//! intercept side and [`SwipeRecognizer::handle_sample`] from the handling
//! side. Hosts without that split only call `handle_sample`. Delivering the
//! same event to both is harmless.

use crate::classifier::{ClassifyResult, GestureClassifier, GestureState};
use crate::config::SwipeConfig;
use crate::gesture_constants::OFFSCREEN_FALLBACK_DISTANCE;
use crate::input::{PointerEventKind, PointerId, PointerInput};
use crate::presenter::{
    CompletionRouter, GestureArbiter, Presenter, SwipeEvent, SwipeListener, TransitionRequest,
};
use crate::resolver::{resolve, Outcome};
use crate::thresholds::SizeDerivedThresholds;
use crate::velocity_tracker::VelocityEstimator;
use crate::visual::live_effect;
use smallvec::SmallVec;
use std::rc::Rc;

/// Where the machine is, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No contact, nothing settling.
    Idle,
    /// A contact is down but has not been recognized as a swipe.
    Tracking,
    /// A contact is down and latched as a swipe.
    Committed,
    /// No contact; the transition for this outcome is still running.
    Settling(Outcome),
}

pub struct SwipeRecognizer<P, A = ()> {
    config: SwipeConfig,
    /// Config set mid-contact, applied once the contact resolves.
    pending_config: Option<SwipeConfig>,
    surface_width: Option<f32>,
    thresholds: SizeDerivedThresholds,
    classifier: GestureClassifier,
    velocity: VelocityEstimator,
    /// Last event fed to the classifier, so a re-delivery is recognized.
    last_tracked: Option<(PointerInput, ClassifyResult)>,
    /// Last release processed, so a re-delivered Up/Cancel is recognized.
    last_released: Option<PointerInput>,
    /// Pointers that went down while another contact was active.
    ignored_pointers: SmallVec<[PointerId; 4]>,
    router: Rc<CompletionRouter>,
    last_outcome: Option<Outcome>,
    presenter: P,
    arbiter: A,
}

impl<P: Presenter, A: GestureArbiter> SwipeRecognizer<P, A> {
    pub fn new(presenter: P, arbiter: A) -> Self {
        Self::with_config(presenter, arbiter, SwipeConfig::default())
    }

    pub fn with_config(presenter: P, arbiter: A, config: SwipeConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            pending_config: None,
            surface_width: None,
            thresholds: SizeDerivedThresholds::resolve(None, &config),
            classifier: GestureClassifier::new(config.touch_slop),
            velocity: VelocityEstimator::new(),
            last_tracked: None,
            last_released: None,
            ignored_pointers: SmallVec::new(),
            router: Rc::new(CompletionRouter::default()),
            last_outcome: None,
            presenter,
            arbiter,
        }
    }

    /// Config in effect for the current (or next) contact.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replaces the configuration. While a contact is active the change is
    /// held back and applied when the contact resolves.
    pub fn set_config(&mut self, config: SwipeConfig) {
        let config = config.sanitized();
        if self.classifier.is_active() {
            log::debug!("deferring config change until the contact resolves");
            self.pending_config = Some(config);
        } else {
            self.pending_config = None;
            self.apply_config(config);
        }
    }

    pub fn set_listener(&mut self, listener: Rc<dyn SwipeListener>) {
        self.router.set_listener(Some(listener));
    }

    pub fn clear_listener(&mut self) {
        self.router.set_listener(None);
    }

    /// Recomputes the swipe-out thresholds for a new surface width.
    /// Non-finite or negative widths are ignored.
    pub fn on_surface_width_changed(&mut self, width: f32) -> SizeDerivedThresholds {
        if !width.is_finite() || width < 0.0 {
            log::warn!("ignoring surface width {}", width);
            return self.thresholds;
        }
        self.surface_width = Some(width);
        self.thresholds = SizeDerivedThresholds::resolve(self.surface_width, &self.config);
        log::debug!("surface width {} -> thresholds {:?}", width, self.thresholds);
        self.thresholds
    }

    pub fn thresholds(&self) -> SizeDerivedThresholds {
        self.thresholds
    }

    pub fn phase(&self) -> GesturePhase {
        match self.classifier.state() {
            Some(state) if state.committed => GesturePhase::Committed,
            Some(_) => GesturePhase::Tracking,
            None => match self.router.in_flight() {
                Some(outcome) => GesturePhase::Settling(outcome),
                None => GesturePhase::Idle,
            },
        }
    }

    pub fn gesture_state(&self) -> Option<&GestureState> {
        self.classifier.state()
    }

    /// Outcome of the most recently released contact.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Sequence number of the latest contact; 0 before the first one.
    pub fn sequence(&self) -> u64 {
        self.router.sequence()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn arbiter(&self) -> &A {
        &self.arbiter
    }

    pub fn arbiter_mut(&mut self) -> &mut A {
        &mut self.arbiter
    }

    /// Intercept-side entry point: returns true while the contact is a
    /// recognized swipe that should be taken from competing handlers.
    ///
    /// Starts contacts on Down and classifies moves. An Up or Cancel ends
    /// the contact here as well: when a child consumes the contact, the
    /// intercept stage is the only one that sees the release.
    pub fn should_claim_gesture(&mut self, input: &PointerInput) -> bool {
        match input.kind {
            PointerEventKind::Down => {
                self.on_down(input);
                false
            }
            PointerEventKind::Move => self.track(input).is_some_and(|result| result.claim),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.release(input);
                false
            }
        }
    }

    /// Handling-side entry point: starts contacts, shows the live drag and
    /// resolves the contact on release or cancel.
    pub fn handle_sample(&mut self, input: &PointerInput) {
        match input.kind {
            PointerEventKind::Down => self.on_down(input),
            PointerEventKind::Move => {
                if let Some(result) = self.track(input) {
                    let visual = live_effect(
                        result.delta_x,
                        &self.config,
                        self.thresholds.swipe_out_distance,
                    );
                    log::trace!("live effect {:?}", visual);
                    self.presenter.apply_live_effect(visual.translation_x, visual.alpha);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.release(input),
        }
    }

    fn on_down(&mut self, input: &PointerInput) {
        if self.is_redelivery(input) {
            return;
        }
        if let Some(active) = self.classifier.state().map(|state| state.pointer) {
            if active != input.id {
                log::warn!(
                    "ignoring pointer {} while pointer {} is down",
                    input.id,
                    active
                );
                if !self.ignored_pointers.contains(&input.id) {
                    self.ignored_pointers.push(input.id);
                }
                return;
            }
            log::debug!("pointer {} went down again without a release", input.id);
            self.cancel_active_contact();
        }
        self.begin_contact(input);
    }

    /// Resolves the active contact as a cancel at its last tracked position.
    fn cancel_active_contact(&mut self) {
        let Some((last, _)) = self.last_tracked else {
            return;
        };
        let cancel = PointerInput::cancel(last.sample.raw_x, last.sample.timestamp_millis)
            .with_pointer(last.id);
        self.release(&cancel);
    }

    fn begin_contact(&mut self, input: &PointerInput) {
        self.ignored_pointers.retain(|id| *id != input.id);
        self.last_released = None;
        self.apply_pending_config();

        let sequence = self.router.begin_gesture();
        self.classifier.on_contact_start(input.id, input.sample);
        self.velocity.reset();
        self.velocity.add_sample(input.id, input.sample);
        self.last_tracked = Some((
            *input,
            ClassifyResult {
                delta_x: 0.0,
                newly_committed: false,
                claim: false,
            },
        ));
        log::debug!("gesture {} started at x={}", sequence, input.sample.raw_x);
    }

    /// Feeds a move of the active contact to the estimator and classifier.
    /// Returns `None` for events that do not belong to the active contact.
    fn track(&mut self, input: &PointerInput) -> Option<ClassifyResult> {
        if self.ignored_pointers.contains(&input.id) {
            return None;
        }
        let Some(state) = self.classifier.state() else {
            self.missing_contact(input);
            return None;
        };
        if state.pointer != input.id {
            log::trace!("ignoring {} from inactive pointer", input);
            return None;
        }
        if let Some((last, result)) = self.last_tracked {
            if last == *input {
                return Some(result);
            }
        }

        self.velocity.add_sample(input.id, input.sample);
        let result = self
            .classifier
            .on_contact_move(input.sample, self.config.swipe_direction);
        if result.newly_committed {
            log::debug!(
                "gesture {} committed at delta {}",
                self.router.sequence(),
                result.delta_x
            );
            self.router.notify(SwipeEvent::SwipeStart);
        }
        self.arbiter.claim_exclusive_gesture(result.claim);
        log::trace!("{} -> {:?}", input, result);

        self.last_tracked = Some((*input, result));
        Some(result)
    }

    fn release(&mut self, input: &PointerInput) {
        if self.last_released == Some(*input) {
            return;
        }
        if let Some(index) = self.ignored_pointers.iter().position(|id| *id == input.id) {
            self.ignored_pointers.swap_remove(index);
            self.last_released = Some(*input);
            return;
        }
        match self.classifier.state() {
            None => {
                self.missing_contact(input);
                return;
            }
            Some(state) if state.pointer != input.id => {
                log::trace!("ignoring {} from inactive pointer", input);
                return;
            }
            Some(_) => {}
        }

        self.velocity.add_sample(input.id, input.sample);
        let velocity = self.velocity.current_velocity(input.id);
        let Some(state) = self.classifier.on_contact_end(input.sample) else {
            return;
        };
        self.velocity.reset();
        self.last_tracked = None;
        self.last_released = Some(*input);

        let delta_x = state.current_delta_x;
        let outcome = resolve(
            delta_x,
            velocity,
            self.config.swipe_direction,
            &self.thresholds,
        );
        self.last_outcome = Some(outcome);
        log::debug!(
            "gesture {} {} with delta {} at {}px/s: {:?}",
            self.router.sequence(),
            if input.kind == PointerEventKind::Cancel {
                "cancelled"
            } else {
                "released"
            },
            delta_x,
            velocity,
            outcome
        );

        if state.committed {
            self.arbiter.claim_exclusive_gesture(false);
        }

        match outcome {
            Outcome::SwipeOut(direction) => {
                self.router.notify(SwipeEvent::WillBeSwipedOut);
                let distance = self
                    .surface_width
                    .filter(|width| *width > 0.0)
                    .unwrap_or(OFFSCREEN_FALLBACK_DISTANCE);
                let target_x = direction.sign() * distance;
                let spec = self.config.swipe_out.spec_for(target_x - delta_x, velocity);
                let completion = CompletionRouter::completion(&self.router, outcome, true);
                self.presenter
                    .run_transition(TransitionRequest::new(target_x, 0.0, spec), completion);
            }
            Outcome::BounceBack => {
                if state.committed {
                    self.router.notify(SwipeEvent::WillBounceBack);
                }
                let completion =
                    CompletionRouter::completion(&self.router, outcome, state.committed);
                self.presenter.run_transition(
                    TransitionRequest::new(0.0, 1.0, self.config.bounce_back),
                    completion,
                );
            }
        }

        self.apply_pending_config();
    }

    fn is_redelivery(&self, input: &PointerInput) -> bool {
        self.classifier.is_active() && self.last_tracked.is_some_and(|(last, _)| last == *input)
    }

    fn missing_contact(&self, input: &PointerInput) {
        log::warn!("{} delivered without an active contact", input);
        debug_assert!(
            self.classifier.is_active(),
            "{} delivered without an active contact",
            input
        );
    }

    fn apply_pending_config(&mut self) {
        if let Some(config) = self.pending_config.take() {
            log::debug!("applying deferred config change");
            self.apply_config(config);
        }
    }

    fn apply_config(&mut self, config: SwipeConfig) {
        self.config = config;
        self.classifier.set_touch_slop(config.touch_slop);
        self.thresholds = SizeDerivedThresholds::resolve(self.surface_width, &config);
    }
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod tests;
