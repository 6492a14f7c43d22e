//! Recording doubles for the recognizer's collaborators.

use std::cell::RefCell;
use std::collections::VecDeque;
use swipeview_foundation::{
    GestureArbiter, Presenter, SurfaceVisual, SwipeEvent, SwipeListener, TransitionCompletion,
    TransitionRequest,
};

/// Presenter that records every request and holds transitions until the
/// test finishes them.
///
/// By default pending transitions stay pending when newer requests arrive,
/// which lets tests deliver a completion after the next contact started.
/// [`RecordingPresenter::superseding`] drops them instead, the way an
/// animating presenter would.
#[derive(Default)]
pub struct RecordingPresenter {
    live_effects: Vec<SurfaceVisual>,
    transitions: Vec<TransitionRequest>,
    pending: VecDeque<TransitionCompletion>,
    supersede: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn superseding() -> Self {
        Self {
            supersede: true,
            ..Self::default()
        }
    }

    pub fn live_effects(&self) -> &[SurfaceVisual] {
        &self.live_effects
    }

    pub fn last_live_effect(&self) -> Option<SurfaceVisual> {
        self.live_effects.last().copied()
    }

    /// Every transition requested so far, oldest first.
    pub fn transitions(&self) -> &[TransitionRequest] {
        &self.transitions
    }

    pub fn last_transition(&self) -> Option<TransitionRequest> {
        self.transitions.last().copied()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Settles the oldest pending transition. Returns false if none was
    /// pending.
    pub fn finish_next(&mut self) -> bool {
        match self.pending.pop_front() {
            Some(completion) => {
                completion.complete();
                true
            }
            None => false,
        }
    }

    /// Settles every pending transition in request order.
    pub fn finish_transitions(&mut self) -> usize {
        let mut finished = 0;
        while self.finish_next() {
            finished += 1;
        }
        finished
    }

    /// Removes pending completions without settling them.
    pub fn take_pending(&mut self) -> Vec<TransitionCompletion> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.live_effects.clear();
        self.transitions.clear();
        self.pending.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn apply_live_effect(&mut self, translation_x: f32, alpha: f32) {
        if self.supersede {
            self.pending.clear();
        }
        self.live_effects.push(SurfaceVisual::new(translation_x, alpha));
    }

    fn run_transition(&mut self, request: TransitionRequest, on_complete: TransitionCompletion) {
        if self.supersede {
            self.pending.clear();
        }
        self.transitions.push(request);
        self.pending.push_back(on_complete);
    }
}

/// Arbiter that records every claim.
#[derive(Debug, Default, Clone)]
pub struct RecordingArbiter {
    claims: Vec<bool>,
}

impl RecordingArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claims(&self) -> &[bool] {
        &self.claims
    }

    /// Whether the latest call claimed the contact.
    pub fn is_claimed(&self) -> bool {
        self.claims.last().copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.claims.clear();
    }
}

impl GestureArbiter for RecordingArbiter {
    fn claim_exclusive_gesture(&mut self, claim: bool) {
        self.claims.push(claim);
    }
}

/// Listener that records notifications in order. Share it with the
/// recognizer through an `Rc`.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: RefCell<Vec<SwipeEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SwipeEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: SwipeEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: SwipeEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SwipeListener for RecordingListener {
    fn on_swipe_start(&self) {
        self.record(SwipeEvent::SwipeStart);
    }

    fn on_will_be_swiped_out(&self) {
        self.record(SwipeEvent::WillBeSwipedOut);
    }

    fn on_swiped_out(&self) {
        self.record(SwipeEvent::SwipedOut);
    }

    fn on_will_bounce_back(&self) {
        self.record(SwipeEvent::WillBounceBack);
    }

    fn on_bounced_back(&self) {
        self.record(SwipeEvent::BouncedBack);
    }
}
