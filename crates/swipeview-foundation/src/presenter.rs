//! Collaborator boundaries of the recognizer.
//!
//! The recognizer never draws and never owns the event stream. It asks a
//! [`Presenter`] to show translation and opacity, asks a [`GestureArbiter`]
//! for exclusive ownership of the contact, and reports progress to a
//! [`SwipeListener`].

use crate::resolver::Outcome;
use crate::visual::SurfaceVisual;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use swipeview_animation::TransitionSpec;

/// Host notifications, in the order a gesture can produce them:
/// `SwipeStart`, then either `WillBeSwipedOut`/`SwipedOut` or
/// `WillBounceBack`/`BouncedBack`. Each fires at most once per gesture.
pub trait SwipeListener {
    /// The contact was recognized as a swipe.
    fn on_swipe_start(&self) {}
    /// The release dismisses the surface; the exit transition is starting.
    fn on_will_be_swiped_out(&self) {}
    /// The exit transition settled.
    fn on_swiped_out(&self) {}
    /// A recognized swipe is returning to rest. Never sent for a contact
    /// that was not recognized as a swipe.
    fn on_will_bounce_back(&self) {}
    /// The return transition settled.
    fn on_bounced_back(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeEvent {
    SwipeStart,
    WillBeSwipedOut,
    SwipedOut,
    WillBounceBack,
    BouncedBack,
}

impl SwipeEvent {
    pub fn dispatch(self, listener: &dyn SwipeListener) {
        match self {
            SwipeEvent::SwipeStart => listener.on_swipe_start(),
            SwipeEvent::WillBeSwipedOut => listener.on_will_be_swiped_out(),
            SwipeEvent::SwipedOut => listener.on_swiped_out(),
            SwipeEvent::WillBounceBack => listener.on_will_bounce_back(),
            SwipeEvent::BouncedBack => listener.on_bounced_back(),
        }
    }
}

/// Renders the surface.
pub trait Presenter {
    /// Shows the surface at this translation and opacity right away.
    /// Called on every move; applying the same values twice changes nothing.
    fn apply_live_effect(&mut self, translation_x: f32, alpha: f32);

    /// Runs a timed transition to the request's target.
    ///
    /// Call [`TransitionCompletion::complete`] once the surface settles. A
    /// transition superseded by a later live effect or transition should
    /// drop its completion instead.
    fn run_transition(&mut self, request: TransitionRequest, on_complete: TransitionCompletion);
}

/// Mediates exclusive ownership of a contact among competing recognizers,
/// such as an enclosing list that scrolls vertically.
pub trait GestureArbiter {
    /// `true` asks competitors to leave the contact alone; `false` gives it
    /// back. Called on every tracked move, so implementations must be
    /// idempotent.
    fn claim_exclusive_gesture(&mut self, claim: bool);
}

/// Hosts without competing recognizers.
impl GestureArbiter for () {
    fn claim_exclusive_gesture(&mut self, _claim: bool) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub target_translation_x: f32,
    pub target_alpha: f32,
    pub spec: TransitionSpec,
}

impl TransitionRequest {
    pub fn new(target_translation_x: f32, target_alpha: f32, spec: TransitionSpec) -> Self {
        Self {
            target_translation_x,
            target_alpha,
            spec,
        }
    }

    pub fn target(&self) -> SurfaceVisual {
        SurfaceVisual::new(self.target_translation_x, self.target_alpha)
    }
}

/// Routes listener notifications and filters completions of transitions
/// that belong to an earlier gesture.
#[derive(Default)]
pub(crate) struct CompletionRouter {
    sequence: Cell<u64>,
    in_flight: Cell<Option<(u64, Outcome)>>,
    listener: RefCell<Option<Rc<dyn SwipeListener>>>,
}

impl CompletionRouter {
    pub(crate) fn sequence(&self) -> u64 {
        self.sequence.get()
    }

    /// Starts a new gesture. Completions issued before this point go stale.
    pub(crate) fn begin_gesture(&self) -> u64 {
        let sequence = self.sequence.get().wrapping_add(1);
        self.sequence.set(sequence);
        if let Some((stale, outcome)) = self.in_flight.take() {
            log::debug!(
                "gesture {} supersedes in-flight {:?} of gesture {}",
                sequence,
                outcome,
                stale
            );
        }
        sequence
    }

    pub(crate) fn in_flight(&self) -> Option<Outcome> {
        self.in_flight.get().map(|(_, outcome)| outcome)
    }

    pub(crate) fn set_listener(&self, listener: Option<Rc<dyn SwipeListener>>) {
        *self.listener.borrow_mut() = listener;
    }

    pub(crate) fn notify(&self, event: SwipeEvent) {
        // Clone out so a listener may replace itself from inside a callback.
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            event.dispatch(listener.as_ref());
        }
    }

    /// Completion for the current gesture's settling transition.
    /// `notify` is false for a bounce-back of a contact that never committed.
    pub(crate) fn completion(
        router: &Rc<Self>,
        outcome: Outcome,
        notify: bool,
    ) -> TransitionCompletion {
        let sequence = router.sequence.get();
        router.in_flight.set(Some((sequence, outcome)));
        TransitionCompletion {
            router: Rc::clone(router),
            sequence,
            outcome,
            notify,
        }
    }
}

/// One-shot completion handle for a settling transition.
///
/// Consumed by [`complete`](Self::complete), so it can be reported at most
/// once. Dropping it reports nothing.
pub struct TransitionCompletion {
    router: Rc<CompletionRouter>,
    sequence: u64,
    outcome: Outcome,
    notify: bool,
}

impl TransitionCompletion {
    /// Gesture this transition settles.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether this completion still belongs to the latest gesture.
    pub fn is_current(&self) -> bool {
        self.sequence == self.router.sequence()
    }

    /// Reports that the transition settled. Discarded when a newer
    /// contact has started since the transition was requested.
    pub fn complete(self) {
        if !self.is_current() {
            log::debug!(
                "discarding {:?} completion of stale gesture {} (current {})",
                self.outcome,
                self.sequence,
                self.router.sequence()
            );
            return;
        }
        self.router.in_flight.set(None);
        if !self.notify {
            return;
        }
        let event = match self.outcome {
            Outcome::SwipeOut(_) => SwipeEvent::SwipedOut,
            Outcome::BounceBack => SwipeEvent::BouncedBack,
        };
        log::debug!("gesture {} settled: {:?}", self.sequence, event);
        self.router.notify(event);
    }
}

impl fmt::Debug for TransitionCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionCompletion")
            .field("sequence", &self.sequence)
            .field("outcome", &self.outcome)
            .field("notify", &self.notify)
            .finish()
    }
}
