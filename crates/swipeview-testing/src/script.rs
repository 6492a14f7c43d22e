//! Scripted contacts.
//!
//! ```ignore
//! let script = GestureScript::new().down(500.0).move_to(560.0).up(700.0);
//! script.play(&mut recognizer);
//! ```

use swipeview_foundation::{
    GestureArbiter, PointerEventKind, PointerId, PointerInput, Presenter, SwipeRecognizer,
};

/// Default spacing between scripted events, about one 60 Hz frame.
pub const FRAME_MILLIS: i64 = 16;

/// Builds a timed sequence of pointer events for one pointer.
#[derive(Debug, Clone)]
pub struct GestureScript {
    pointer: PointerId,
    now_millis: i64,
    step_millis: i64,
    inputs: Vec<PointerInput>,
}

impl Default for GestureScript {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureScript {
    pub fn new() -> Self {
        Self {
            pointer: 0,
            now_millis: 0,
            step_millis: FRAME_MILLIS,
            inputs: Vec::new(),
        }
    }

    /// Pointer used by the events added after this call.
    pub fn pointer(mut self, id: PointerId) -> Self {
        self.pointer = id;
        self
    }

    /// Time between consecutive events.
    pub fn step(mut self, step_millis: i64) -> Self {
        self.step_millis = step_millis;
        self
    }

    /// Time of the first event.
    pub fn starting_at(mut self, millis: i64) -> Self {
        self.now_millis = millis;
        self
    }

    /// Lets time pass without events.
    pub fn wait(mut self, millis: i64) -> Self {
        self.now_millis += millis;
        self
    }

    pub fn down(self, x: f32) -> Self {
        self.push(PointerEventKind::Down, x)
    }

    pub fn move_to(self, x: f32) -> Self {
        self.push(PointerEventKind::Move, x)
    }

    /// Moves from the last position to `x` in `steps` evenly spaced moves.
    pub fn drag_to(mut self, x: f32, steps: usize) -> Self {
        let from = self.last_x();
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self = self.move_to(from + (x - from) * fraction);
        }
        self
    }

    pub fn up(self, x: f32) -> Self {
        self.push(PointerEventKind::Up, x)
    }

    pub fn cancel(self, x: f32) -> Self {
        self.push(PointerEventKind::Cancel, x)
    }

    pub fn inputs(&self) -> &[PointerInput] {
        &self.inputs
    }

    /// Delivers every event through `handle_sample`, the way a host
    /// without an intercept stage would.
    pub fn play<P: Presenter, A: GestureArbiter>(&self, recognizer: &mut SwipeRecognizer<P, A>) {
        for input in &self.inputs {
            recognizer.handle_sample(input);
        }
    }

    /// Delivers events the way a parent with an intercept stage does:
    /// everything goes to `should_claim_gesture` until it claims the
    /// contact, later events and the release go to `handle_sample`.
    /// Returns whether the contact was claimed.
    pub fn play_intercepted<P: Presenter, A: GestureArbiter>(
        &self,
        recognizer: &mut SwipeRecognizer<P, A>,
    ) -> bool {
        let mut claimed = false;
        for input in &self.inputs {
            if claimed || input.kind.ends_contact() {
                recognizer.handle_sample(input);
            } else {
                claimed = recognizer.should_claim_gesture(input);
            }
        }
        claimed
    }

    fn last_x(&self) -> f32 {
        self.inputs
            .iter()
            .rev()
            .find(|input| input.id == self.pointer)
            .map(|input| input.sample.raw_x)
            .unwrap_or(0.0)
    }

    fn push(mut self, kind: PointerEventKind, x: f32) -> Self {
        if !self.inputs.is_empty() {
            self.now_millis += self.step_millis;
        }
        self.inputs
            .push(PointerInput::new(kind, x, self.now_millis).with_pointer(self.pointer));
        self
    }
}
