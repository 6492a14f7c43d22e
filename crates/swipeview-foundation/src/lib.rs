//! Swipe-to-dismiss gesture recognition.
//!
//! Turns a stream of pointer events into a single decision per contact:
//! dismiss the surface (swipe out) or return it to rest (bounce back).
//! Rendering, event delivery and gesture arbitration belong to the host and
//! are reached through the traits in [`presenter`].

pub mod animated_presenter;
pub mod classifier;
pub mod config;
pub mod gesture_constants;
pub mod input;
pub mod presenter;
pub mod recognizer;
pub mod resolver;
pub mod thresholds;
pub mod velocity_tracker;
pub mod visual;

pub use animated_presenter::AnimatedPresenter;
pub use classifier::{ClassifyResult, GestureClassifier, GestureState};
pub use config::{DirectionSelector, SwipeConfig, SwipeOutTiming};
pub use input::{GestureSample, PointerEventKind, PointerId, PointerInput};
pub use presenter::{
    GestureArbiter, Presenter, SwipeEvent, SwipeListener, TransitionCompletion, TransitionRequest,
};
pub use recognizer::{GesturePhase, SwipeRecognizer};
pub use resolver::{resolve, Outcome, SwipeDirection};
pub use thresholds::SizeDerivedThresholds;
pub use velocity_tracker::VelocityEstimator;
pub use visual::{live_effect, SurfaceVisual};

pub use swipeview_animation::{Easing, TransitionSpec};

pub mod prelude {
    pub use super::{
        DirectionSelector, GestureArbiter, GestureSample, Outcome, PointerInput, Presenter,
        SwipeConfig, SwipeDirection, SwipeListener, SwipeRecognizer, TransitionCompletion,
        TransitionRequest,
    };
}
