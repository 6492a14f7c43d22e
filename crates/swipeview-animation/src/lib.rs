//! Transition primitives for SwipeView.
//!
//! `animation` holds the easing vocabulary, `driver` runs a single
//! supersedable transition against host-provided frame times.

pub mod animation;
pub mod driver;

pub use animation::{Easing, Lerp, TransitionSpec};
pub use driver::{TransitionDriver, Tween};
