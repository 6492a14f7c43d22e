//! Testing utilities and harness for SwipeView

pub mod assertions;
pub mod recorders;
pub mod script;

pub use assertions::{assert_approx_eq, assert_events};
pub use recorders::{RecordingArbiter, RecordingListener, RecordingPresenter};
pub use script::GestureScript;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::recorders::*;
    pub use crate::script::*;
}
