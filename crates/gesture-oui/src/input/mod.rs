//! Hand motion input
//!
//! Turns hand-tracking lifecycle events into directional gesture events:
//! - Motion sources and their lifecycle events
//! - Swipe direction detection
//! - Gesture event fan-out to subscribers
//! - Debug trail of classified directions

mod bus;
mod detector;
mod direction;
mod event;
mod source;
mod trail;

pub use bus::{GestureBus, SubscriptionId};
pub use detector::{GestureDetector, DEFAULT_THRESHOLD};
pub use direction::Direction;
pub use event::{GestureEvent, GestureEventType, MotionEvent};
pub use source::{MotionSource, ScriptedMotionSource};
pub use trail::GestureTrail;
