//! gesture-oui: mid-air gesture input for optical displays
//!
//! This crate turns tracked hand motion into typed input:
//! - Head-relative spatial primitives
//! - Directional swipe detection with drift suppression
//! - A keypad-style mapping from swipe patterns to symbols
//! - A validating IPv4 address editor driven by those symbols
//! - Feedback hooks for rendering and audio cues

pub mod entry;
pub mod error;
pub mod feedback;
pub mod input;
pub mod keymap;
pub mod pipeline;
pub mod spatial;

// Re-export commonly used types
pub use entry::{is_valid_input, EntryOutcome, IpEntry, DEFAULT_PROMPT};
pub use error::InputError;
pub use feedback::{Cue, Feedback, NullFeedback, RecordingFeedback, COMPLETION_CUES};
pub use input::{
    Direction, GestureBus, GestureDetector, GestureEvent, GestureEventType, GestureTrail,
    MotionEvent, MotionSource, ScriptedMotionSource, SubscriptionId, DEFAULT_THRESHOLD,
};
pub use keymap::{Symbol, PATTERN_TABLE};
pub use pipeline::GestureInput;
pub use spatial::{CameraAxes, Point3D, Vector3D};
