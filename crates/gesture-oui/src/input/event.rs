//! Motion source lifecycle events and recognized gesture events

use crate::spatial::{CameraAxes, Point3D};

use super::Direction;

/// Lifecycle event reported by a hand-tracking source.
///
/// `position` is `None` when the source could not resolve a location for
/// that tick.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionEvent {
    /// Hand entered the tracking volume
    Detected { position: Option<Point3D> },
    /// Contact began (air-tap pressed)
    Pressed,
    /// Hand moved; `axes` is the head orientation at this tick
    Updated {
        position: Option<Point3D>,
        axes: CameraAxes,
    },
    /// Contact ended
    Released,
    /// Tracking lost
    Lost,
}

impl MotionEvent {
    pub fn updated(position: Point3D) -> Self {
        MotionEvent::Updated {
            position: Some(position),
            axes: CameraAxes::IDENTITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MotionEvent::Detected { .. } => "detected",
            MotionEvent::Pressed => "pressed",
            MotionEvent::Updated { .. } => "updated",
            MotionEvent::Released => "released",
            MotionEvent::Lost => "lost",
        }
    }
}

/// Phase of a gesture event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEventType {
    /// A new direction was classified while contact is held
    Detecting,
    /// Contact ended; the pattern is final
    Detected,
}

/// A recognized gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEvent {
    pub kind: GestureEventType,
    /// Most recently classified direction
    pub direction: Direction,
    /// Direction codes accumulated since contact began, e.g. "UL"
    pub pattern: String,
}

impl GestureEvent {
    pub fn detecting(direction: Direction, pattern: impl Into<String>) -> Self {
        Self {
            kind: GestureEventType::Detecting,
            direction,
            pattern: pattern.into(),
        }
    }

    pub fn detected(direction: Direction, pattern: impl Into<String>) -> Self {
        Self {
            kind: GestureEventType::Detected,
            direction,
            pattern: pattern.into(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.kind == GestureEventType::Detected
    }
}
