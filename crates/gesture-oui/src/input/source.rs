//! Hand-tracking motion sources

use std::collections::VecDeque;

use crate::error::{InputError, Result};
use crate::spatial::{CameraAxes, Point3D};

use super::MotionEvent;

/// A device that reports hand lifecycle events.
///
/// Events are only delivered between [`attach`](MotionSource::attach) and
/// [`detach`](MotionSource::detach).
pub trait MotionSource {
    /// Start delivering events
    fn attach(&mut self) -> Result<()>;

    /// Stop delivering events
    fn detach(&mut self);

    /// Next pending event, if any
    fn poll_event(&mut self) -> Option<MotionEvent>;
}

/// Motion source replaying a prepared list of events.
///
/// Used for replaying recorded traces and in tests.
#[derive(Debug, Default, Clone)]
pub struct ScriptedMotionSource {
    pending: VecDeque<MotionEvent>,
    attached: bool,
}

impl ScriptedMotionSource {
    pub fn new(events: impl IntoIterator<Item = MotionEvent>) -> Self {
        Self {
            pending: events.into_iter().collect(),
            attached: false,
        }
    }

    pub fn push(&mut self, event: MotionEvent) {
        self.pending.push_back(event);
    }

    /// Queue a full press/move/release swipe through `path`, starting at
    /// `start` and measured with fixed head axes.
    pub fn push_swipe(&mut self, start: Point3D, path: &[Point3D], axes: CameraAxes) {
        self.push(MotionEvent::Detected {
            position: Some(start),
        });
        self.push(MotionEvent::Pressed);
        for position in path {
            self.push(MotionEvent::Updated {
                position: Some(*position),
                axes,
            });
        }
        self.push(MotionEvent::Released);
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl MotionSource for ScriptedMotionSource {
    fn attach(&mut self) -> Result<()> {
        if self.attached {
            return Err(InputError::SourceUnavailable(
                "scripted source already attached".to_string(),
            ));
        }
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn poll_event(&mut self) -> Option<MotionEvent> {
        if !self.attached {
            return None;
        }
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_source_is_silent() {
        let mut source = ScriptedMotionSource::new([MotionEvent::Pressed]);
        assert_eq!(source.poll_event(), None);
        source.attach().unwrap();
        assert_eq!(source.poll_event(), Some(MotionEvent::Pressed));
        assert_eq!(source.poll_event(), None);
    }

    #[test]
    fn test_double_attach_fails() {
        let mut source = ScriptedMotionSource::default();
        source.attach().unwrap();
        assert!(matches!(source.attach(), Err(InputError::SourceUnavailable(_))));
    }

    #[test]
    fn test_push_swipe_brackets_path() {
        let mut source = ScriptedMotionSource::default();
        source.push_swipe(
            Point3D::ORIGIN,
            &[Point3D::new(0.1, 0.0, 0.0)],
            CameraAxes::IDENTITY,
        );
        assert_eq!(source.remaining(), 4);
    }
}
