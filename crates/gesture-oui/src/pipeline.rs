//! Wiring from a motion source to the address entry

use tracing::{debug, info};

use crate::entry::{EntryOutcome, IpEntry};
use crate::error::{InputError, Result};
use crate::feedback::Feedback;
use crate::input::{
    GestureBus, GestureDetector, GestureEvent, MotionEvent, MotionSource, SubscriptionId,
};

/// Owns the detector, the entry state machine and the gesture subscribers
/// for one listening session.
#[derive(Debug)]
pub struct GestureInput<F: Feedback> {
    detector: GestureDetector,
    entry: IpEntry,
    bus: GestureBus,
    feedback: F,
    listening: bool,
}

impl<F: Feedback> GestureInput<F> {
    pub fn new(detector: GestureDetector, entry: IpEntry, feedback: F) -> Self {
        Self {
            detector,
            entry,
            bus: GestureBus::new(),
            feedback,
            listening: false,
        }
    }

    /// Observe every gesture event before it reaches the entry
    pub fn subscribe(&mut self, listener: impl FnMut(&GestureEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn bus_mut(&mut self) -> &mut GestureBus {
        &mut self.bus
    }

    /// Begin listening to `source`
    pub fn start(&mut self, source: &mut dyn MotionSource) -> Result<()> {
        if self.listening {
            return Err(InputError::AlreadyStarted);
        }
        source.attach()?;
        self.listening = true;
        self.feedback.render(&self.entry.rendered());
        info!(threshold = self.detector.threshold(), "Gesture input started");
        Ok(())
    }

    /// Stop listening to `source`
    pub fn stop(&mut self, source: &mut dyn MotionSource) -> Result<()> {
        if !self.listening {
            return Err(InputError::NotStarted);
        }
        source.detach();
        self.listening = false;
        info!("Gesture input stopped");
        Ok(())
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Drain every event `source` has pending
    pub fn pump(&mut self, source: &mut dyn MotionSource) -> Result<Vec<EntryOutcome>> {
        if !self.listening {
            return Err(InputError::NotStarted);
        }
        let mut outcomes = Vec::new();
        while let Some(event) = source.poll_event() {
            outcomes.extend(self.process(&event));
        }
        Ok(outcomes)
    }

    /// Feed one lifecycle event through detection and entry
    pub fn process(&mut self, event: &MotionEvent) -> Option<EntryOutcome> {
        let gesture = self.detector.handle(event)?;
        debug!(
            kind = ?gesture.kind,
            direction = %gesture.direction,
            pattern = %gesture.pattern,
            "Gesture event"
        );
        self.bus.publish(&gesture);
        Some(self.entry.handle(&gesture, &mut self.feedback))
    }

    /// Abandon the current address and start over
    pub fn reset_entry(&mut self) {
        self.entry.reset();
        self.feedback.render(&self.entry.rendered());
    }

    pub fn detector(&self) -> &GestureDetector {
        &self.detector
    }

    pub fn entry(&self) -> &IpEntry {
        &self.entry
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn into_feedback(self) -> F {
        self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RecordingFeedback;
    use crate::input::ScriptedMotionSource;

    fn input() -> GestureInput<RecordingFeedback> {
        GestureInput::new(
            GestureDetector::new(),
            IpEntry::new().with_prompt(""),
            RecordingFeedback::new(),
        )
    }

    #[test]
    fn test_start_stop_lifecycle() {
        let mut input = input();
        let mut source = ScriptedMotionSource::default();

        assert_eq!(input.pump(&mut source), Err(InputError::NotStarted));
        input.start(&mut source).unwrap();
        assert!(source.is_attached());
        assert_eq!(input.start(&mut source), Err(InputError::AlreadyStarted));

        input.stop(&mut source).unwrap();
        assert!(!source.is_attached());
        assert_eq!(input.stop(&mut source), Err(InputError::NotStarted));
    }

    #[test]
    fn test_motion_without_gesture_yields_nothing() {
        let mut input = input();
        assert_eq!(input.process(&MotionEvent::Pressed), None);
        assert_eq!(input.process(&MotionEvent::Released), None);
        assert!(input.feedback().renders.is_empty());
    }

    #[test]
    fn test_reset_entry_rerenders() {
        let mut input = input();
        input.reset_entry();
        assert_eq!(input.feedback().renders, vec![""]);
    }
}
