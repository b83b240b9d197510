//! Threshold-based directional swipe detector
//!
//! Tracks hand displacement continuously, including before contact starts,
//! and classifies it into cardinal directions:
//! - Displacement is projected onto the head's right/up axes each tick
//! - Only the dominant axis of a tick accumulates
//! - Motion continuing in the direction already signaled is ignored, so a
//!   direction re-arms only after a reversal or an axis switch
//! - A direction is classified once an accumulator crosses the threshold

use tracing::{debug, trace, warn};

use crate::error::{InputError, Result};
use crate::spatial::{CameraAxes, Point3D};

use super::{Direction, GestureEvent, MotionEvent};

/// Default displacement (in tracking units) needed to classify a direction
pub const DEFAULT_THRESHOLD: f32 = 0.05;

/// Stateful swipe classifier fed by motion source lifecycle events
#[derive(Debug, Clone)]
pub struct GestureDetector {
    threshold: f32,
    /// Contact is held; gesture events are only emitted while true
    session_active: bool,
    last_position: Point3D,
    current_direction: Direction,
    pattern: String,
    accumulated_dx: f32,
    accumulated_dy: f32,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            session_active: false,
            last_position: Point3D::ORIGIN,
            current_direction: Direction::Neutral,
            pattern: String::new(),
            accumulated_dx: 0.0,
            accumulated_dy: 0.0,
        }
    }
}

impl GestureDetector {
    /// Create a detector with the default threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom threshold
    pub fn with_threshold(threshold: f32) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(InputError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            ..Self::default()
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_session_active(&self) -> bool {
        self.session_active
    }

    /// Accumulated (dx, dy) since the last classified direction
    pub fn accumulated(&self) -> (f32, f32) {
        (self.accumulated_dx, self.accumulated_dy)
    }

    /// Dispatch a lifecycle event to the matching handler
    pub fn handle(&mut self, event: &MotionEvent) -> Option<GestureEvent> {
        match event {
            MotionEvent::Detected { position } => {
                self.on_source_detected(*position);
                None
            }
            MotionEvent::Pressed => {
                self.on_source_pressed();
                None
            }
            MotionEvent::Updated { position, axes } => self.on_source_updated(*position, axes),
            MotionEvent::Released => self.on_source_released(),
            MotionEvent::Lost => self.on_source_lost(),
        }
    }

    /// Hand entered tracking: re-anchor and forget any drift.
    ///
    /// A session still open from a previous contact is dropped without
    /// emitting anything.
    pub fn on_source_detected(&mut self, position: Option<Point3D>) {
        match position {
            Some(position) => self.last_position = position,
            None => warn!("Hand detected without a resolvable position"),
        }
        self.session_active = false;
        self.current_direction = Direction::Neutral;
        self.reset_accumulators();
    }

    /// Contact began: open a session, keeping part of the pre-press drift
    pub fn on_source_pressed(&mut self) {
        if self.session_active {
            return;
        }
        self.session_active = true;
        self.pattern.clear();

        // Partial credit for a swipe already under way, capped at half a threshold
        let t = self.threshold;
        self.accumulated_dx = self.accumulated_dx.clamp(-t, t) / 2.0;
        self.accumulated_dy = self.accumulated_dy.clamp(-t, t) / 2.0;
        trace!(
            dx = self.accumulated_dx,
            dy = self.accumulated_dy,
            "Gesture session started"
        );
    }

    /// Hand moved. Runs whether or not a session is active.
    pub fn on_source_updated(
        &mut self,
        position: Option<Point3D>,
        axes: &CameraAxes,
    ) -> Option<GestureEvent> {
        let Some(position) = position else {
            warn!("Hand position unavailable, skipping update");
            return None;
        };

        let diff = position - self.last_position;
        self.last_position = position;
        let (dx, dy) = axes.project(diff);

        if dx.abs() > dy.abs() {
            if !self.is_continuing(dx, Direction::Right, Direction::Left) {
                self.accumulated_dx += dx;
            }
        } else if !self.is_continuing(dy, Direction::Up, Direction::Down) {
            self.accumulated_dy += dy;
        }

        let direction = self.classify();
        if direction.is_neutral() || direction == self.current_direction {
            return None;
        }

        debug!(%direction, "Gesture direction detected");
        self.current_direction = direction;
        self.reset_accumulators();
        if let Some(code) = direction.code() {
            self.pattern.push(code);
        }

        self.session_active
            .then(|| GestureEvent::detecting(direction, self.pattern.clone()))
    }

    /// Contact ended normally
    pub fn on_source_released(&mut self) -> Option<GestureEvent> {
        self.finish_session()
    }

    /// Tracking lost mid-contact; treated the same as a release
    pub fn on_source_lost(&mut self) -> Option<GestureEvent> {
        self.finish_session()
    }

    fn finish_session(&mut self) -> Option<GestureEvent> {
        if !self.session_active {
            return None;
        }

        let event = (!self.current_direction.is_neutral())
            .then(|| GestureEvent::detected(self.current_direction, self.pattern.clone()));
        if event.is_none() {
            trace!("Gesture session ended without a direction");
        }

        self.session_active = false;
        self.current_direction = Direction::Neutral;
        self.reset_accumulators();
        event
    }

    /// True when `delta` pushes further along the direction already signaled
    fn is_continuing(&self, delta: f32, positive: Direction, negative: Direction) -> bool {
        (self.current_direction == positive && delta > 0.0)
            || (self.current_direction == negative && delta < 0.0)
    }

    fn classify(&self) -> Direction {
        let t = self.threshold;
        if self.accumulated_dx > t {
            Direction::Right
        } else if self.accumulated_dx < -t {
            Direction::Left
        } else if self.accumulated_dy > t {
            Direction::Up
        } else if self.accumulated_dy < -t {
            Direction::Down
        } else {
            Direction::Neutral
        }
    }

    fn reset_accumulators(&mut self) {
        self.accumulated_dx = 0.0;
        self.accumulated_dy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GestureEventType;

    fn step(detector: &mut GestureDetector, x: f32, y: f32) -> Option<GestureEvent> {
        detector.on_source_updated(Some(Point3D::new(x, y, 0.0)), &CameraAxes::IDENTITY)
    }

    fn pressed_at_origin() -> GestureDetector {
        let mut detector = GestureDetector::new();
        detector.on_source_detected(Some(Point3D::ORIGIN));
        detector.on_source_pressed();
        detector
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert_eq!(
            GestureDetector::with_threshold(0.0).unwrap_err(),
            InputError::InvalidThreshold(0.0)
        );
        assert!(GestureDetector::with_threshold(f32::NAN).is_err());
        assert!(GestureDetector::with_threshold(0.1).is_ok());
    }

    #[test]
    fn test_right_swipe_emits_detecting_then_detected() {
        let mut detector = pressed_at_origin();
        assert_eq!(step(&mut detector, 0.03, 0.0), None);
        let event = step(&mut detector, 0.06, 0.0).expect("direction classified");
        assert_eq!(event, GestureEvent::detecting(Direction::Right, "R"));
        assert_eq!(step(&mut detector, 0.1, 0.0), None);

        let done = detector.on_source_released().expect("final event");
        assert_eq!(done.kind, GestureEventType::Detected);
        assert_eq!(done.pattern, "R");
        assert!(!detector.is_session_active());
        assert_eq!(detector.current_direction(), Direction::Neutral);
    }

    #[test]
    fn test_continuing_motion_is_suppressed() {
        let mut detector = pressed_at_origin();
        assert!(step(&mut detector, 0.06, 0.0).is_some());
        for i in 2..20 {
            assert_eq!(step(&mut detector, 0.06 * i as f32, 0.0), None);
        }
        assert_eq!(detector.accumulated(), (0.0, 0.0));
        assert_eq!(detector.pattern(), "R");
    }

    #[test]
    fn test_reversal_and_axis_switch_rearm() {
        let mut detector = pressed_at_origin();
        step(&mut detector, 0.06, 0.0);
        let left = step(&mut detector, 0.0, 0.0).expect("reversal");
        assert_eq!(left.direction, Direction::Left);
        let up = step(&mut detector, 0.0, 0.06).expect("axis switch");
        assert_eq!(up, GestureEvent::detecting(Direction::Up, "RLU"));
    }

    #[test]
    fn test_dominant_axis_only_accumulates() {
        let mut detector = pressed_at_origin();
        step(&mut detector, 0.04, 0.03);
        let (dx, dy) = detector.accumulated();
        assert!((dx - 0.04).abs() < 0.0001);
        assert_eq!(dy, 0.0);
    }

    #[test]
    fn test_pending_vertical_drift_does_not_block_horizontal() {
        let mut detector = pressed_at_origin();
        step(&mut detector, 0.0, -0.04);
        let event = step(&mut detector, 0.06, -0.04).unwrap();
        assert_eq!(event.direction, Direction::Right);
    }

    #[test]
    fn test_jitter_emits_nothing() {
        let mut detector = pressed_at_origin();
        for (x, y) in [(0.01, 0.0), (-0.01, 0.01), (0.02, -0.01), (0.0, 0.0)] {
            assert_eq!(step(&mut detector, x, y), None);
        }
        assert_eq!(detector.on_source_released(), None);
        assert!(!detector.is_session_active());
    }

    #[test]
    fn test_pre_press_drift_is_clamped_and_halved() {
        let mut detector = GestureDetector::new();
        detector.on_source_detected(Some(Point3D::ORIGIN));
        step(&mut detector, 0.0, 0.04);
        step(&mut detector, -0.045, 0.04);
        detector.on_source_pressed();
        let (dx, dy) = detector.accumulated();
        assert!((dx + 0.0225).abs() < 0.0001);
        assert!((dy - 0.02).abs() < 0.0001);
    }

    #[test]
    fn test_pre_press_direction_is_silent_and_pattern_reset() {
        let mut detector = GestureDetector::new();
        detector.on_source_detected(Some(Point3D::ORIGIN));
        assert_eq!(step(&mut detector, 0.1, 0.0), None);
        assert_eq!(detector.current_direction(), Direction::Right);

        detector.on_source_pressed();
        assert_eq!(detector.pattern(), "");
        let event = step(&mut detector, 0.1, 0.1).unwrap();
        assert_eq!(event, GestureEvent::detecting(Direction::Up, "U"));
    }

    #[test]
    fn test_unresolved_position_leaves_state_untouched() {
        let mut detector = pressed_at_origin();
        step(&mut detector, 0.03, 0.0);
        let before = detector.clone();
        assert_eq!(detector.on_source_updated(None, &CameraAxes::IDENTITY), None);
        assert_eq!(detector.accumulated(), before.accumulated());
        // Next displacement is measured from the last resolved position
        assert!(step(&mut detector, 0.06, 0.0).is_some());
    }

    #[test]
    fn test_lost_finalizes_like_release() {
        let mut detector = pressed_at_origin();
        step(&mut detector, 0.0, -0.06);
        let event = detector.on_source_lost().unwrap();
        assert_eq!(event, GestureEvent::detected(Direction::Down, "D"));
        assert_eq!(detector.on_source_lost(), None);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut detector = GestureDetector::new();
        step(&mut detector, 0.1, 0.0);
        assert_eq!(detector.on_source_released(), None);
    }

    #[test]
    fn test_second_press_keeps_session() {
        let mut detector = pressed_at_origin();
        step(&mut detector, 0.06, 0.0);
        detector.on_source_pressed();
        assert_eq!(detector.pattern(), "R");
    }
}
