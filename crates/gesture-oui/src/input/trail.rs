//! Rolling debug trail of classified gesture directions

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{GestureBus, GestureEventType, SubscriptionId};

/// Keeps the most recent "Detect Gesture" lines for an on-screen debug view.
///
/// Only directions classified while a gesture session is open reach the
/// bus, so drift before the press is not listed.
///
/// Clones share the same trail, so one clone can be subscribed to a bus
/// while another is read.
#[derive(Debug, Clone)]
pub struct GestureTrail {
    capacity: usize,
    lines: Rc<RefCell<VecDeque<String>>>,
}

impl GestureTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Record every newly classified direction published on `bus`
    pub fn attach(&self, bus: &mut GestureBus) -> SubscriptionId {
        let trail = self.clone();
        bus.subscribe(move |event| {
            if event.kind == GestureEventType::Detecting {
                trail.record(format!("Detect Gesture: {}", event.direction.label()));
            }
        })
    }

    pub fn record(&self, line: String) {
        let mut lines = self.lines.borrow_mut();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Direction, GestureEvent};

    #[test]
    fn test_trail_records_detecting_only() {
        let mut bus = GestureBus::new();
        let trail = GestureTrail::new(8);
        trail.attach(&mut bus);

        bus.publish(&GestureEvent::detecting(Direction::Up, "U"));
        bus.publish(&GestureEvent::detected(Direction::Up, "U"));
        assert_eq!(trail.lines(), vec!["Detect Gesture: Up"]);
    }

    #[test]
    fn test_trail_is_bounded() {
        let trail = GestureTrail::new(2);
        for i in 0..5 {
            trail.record(i.to_string());
        }
        assert_eq!(trail.lines(), vec!["3", "4"]);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let trail = GestureTrail::new(usize::MAX);
        trail.record("one".to_string());
        assert_eq!(trail.lines(), vec!["one"]);
    }
}
