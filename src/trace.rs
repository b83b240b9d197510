//! Recorded hand-motion traces
//!
//! A trace is a list of motion source lifecycle events stored as TOML or
//! JSON. Besides raw events, a `swipe` entry expands into a full
//! press/move/release gesture drawing a pattern such as "UL". Unless a swipe
//! sets its own `step`, each segment travels slightly more than the
//! detector threshold, so the same trace replays at any sensitivity.
//!
//! ```toml
//! [[events]]
//! kind = "detected"
//! position = [0.0, 0.0, 0.0]
//!
//! [[events]]
//! kind = "swipe"
//! pattern = "DR"
//! ```

use anyhow::{bail, Context, Result};
use gesture_oui::{CameraAxes, Direction, MotionEvent, Point3D, ScriptedMotionSource, Vector3D};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Swipe segment length as a multiple of the detection threshold
pub const SWIPE_STEP_FACTOR: f32 = 1.2;

/// One entry in a trace file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    Detected {
        #[serde(default)]
        position: Option<[f32; 3]>,
    },
    Pressed,
    Updated {
        #[serde(default)]
        position: Option<[f32; 3]>,
        /// Head yaw in radians
        #[serde(default)]
        yaw: f32,
        /// Head pitch in radians
        #[serde(default)]
        pitch: f32,
    },
    Released,
    Lost,
    /// Press, move through `pattern` one segment per letter, release
    Swipe {
        pattern: String,
        /// Segment length; defaults to `SWIPE_STEP_FACTOR` times the threshold
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f32>,
    },
}

/// A replayable list of motion events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionTrace {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

impl MotionTrace {
    /// Load a trace; `.json` files are parsed as JSON, everything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace file: {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let trace = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        };
        trace.with_context(|| format!("Failed to parse trace file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Expand into raw motion events for a detector running at `threshold`
    pub fn motion_events(&self, threshold: f32) -> Result<Vec<MotionEvent>> {
        let default_step = threshold * SWIPE_STEP_FACTOR;
        let mut events = Vec::new();
        for (index, event) in self.events.iter().enumerate() {
            expand(event, default_step, &mut events)
                .with_context(|| format!("Invalid trace event #{}", index + 1))?;
        }
        Ok(events)
    }

    pub fn into_source(self, threshold: f32) -> Result<ScriptedMotionSource> {
        Ok(ScriptedMotionSource::new(self.motion_events(threshold)?))
    }
}

fn expand(event: &TraceEvent, default_step: f32, out: &mut Vec<MotionEvent>) -> Result<()> {
    match event {
        TraceEvent::Detected { position } => out.push(MotionEvent::Detected {
            position: position.map(Point3D::from),
        }),
        TraceEvent::Pressed => out.push(MotionEvent::Pressed),
        TraceEvent::Updated {
            position,
            yaw,
            pitch,
        } => out.push(MotionEvent::Updated {
            position: position.map(Point3D::from),
            axes: CameraAxes::from_yaw_pitch(*yaw, *pitch),
        }),
        TraceEvent::Released => out.push(MotionEvent::Released),
        TraceEvent::Lost => out.push(MotionEvent::Lost),
        TraceEvent::Swipe { pattern, step } => {
            let step = step.unwrap_or(default_step);
            if !step.is_finite() || step <= 0.0 {
                bail!("Swipe step must be positive, got {}", step);
            }
            let mut position = Point3D::ORIGIN;
            let mut path = Vec::with_capacity(pattern.len());
            for code in pattern.chars() {
                let direction =
                    Direction::from_code(code.to_ascii_uppercase()).with_context(|| {
                        format!("Unknown direction code '{}' in \"{}\"", code, pattern)
                    })?;
                position = position + segment(direction, step);
                path.push(position);
            }

            out.push(MotionEvent::Detected {
                position: Some(Point3D::ORIGIN),
            });
            out.push(MotionEvent::Pressed);
            out.extend(path.into_iter().map(|position| MotionEvent::Updated {
                position: Some(position),
                axes: CameraAxes::IDENTITY,
            }));
            out.push(MotionEvent::Released);
        }
    }
    Ok(())
}

fn segment(direction: Direction, step: f32) -> Vector3D {
    match direction {
        Direction::Up => Vector3D::UP * step,
        Direction::Down => Vector3D::UP * -step,
        Direction::Right => Vector3D::RIGHT * step,
        Direction::Left => Vector3D::RIGHT * -step,
        Direction::Neutral => Vector3D::ZERO,
    }
}
