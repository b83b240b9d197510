//! Head-relative screen axes used to flatten 3D hand motion

use super::Vector3D;

/// Right and up axes of the viewer's head, refreshed on every update.
///
/// Hand displacement is projected onto these two axes so that a swipe is
/// classified relative to where the user is looking, not in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAxes {
    pub right: Vector3D,
    pub up: Vector3D,
}

impl Default for CameraAxes {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraAxes {
    /// Head looking straight down +Z
    pub const IDENTITY: Self = Self {
        right: Vector3D::RIGHT,
        up: Vector3D::UP,
    };

    pub fn new(right: Vector3D, up: Vector3D) -> Self {
        Self { right, up }
    }

    /// Axes for a head turned by `yaw` (around Y) then tilted by `pitch`
    /// (around the turned X axis). Angles in radians.
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        Self {
            right: Vector3D::new(cy, 0.0, -sy),
            up: Vector3D::new(sy * sp, cp, cy * sp),
        }
    }

    /// Project a 3D displacement into the head-relative (dx, dy) plane
    pub fn project(&self, displacement: Vector3D) -> (f32, f32) {
        (self.right.dot(&displacement), self.up.dot(&displacement))
    }
}
