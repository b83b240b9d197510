//! Spatial primitives for hand tracking
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: Forward (+) / Backward (-)

mod axes;
mod point3d;
mod vector3d;

pub use axes::CameraAxes;
pub use point3d::Point3D;
pub use vector3d::Vector3D;
