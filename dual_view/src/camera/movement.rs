/// Free-fly movement.
///
/// Input intent is expressed in the camera's horizontal frame (strafe,
/// forward, vertical). It is normalized, scaled by elapsed time and speed,
/// then mapped to world space through the yaw-only basis of the current
/// orientation. Vertical movement always follows world Z.

use glam::Vec3;
use super::orientation::Orientation;

/// Directional input for one frame.
///
/// Each axis is usually -1, 0 or 1; combined axes are normalized before use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputIntent {
    /// +1 right, -1 left
    pub strafe: f32,
    /// +1 forward, -1 backward
    pub forward: f32,
    /// +1 ascend, -1 descend
    pub vertical: f32,
}

impl InputIntent {
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 1.0, 0.0);
    pub const BACKWARD: Self = Self::new(0.0, -1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, 0.0, -1.0);

    pub const fn new(strafe: f32, forward: f32, vertical: f32) -> Self {
        Self { strafe, forward, vertical }
    }

    /// `(strafe, forward, vertical)` as a vector.
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.strafe, self.forward, self.vertical)
    }

    pub fn magnitude(&self) -> f32 {
        self.as_vec3().length()
    }
}

/// World-space displacement for one frame, or `None` when the intent is
/// shorter than `epsilon`.
///
/// The displacement length is exactly `dt * speed` for any non-empty
/// intent, independent of orientation.
pub fn displacement(
    orientation: &Orientation,
    intent: InputIntent,
    dt: f32,
    speed: f32,
    epsilon: f32,
) -> Option<Vec3> {
    let raw = intent.as_vec3();
    if raw.length() < epsilon {
        return None;
    }
    let scaled = raw.normalize() * (dt * speed);

    Some(
        orientation.right() * scaled.x
            + orientation.forward() * scaled.y
            + Vec3::Z * scaled.z,
    )
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod tests;
