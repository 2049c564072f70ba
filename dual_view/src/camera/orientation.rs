//! Camera orientation and pose.
//!
//! Angles are stored in degrees:
//! - `rz` yaw about world Z, as a heading: positive turns right when seen
//!   from above, so yaw 90 faces +X
//! - `rx` pitch about world X: positive looks up
//! - `ry` roll about world Y (right-hand rule)
//!
//! The view rotation undoes yaw, then roll, then pitch, in that fixed order.
//! Because pitch is applied about the world X axis after yaw, it has its
//! full effect when the camera faces along ±Y and none when it faces along
//! ±X. Roll never tilts the horizontal movement plane. This is the
//! established composition and is kept as is.

use std::f32::consts::FRAC_PI_2;
use glam::{Mat3, Mat4, Vec3};

/// Yaw/pitch/roll in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Pitch about X
    pub rx: f32,
    /// Roll about Y
    pub ry: f32,
    /// Yaw about Z
    pub rz: f32,
}

impl Orientation {
    pub fn new(rx: f32, ry: f32, rz: f32) -> Self {
        Self { rx, ry, rz }
    }

    /// Yaw as a rotation about world Z.
    pub fn yaw_rotation(&self) -> Mat3 {
        Mat3::from_rotation_z(-self.rz.to_radians())
    }

    /// Camera-to-world rotation: pitch · roll · yaw.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_rotation_x(self.rx.to_radians())
            * Mat3::from_rotation_y(self.ry.to_radians())
            * self.yaw_rotation()
    }

    /// World-to-camera rotation: undo yaw, then roll, then pitch.
    pub fn view_rotation(&self) -> Mat4 {
        Mat4::from_rotation_z(self.rz.to_radians())
            * Mat4::from_rotation_y(-self.ry.to_radians())
            * Mat4::from_rotation_x(-self.rx.to_radians())
    }

    /// Horizontal forward direction (world +Y rotated by yaw).
    pub fn forward(&self) -> Vec3 {
        self.yaw_rotation() * Vec3::Y
    }

    /// Horizontal right direction (`forward` rotated by -90° about Z).
    pub fn right(&self) -> Vec3 {
        Mat3::from_rotation_z(-FRAC_PI_2) * self.forward()
    }

    /// Full viewing direction, including pitch and roll.
    pub fn look_direction(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Add to pitch and yaw. Pitch is clamped to `±pitch_limit`, yaw wraps
    /// into `[0, 360)`.
    pub fn add_look(&mut self, delta_pitch: f32, delta_yaw: f32, pitch_limit: f32) {
        self.rx = (self.rx + delta_pitch).clamp(-pitch_limit, pitch_limit);
        self.rz = (self.rz + delta_yaw).rem_euclid(360.0);
    }
}

/// Position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Orientation) -> Self {
        Self { position, orientation }
    }

    /// World-to-camera transform for this pose.
    pub fn view_matrix(&self) -> Mat4 {
        self.orientation.view_rotation() * Mat4::from_translation(-self.position)
    }

    /// Camera-to-world transform for this pose (inverse of `view_matrix`).
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_mat3(self.orientation.rotation())
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
