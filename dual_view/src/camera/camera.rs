/// Camera: mode, pose and viewport size.
///
/// Produces projection and view matrices on demand from its current state
/// (nothing is cached), and advances its position from directional input.
/// One camera per viewport; the session owns both and mutates them in place.

use glam::{Mat4, UVec2, Vec3};
use crate::config::{MovementConfig, ProjectionConfig};
use crate::error::Result;
use crate::{viewer_bail, viewer_debug, viewer_info};
use super::camera_mode::CameraMode;
use super::movement::{self, InputIntent};
use super::orientation::{CameraPose, Orientation};
use super::projection;

const SOURCE: &str = "dualview::Camera";

#[derive(Debug, Clone)]
pub struct Camera {
    mode: CameraMode,
    pose: CameraPose,
    viewport_size: UVec2,
    projection: ProjectionConfig,
    movement: MovementConfig,
}

impl Camera {
    /// Create a camera at the origin with a 1x1 viewport.
    pub fn new(mode: CameraMode, projection: ProjectionConfig, movement: MovementConfig) -> Self {
        Self {
            mode,
            pose: CameraPose::default(),
            viewport_size: UVec2::ONE,
            projection,
            movement,
        }
    }

    /// Camera with default projection and movement settings.
    pub fn with_mode(mode: CameraMode) -> Self {
        Self::new(mode, ProjectionConfig::default(), MovementConfig::default())
    }

    // ===== MODE =====

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            viewer_info!(SOURCE, "mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Advance to the next mode (wrapping) and return it.
    pub fn cycle_mode(&mut self) -> CameraMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    // ===== VIEWPORT =====

    /// Store the size of the region this camera renders into.
    ///
    /// # Errors
    ///
    /// `Error::InvalidViewport` if either dimension is zero. The previous
    /// size is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            viewer_bail!(SOURCE, InvalidViewport,
                "zero-sized viewport {}x{}", width, height);
        }
        let size = UVec2::new(width, height);
        if size != self.viewport_size {
            viewer_debug!(SOURCE, "viewport {}x{}", width, height);
            self.viewport_size = size;
        }
        Ok(())
    }

    pub fn viewport_size(&self) -> UVec2 {
        self.viewport_size
    }

    /// Width over height. Always finite and positive.
    pub fn aspect(&self) -> f32 {
        self.viewport_size.x as f32 / self.viewport_size.y as f32
    }

    // ===== MATRICES =====

    /// Projection for the current mode and viewport.
    pub fn projection_matrix(&self) -> Mat4 {
        projection::projection_matrix(self.mode, &self.projection, self.aspect())
    }

    /// World-to-camera transform for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix()
    }

    /// `projection * view`.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn projection_config(&self) -> &ProjectionConfig {
        &self.projection
    }

    // ===== POSE =====

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn orientation(&self) -> &Orientation {
        &self.pose.orientation
    }

    /// Place the camera. Angles in degrees: pitch `rx`, roll `ry`, yaw `rz`.
    pub fn set_pose(&mut self, position: Vec3, rx: f32, ry: f32, rz: f32) {
        self.pose = CameraPose::new(position, Orientation::new(rx, ry, rz));
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    /// Rotate by degree deltas, clamping pitch to the configured limit.
    pub fn look(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.pose
            .orientation
            .add_look(delta_pitch, delta_yaw, self.movement.pitch_limit);
    }

    /// Look from mouse motion in pixels. Moving right turns right, moving
    /// down looks down.
    pub fn look_by_pixels(&mut self, dx: f32, dy: f32) {
        let sensitivity = self.movement.look_sensitivity;
        self.look(-dy * sensitivity, dx * sensitivity);
    }

    /// Turn at the configured rate. `pitch_axis` and `yaw_axis` are in
    /// `[-1, 1]`.
    pub fn turn(&mut self, dt: f32, pitch_axis: f32, yaw_axis: f32) {
        let step = self.movement.turn_rate * dt;
        if pitch_axis != 0.0 || yaw_axis != 0.0 {
            self.look(pitch_axis * step, yaw_axis * step);
        }
    }

    // ===== MOVEMENT =====

    /// Advance the position by `dt` seconds of `intent`.
    ///
    /// Returns `false` (and leaves the position untouched) when the intent
    /// is below the configured threshold.
    pub fn update(&mut self, dt: f32, intent: InputIntent) -> bool {
        match movement::displacement(
            &self.pose.orientation,
            intent,
            dt,
            self.movement.speed,
            self.movement.intent_epsilon,
        ) {
            Some(delta) => {
                self.pose.position += delta;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
