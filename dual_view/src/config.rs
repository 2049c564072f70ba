//! Viewer configuration.
//!
//! Plain structs with `Default`. `ViewerConfig::validate` is called once
//! when a `Viewer` is created; everything downstream assumes valid values.

use glam::Vec3;
use crate::camera::{CameraMode, CameraPose, Orientation};
use crate::error::Result;
use crate::viewer_bail;

/// Projection constants shared by all three camera modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees
    pub fovy_degrees: f32,
    /// Near clipping distance
    pub near: f32,
    /// Far clipping distance
    pub far: f32,
    /// Half of the visible world height in the top-down mode
    pub top_half_height: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fovy_degrees: 80.0,
            near: 0.01,
            far: 10.0,
            top_half_height: 6.0,
        }
    }
}

/// Free-fly movement and look tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// World units per second
    pub speed: f32,
    /// Intents shorter than this are treated as "no input"
    pub intent_epsilon: f32,
    /// Degrees of rotation per pixel of mouse motion
    pub look_sensitivity: f32,
    /// Degrees per second while a turn key is held
    pub turn_rate: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees
    pub pitch_limit: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            intent_epsilon: 1e-3,
            look_sensitivity: 0.2,
            turn_rate: 100.0,
            pitch_limit: 89.0,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub projection: ProjectionConfig,
    pub movement: MovementConfig,
    /// Initial pose of the free-fly camera (left viewport)
    pub fly_pose: CameraPose,
    /// Pose of the fixed overview camera (right viewport)
    pub overview_pose: CameraPose,
    pub fly_mode: CameraMode,
    pub overview_mode: CameraMode,
    /// Decay of the frame time moving average, in `[0, 1)`
    pub frame_time_decay: f32,
    /// Length of the frustum glyph drawn for the other camera
    pub glyph_length: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            movement: MovementConfig::default(),
            fly_pose: CameraPose::new(Vec3::new(0.0, -1.5, 0.3), Orientation::new(-10.0, 0.0, 0.0)),
            overview_pose: CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Orientation::default()),
            fly_mode: CameraMode::Perspective3D,
            overview_mode: CameraMode::OrthoTop2D,
            frame_time_decay: 0.99,
            glyph_length: 0.5,
        }
    }
}

const SOURCE: &str = "dualview::ViewerConfig";

impl ViewerConfig {
    /// Check every value against its valid range.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let p = &self.projection;
        if !(p.fovy_degrees > 0.0 && p.fovy_degrees < 180.0) {
            viewer_bail!(SOURCE, InvalidConfig,
                "fovy_degrees must be in (0, 180), got {}", p.fovy_degrees);
        }
        if !(p.near > 0.0) {
            viewer_bail!(SOURCE, InvalidConfig, "near must be positive, got {}", p.near);
        }
        if !(p.far > p.near) {
            viewer_bail!(SOURCE, InvalidConfig,
                "far ({}) must be greater than near ({})", p.far, p.near);
        }
        if !(p.top_half_height > 0.0) {
            viewer_bail!(SOURCE, InvalidConfig,
                "top_half_height must be positive, got {}", p.top_half_height);
        }

        let m = &self.movement;
        if !(m.speed >= 0.0) {
            viewer_bail!(SOURCE, InvalidConfig, "speed must not be negative, got {}", m.speed);
        }
        if !(m.intent_epsilon > 0.0) {
            viewer_bail!(SOURCE, InvalidConfig,
                "intent_epsilon must be positive, got {}", m.intent_epsilon);
        }
        if !(m.pitch_limit > 0.0 && m.pitch_limit <= 90.0) {
            viewer_bail!(SOURCE, InvalidConfig,
                "pitch_limit must be in (0, 90], got {}", m.pitch_limit);
        }

        if !(self.frame_time_decay >= 0.0 && self.frame_time_decay < 1.0) {
            viewer_bail!(SOURCE, InvalidConfig,
                "frame_time_decay must be in [0, 1), got {}", self.frame_time_decay);
        }
        if !(self.glyph_length > 0.0) {
            viewer_bail!(SOURCE, InvalidConfig,
                "glyph_length must be positive, got {}", self.glyph_length);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
