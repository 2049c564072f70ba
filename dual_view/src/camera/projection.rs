//! Projection builders, one per `CameraMode`.
//!
//! All builders produce OpenGL-style clip space (NDC depth in [-1, 1]) and
//! work from the world convention +X right, +Z up, +Y forward. The GL
//! builders in glam expect +Y up and -Z forward, so the 3D modes are
//! post-multiplied by `WORLD_TO_GL_AXES` (x' = x, y' = z, z' = -y).
//! The top-down mode keeps world X/Y on screen and uses world -Z as depth,
//! so its remap is the identity.

use glam::{Mat4, Vec4};
use crate::config::ProjectionConfig;
use super::camera_mode::CameraMode;

/// Maps world (+X right, +Z up, +Y forward) into GL eye space
/// (+X right, +Y up, -Z forward).
pub const WORLD_TO_GL_AXES: Mat4 = Mat4::from_cols(
    Vec4::X,     // world X -> eye  X
    Vec4::NEG_Z, // world Y -> eye -Z
    Vec4::Y,     // world Z -> eye  Y
    Vec4::W,
);

/// Top-down remap: world X/Y stay on screen, world -Z is depth.
pub const TOP_DOWN_AXES: Mat4 = Mat4::IDENTITY;

/// Half height of the orthographic volume that shows the same extent as
/// the perspective frustum at unit depth.
pub fn unit_depth_half_height(config: &ProjectionConfig) -> f32 {
    (config.fovy_degrees * 0.5).to_radians().tan()
}

/// Symmetric perspective with the Z-up/Y-forward remap.
pub fn perspective_3d(config: &ProjectionConfig, aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(config.fovy_degrees.to_radians(), aspect, config.near, config.far)
        * WORLD_TO_GL_AXES
}

/// Orthographic volume calibrated against `perspective_3d` at depth 1.
pub fn orthographic_3d(config: &ProjectionConfig, aspect: f32) -> Mat4 {
    symmetric_ortho(config, unit_depth_half_height(config), aspect) * WORLD_TO_GL_AXES
}

/// Fixed-size orthographic volume looking straight down.
pub fn ortho_top_2d(config: &ProjectionConfig, aspect: f32) -> Mat4 {
    symmetric_ortho(config, config.top_half_height, aspect) * TOP_DOWN_AXES
}

fn symmetric_ortho(config: &ProjectionConfig, half_height: f32, aspect: f32) -> Mat4 {
    let half_width = half_height * aspect;
    Mat4::orthographic_rh_gl(
        -half_width, half_width,
        -half_height, half_height,
        config.near, config.far,
    )
}

/// Projection matrix for `mode`.
///
/// `aspect` must be finite and positive; `Camera::resize` guarantees this
/// for camera-driven calls.
pub fn projection_matrix(mode: CameraMode, config: &ProjectionConfig, aspect: f32) -> Mat4 {
    debug_assert!(aspect.is_finite() && aspect > 0.0, "aspect must be positive, got {}", aspect);
    match mode {
        CameraMode::Perspective3D => perspective_3d(config, aspect),
        CameraMode::Orthographic3D => orthographic_3d(config, aspect),
        CameraMode::OrthoTop2D => ortho_top_2d(config, aspect),
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
