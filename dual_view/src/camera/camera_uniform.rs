/// GPU-facing snapshot of a camera.
///
/// Matrices are stored column-major, exactly as glam lays out `Mat4`, so a
/// backend can upload `as_bytes()` straight into a uniform buffer and read
/// them as `mat4` in GLSL without transposing.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use super::camera::Camera;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    /// xyz = world position, w = 1
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_matrices(view: &Mat4, projection: &Mat4, position: glam::Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (*projection * *view).to_cols_array_2d(),
            position: position.extend(1.0).to_array(),
        }
    }

    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_matrices(&camera.view_matrix(), &camera.projection_matrix(), camera.position())
    }

    /// Raw bytes for upload (208 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "camera_uniform_tests.rs"]
mod tests;
