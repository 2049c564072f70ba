/// Frustum glyph: world-space wireframe of a camera's viewing volume.
///
/// Built by unprojecting the GL NDC cube through the inverse
/// view-projection matrix, so it works for perspective and orthographic
/// cameras alike. The far face is pulled in along each frustum edge to a
/// fixed glyph length so a 10-unit-deep frustum stays readable next to a
/// small scene.

use glam::{Mat4, Vec3};
use super::camera::Camera;

/// Corner indices
pub const NEAR_BOTTOM_LEFT: usize = 0;
pub const NEAR_BOTTOM_RIGHT: usize = 1;
pub const NEAR_TOP_RIGHT: usize = 2;
pub const NEAR_TOP_LEFT: usize = 3;
pub const FAR_BOTTOM_LEFT: usize = 4;
pub const FAR_BOTTOM_RIGHT: usize = 5;
pub const FAR_TOP_RIGHT: usize = 6;
pub const FAR_TOP_LEFT: usize = 7;

/// Corner pairs forming the 12 box edges.
pub const FRUSTUM_EDGES: [[usize; 2]; 12] = [
    // near face
    [0, 1], [1, 2], [2, 3], [3, 0],
    // far face
    [4, 5], [5, 6], [6, 7], [7, 4],
    // sides
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// NDC x/y of the four corners of a face, in corner index order.
const FACE_NDC: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumGlyph {
    /// Near corners 0..4, shortened far corners 4..8
    pub corners: [Vec3; 8],
    /// Camera position; joined to the near corners
    pub apex: Vec3,
}

impl FrustumGlyph {
    /// Build from a view-projection matrix.
    ///
    /// Each far corner is placed `length` units from its near corner along
    /// the frustum edge, or at the true far corner if the frustum is
    /// shallower than `length`.
    pub fn from_view_projection(view_projection: &Mat4, apex: Vec3, length: f32) -> Self {
        let inverse = view_projection.inverse();
        let mut corners = [Vec3::ZERO; 8];

        for (i, &(x, y)) in FACE_NDC.iter().enumerate() {
            let near = inverse.project_point3(Vec3::new(x, y, -1.0));
            let far = inverse.project_point3(Vec3::new(x, y, 1.0));
            let edge = far - near;
            corners[i] = near;
            corners[i + 4] = near + edge.normalize_or_zero() * length.min(edge.length());
        }

        Self { corners, apex }
    }

    /// Glyph for `camera` at its current pose and mode.
    pub fn from_camera(camera: &Camera, length: f32) -> Self {
        Self::from_view_projection(&camera.view_projection_matrix(), camera.position(), length)
    }

    /// Line segments: 12 box edges, then 4 apex-to-near-corner lines.
    pub fn segments(&self) -> Vec<[Vec3; 2]> {
        let mut segments: Vec<[Vec3; 2]> = FRUSTUM_EDGES
            .iter()
            .map(|&[a, b]| [self.corners[a], self.corners[b]])
            .collect();
        segments.extend(self.corners[..4].iter().map(|&corner| [self.apex, corner]));
        segments
    }

    /// Center of the near face.
    pub fn near_center(&self) -> Vec3 {
        self.corners[..4].iter().copied().sum::<Vec3>() / 4.0
    }

    /// Center of the (shortened) far face.
    pub fn far_center(&self) -> Vec3 {
        self.corners[4..].iter().copied().sum::<Vec3>() / 4.0
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
