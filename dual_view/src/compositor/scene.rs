/// Demo scene: wireframe cubes.
///
/// No scene graph: a flat list of cubes, each expanded to world-space line
/// segments when drawn.

use glam::Vec3;

/// Corners of the cube spanning [-1, 1] on every axis.
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Vertex index pairs of the 12 cube edges.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1], [0, 3], [0, 4],
    [2, 1], [2, 3], [2, 7],
    [6, 3], [6, 4], [6, 7],
    [5, 1], [5, 4], [5, 7],
];

/// Scale applied to the unit cube in the demo scene.
pub const DEMO_CUBE_SCALE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireCube {
    pub center: Vec3,
    /// Half edge length
    pub scale: f32,
}

impl WireCube {
    pub fn new(center: Vec3, scale: f32) -> Self {
        Self { center, scale }
    }

    pub fn segments(&self) -> impl Iterator<Item = [Vec3; 2]> + '_ {
        CUBE_EDGES.iter().map(move |&[a, b]| {
            [
                self.center + CUBE_VERTICES[a] * self.scale,
                self.center + CUBE_VERTICES[b] * self.scale,
            ]
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    cubes: Vec<WireCube>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two small cubes, one at the origin and one a unit ahead along +Y.
    pub fn demo() -> Self {
        let mut scene = Self::new();
        scene.add_cube(WireCube::new(Vec3::ZERO, DEMO_CUBE_SCALE));
        scene.add_cube(WireCube::new(Vec3::Y, DEMO_CUBE_SCALE));
        scene
    }

    pub fn add_cube(&mut self, cube: WireCube) {
        self.cubes.push(cube);
    }

    pub fn cubes(&self) -> &[WireCube] {
        &self.cubes
    }

    /// Every cube edge in world space.
    pub fn segments(&self) -> Vec<[Vec3; 2]> {
        self.cubes.iter().flat_map(|cube| cube.segments()).collect()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
