/// Camera viewing modes.
///
/// A closed set: each variant has exactly one projection builder in
/// `projection.rs`, and cycling walks the variants in declaration order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Perspective, +Z up, looking along +Y
    #[default]
    Perspective3D,
    /// Orthographic, +Z up, looking along +Y, sized to match
    /// `Perspective3D` at unit depth
    Orthographic3D,
    /// Orthographic, +Y up on screen, looking down world -Z
    OrthoTop2D,
}

impl CameraMode {
    /// Every mode in cycling order.
    pub const ALL: [CameraMode; 3] = [
        CameraMode::Perspective3D,
        CameraMode::Orthographic3D,
        CameraMode::OrthoTop2D,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            CameraMode::Perspective3D => 0,
            CameraMode::Orthographic3D => 1,
            CameraMode::OrthoTop2D => 2,
        }
    }

    /// Mode at `index`, wrapping modulo `COUNT`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The mode that follows this one, wrapping from last to first.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Whether this mode uses the Z-up/Y-forward axis remap.
    pub fn is_3d(self) -> bool {
        !matches!(self, CameraMode::OrthoTop2D)
    }

    /// Short label shown in the viewport overlay.
    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Perspective3D => "3D perspective",
            CameraMode::Orthographic3D => "3D orthographic",
            CameraMode::OrthoTop2D => "2D top",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "camera_mode_tests.rs"]
mod tests;
