/// DrawTarget trait: where the compositor sends its draw calls
///
/// The host implements this on top of its graphics API (immediate-mode GL,
/// a Vulkan command list, a software rasterizer). The compositor only binds
/// viewports and transforms and submits world-space line segments and
/// overlay text.

use glam::{Mat4, UVec2, Vec2, Vec3, Vec4};
use crate::error::Result;

/// Pixel rectangle, origin at the top-left of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Top-left corner in pixels.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// RGBA line color
pub type Color = Vec4;

/// Draw call sink for one frame.
pub trait DrawTarget {
    /// Start a frame (clear color and depth).
    fn begin_frame(&mut self) -> Result<()>;

    /// Restrict subsequent drawing to `viewport`.
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Bind the transforms used for subsequent line draws.
    ///
    /// Both matrices are column-major glam matrices; clip space is GL style
    /// (depth in [-1, 1]).
    fn set_transform(&mut self, projection: &Mat4, view: &Mat4) -> Result<()>;

    /// Draw world-space line segments under the bound transform.
    fn draw_lines(&mut self, segments: &[[Vec3; 2]], color: Color) -> Result<()>;

    /// Draw overlay text at a pixel position relative to the surface.
    fn draw_text(&mut self, text: &str, position: Vec2) -> Result<()>;

    /// Finish and present the frame.
    fn end_frame(&mut self) -> Result<()>;
}
