/// Compositor: renders the two camera views side by side.
///
/// Per frame, each half of the surface gets the scene seen through its own
/// camera plus the frustum glyph of the other camera, and a mode label.
/// The FPS overlay is drawn last over the whole surface.

use glam::{Vec2, Vec4};
use crate::camera::{Camera, FrustumGlyph};
use crate::error::Result;
use crate::timing::FrameStats;
use super::draw_target::{Color, DrawTarget};
use super::scene::Scene;
use super::split_layout::{SplitLayout, ViewportSlot};

pub const SCENE_COLOR: Color = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const GLYPH_COLOR: Color = Vec4::new(1.0, 0.8, 0.2, 1.0);

/// Pixel offset of labels from their viewport's top-left corner
pub const LABEL_OFFSET: Vec2 = Vec2::new(8.0, 8.0);

/// Pixel offset of the FPS counter from the surface's top-right corner
pub const FPS_OFFSET: Vec2 = Vec2::new(-64.0, 8.0);

#[derive(Debug, Clone)]
pub struct Compositor {
    layout: SplitLayout,
    glyph_length: f32,
}

impl Compositor {
    pub fn new(width: u32, height: u32, glyph_length: f32) -> Self {
        Self {
            layout: SplitLayout::new(width, height),
            glyph_length,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.layout.resize(width, height);
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn glyph_length(&self) -> f32 {
        self.glyph_length
    }

    /// Draw one frame. `cameras` is indexed by `ViewportSlot::index`.
    ///
    /// # Errors
    ///
    /// The first error returned by `target` aborts the frame.
    pub fn render(
        &self,
        target: &mut dyn DrawTarget,
        scene: &Scene,
        cameras: &[Camera; 2],
        stats: &FrameStats,
    ) -> Result<()> {
        target.begin_frame()?;

        let scene_segments = scene.segments();
        for slot in ViewportSlot::ALL {
            let camera = &cameras[slot.index()];
            let other = &cameras[slot.other().index()];
            let viewport = self.layout.viewport(slot);

            target.set_viewport(viewport)?;
            target.set_transform(&camera.projection_matrix(), &camera.view_matrix())?;
            target.draw_lines(&scene_segments, SCENE_COLOR)?;

            let glyph = FrustumGlyph::from_camera(other, self.glyph_length);
            target.draw_lines(&glyph.segments(), GLYPH_COLOR)?;

            target.draw_text(camera.mode().label(), viewport.origin() + LABEL_OFFSET)?;
        }

        // Overlay
        let full = self.layout.full();
        target.set_viewport(full)?;
        if let Some(label) = stats.fps_label() {
            let corner = Vec2::new(full.width as f32, 0.0);
            target.draw_text(&label, corner + FPS_OFFSET)?;
        }

        target.end_frame()
    }
}

#[cfg(test)]
#[path = "compositor_tests.rs"]
mod tests;
