/// Side-by-side split of the output surface.
///
/// The left half gets `width / 2` pixels, the right half gets the rest, so
/// odd widths never lose a column.

use glam::UVec2;
use super::draw_target::Viewport;

/// Which half of the surface a camera renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportSlot {
    Left,
    Right,
}

impl ViewportSlot {
    pub const ALL: [ViewportSlot; 2] = [ViewportSlot::Left, ViewportSlot::Right];

    pub fn index(self) -> usize {
        match self {
            ViewportSlot::Left => 0,
            ViewportSlot::Right => 1,
        }
    }

    /// The opposite half.
    pub fn other(self) -> Self {
        match self {
            ViewportSlot::Left => ViewportSlot::Right,
            ViewportSlot::Right => ViewportSlot::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    surface: UVec2,
}

impl SplitLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self { surface: UVec2::new(width, height) }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = UVec2::new(width, height);
    }

    pub fn surface_size(&self) -> UVec2 {
        self.surface
    }

    /// Whether both halves have a non-zero area.
    pub fn is_drawable(&self) -> bool {
        self.surface.x >= 2 && self.surface.y > 0
    }

    /// Region of `slot` in pixels, origin at the top-left of the surface.
    pub fn viewport(&self, slot: ViewportSlot) -> Viewport {
        let left_width = self.surface.x / 2;
        match slot {
            ViewportSlot::Left => Viewport::new(0, 0, left_width, self.surface.y),
            ViewportSlot::Right => {
                Viewport::new(left_width, 0, self.surface.x - left_width, self.surface.y)
            }
        }
    }

    /// The whole surface, used for the overlay.
    pub fn full(&self) -> Viewport {
        Viewport::new(0, 0, self.surface.x, self.surface.y)
    }
}

#[cfg(test)]
#[path = "split_layout_tests.rs"]
mod tests;
