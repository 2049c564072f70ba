//! Compositor module: side-by-side layout, the demo scene and the draw
//! target seam the host renderer implements.

mod compositor;
mod draw_target;
mod scene;
mod split_layout;

#[cfg(test)]
pub mod mock_draw_target;

pub use compositor::{Compositor, FPS_OFFSET, GLYPH_COLOR, LABEL_OFFSET, SCENE_COLOR};
pub use draw_target::{Color, DrawTarget, Viewport};
pub use scene::{Scene, WireCube, CUBE_EDGES, CUBE_VERTICES, DEMO_CUBE_SCALE};
pub use split_layout::{SplitLayout, ViewportSlot};
