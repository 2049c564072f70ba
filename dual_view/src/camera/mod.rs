//! Camera module: viewing modes, projection and view construction,
//! free-fly movement, frustum glyphs and the GPU uniform snapshot.
//!
//! Cameras are plain values owned by the session. Matrices are computed
//! from scratch on every request.

mod camera;
mod camera_mode;
mod camera_uniform;
mod frustum;
mod movement;
mod orientation;
pub mod projection;

pub use camera::Camera;
pub use camera_mode::CameraMode;
pub use camera_uniform::CameraUniform;
pub use frustum::{
    FrustumGlyph, FRUSTUM_EDGES,
    NEAR_BOTTOM_LEFT, NEAR_BOTTOM_RIGHT, NEAR_TOP_RIGHT, NEAR_TOP_LEFT,
    FAR_BOTTOM_LEFT, FAR_BOTTOM_RIGHT, FAR_TOP_RIGHT, FAR_TOP_LEFT,
};
pub use movement::{displacement, InputIntent};
pub use orientation::{CameraPose, Orientation};
