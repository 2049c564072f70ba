/*!
# Dual View

Side-by-side viewer of a small 3D scene seen through two cameras.

The core is the camera subsystem: projection and view transforms for three
viewing modes under a Z-up, Y-forward world, and a free-fly movement model
driven by held keys and mouse look. Drawing goes through the `DrawTarget`
trait so any backend can consume the compositor's output.

## Architecture

- **Camera**: mode, pose and viewport size; builds projection and view
  matrices on demand
- **Compositor**: splits the surface in two and draws each camera's view
  plus the other camera's frustum glyph
- **Viewer**: the session; owns both cameras and routes winit events
- **Diagnostics**: process-wide logger used by every component

World axes: +X right, +Y forward, +Z up. Matrices are glam column-major
with GL clip space.
*/

// Internal modules
mod error;
mod diagnostics;
mod viewer;
pub mod log;
pub mod camera;
pub mod compositor;
pub mod config;
pub mod input;
pub mod timing;

// Main dualview namespace module
pub mod dualview {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Session
    pub use crate::viewer::{Viewer, FLY_SLOT};

    // Logging sub-module (types only, the viewer_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod compositor {
        pub use crate::compositor::*;
    }

    pub mod config {
        pub use crate::config::*;
    }

    pub mod input {
        pub use crate::input::*;
    }

    pub mod timing {
        pub use crate::timing::*;
    }
}

// Re-export math library at crate root
pub use glam;
