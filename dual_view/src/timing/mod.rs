//! Frame timing: per-frame `dt` and the smoothed frame time shown in the
//! overlay.

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, INITIAL_DT};
pub use frame_stats::FrameStats;
