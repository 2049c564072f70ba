/// Smoothed frame time for the FPS overlay.
///
/// Exponential moving average: `avg = decay * avg + (1 - decay) * dt`.
/// Starts at zero, so `fps()` is `None` until the first frame is recorded.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    decay: f32,
    average_frame_time: f32,
    frames: u64,
}

impl FrameStats {
    /// `decay` in `[0, 1)`; higher is smoother.
    pub fn new(decay: f32) -> Self {
        Self { decay, average_frame_time: 0.0, frames: 0 }
    }

    pub fn record(&mut self, dt: f32) {
        self.average_frame_time = self.decay * self.average_frame_time + (1.0 - self.decay) * dt;
        self.frames += 1;
    }

    pub fn average_frame_time(&self) -> f32 {
        self.average_frame_time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    pub fn fps(&self) -> Option<f32> {
        (self.average_frame_time > 0.0).then(|| 1.0 / self.average_frame_time)
    }

    /// Overlay text: whole frames per second, or `None` before any
    /// non-zero frame time.
    pub fn fps_label(&self) -> Option<String> {
        self.fps().map(|fps| format!("{}", fps as u32))
    }
}

#[cfg(test)]
#[path = "frame_stats_tests.rs"]
mod tests;
