use std::time::Instant;

/// `dt` reported before the first frame has completed
pub const INITIAL_DT: f32 = 0.1;

/// Frame clock: elapsed time between consecutive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    previous: Instant,
    dt: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { previous: now, dt: INITIAL_DT }
    }

    /// Seconds between the last two ticks.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Mark the end of a frame and return its duration.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// `tick` with an explicit timestamp. Timestamps earlier than the
    /// previous tick give `dt = 0`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.dt = now.saturating_duration_since(self.previous).as_secs_f32();
        self.previous = now;
        self.dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frame_clock_tests.rs"]
mod tests;
