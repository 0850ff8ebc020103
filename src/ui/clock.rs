//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a given number of ticks per second by sleeping off
/// whatever is left of the current frame's budget.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            last_tick: Instant::now(),
        }
    }

    /// Time allotted to one frame at `fps`
    pub fn budget(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    /// Sleep until a full frame has passed since the previous tick.
    ///
    /// Returns the time the frame actually took before sleeping.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let elapsed = self.last_tick.elapsed();
        let budget = Self::budget(fps);
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
        self.last_tick = Instant::now();
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
