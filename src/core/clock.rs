use std::time::Instant;

use crate::traits::Clock;

/// Wall clock - delta is real time since the previous tick
#[derive(Debug)]
pub struct SystemClock {
    last_tick: Instant,
}

impl SystemClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

/// Constant delta, for simulation and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn delta_seconds(&mut self) -> f32 {
        self.dt
    }
}
