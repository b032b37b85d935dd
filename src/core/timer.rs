use super::schedule::{DEFAULT_FIXED_HZ, DEFAULT_MAX_SUBSTEPS};
use crate::error::ConfigError;

/// Fixed-rate step accumulator for the pose resolution tick.
/// Frame time goes in, whole fixed steps come out.
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep: f32,
    accumulator: f32,
    max_steps: u8,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self {
            timestep: 1.0 / DEFAULT_FIXED_HZ,
            accumulator: 0.0,
            max_steps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

impl FixedStep {
    /// Steps at `hz`, running at most `max_steps` per frame.
    /// The rate must be finite and positive.
    pub fn new(hz: f32, max_steps: u8) -> Result<Self, ConfigError> {
        if !hz.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "fixed_hz",
                value: hz,
            });
        }
        if hz <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "fixed_hz",
                value: hz,
            });
        }
        Ok(Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        })
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Add frame time, returns the number of fixed steps to run.
    /// Backlog beyond `max_steps` is dropped rather than carried over.
    pub fn advance(&mut self, delta: f32) -> usize {
        if !delta.is_finite() || delta <= 0.0 {
            return 0;
        }
        self.accumulator += delta;

        let due = (self.accumulator / self.timestep).floor();
        let steps = due.min(f32::from(self.max_steps)) as usize;

        if due > f32::from(self.max_steps) {
            self.accumulator = 0.0;
        } else {
            self.accumulator -= steps as f32 * self.timestep;
        }
        steps
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }
}
