use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;
use crate::math::{orbit_rotation, wrap_degrees};
use crate::traits::Diagnostics;
use crate::types::PointerDelta;

/// Accumulated orbit angles in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    /// Horizontal angle, wrapped into `[0, 360)`
    pub yaw: f32,
    /// Vertical angle, always within the configured limits
    pub pitch: f32,
}

impl OrbitState {
    /// Start facing down +Z with pitch pulled into the limits
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0f32.clamp(config.min_angle, config.max_angle),
        }
    }

    /// Integrate one tick of pointer motion.
    /// Non-finite components are dropped so they can't poison the state.
    pub fn accumulate(
        &mut self,
        delta: PointerDelta,
        config: &CameraConfig,
        diagnostics: &mut dyn Diagnostics,
    ) -> OrbitState {
        let dx = finite_or_zero("pointer delta x", delta.x, diagnostics);
        let dy = finite_or_zero("pointer delta y", delta.y, diagnostics);

        let yaw = self.yaw + dx * config.horizontal_sensitivity * config.input_gain;
        let pitch = self.pitch - dy * config.vertical_sensitivity * config.input_gain;

        // Large but finite deltas can still overflow the products
        if yaw.is_finite() {
            self.yaw = wrap_degrees(yaw);
        }
        if pitch.is_finite() {
            self.pitch = pitch;
        }
        self.pitch = self.pitch.clamp(config.min_angle, config.max_angle);
        *self
    }

    pub fn rotation(&self) -> Quat {
        orbit_rotation(self.pitch, self.yaw)
    }
}

fn finite_or_zero(field: &'static str, value: f32, diagnostics: &mut dyn Diagnostics) -> f32 {
    if value.is_finite() {
        value
    } else {
        diagnostics.rejected_input(field, value);
        0.0
    }
}
