use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::footprint::camera_basis;
use super::occlusion::OcclusionResult;
use super::orbit::OrbitState;

/// Resolved camera transform. The camera looks down its local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    /// Pose at `position` aimed at `look_at`
    pub fn looking_at(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
        .aimed_at(look_at)
    }

    /// Same position, re-aimed. Keeps the old orientation when `look_at`
    /// coincides with the position.
    pub fn aimed_at(self, look_at: Vec3) -> Self {
        let Some(forward) = (look_at - self.position).try_normalize() else {
            return self;
        };
        let (right, up) = camera_basis(forward);
        Self {
            position: self.position,
            orientation: Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }
}

/// Everything the pose update reads for one tick
#[derive(Debug, Clone, Copy)]
pub struct PoseInputs {
    pub orbit: OrbitState,
    pub occlusion: OcclusionResult,
    pub follow_distance: f32,
    pub target_position: Vec3,
    pub look_at: Vec3,
    pub previous_position: Vec3,
    pub smoothing_rate: f32,
    pub dt: f32,
}

/// Lerp weight for one tick, clamped to `[0, 1]` so the camera never
/// overshoots. Non-finite or negative time steps don't move the camera.
pub fn smoothing_factor(smoothing_rate: f32, dt: f32) -> f32 {
    if smoothing_rate <= 0.0 {
        return 0.0;
    }
    let t = smoothing_rate * dt;
    if t.is_finite() && dt >= 0.0 {
        t.clamp(0.0, 1.0)
    } else if dt.is_finite() || dt.is_nan() {
        0.0
    } else {
        // An infinite step has fully converged
        1.0
    }
}

/// Where the camera wants to be this tick, before smoothing
pub fn desired_position(orbit: &OrbitState, distance: f32, target_position: Vec3) -> Vec3 {
    let offset = orbit.rotation() * Vec3::new(0.0, 0.0, distance);
    target_position - offset
}

/// Move the camera toward its desired pose and aim it at the look-at point
pub fn update(inputs: &PoseInputs) -> CameraPose {
    let distance = inputs.occlusion.distance_or(inputs.follow_distance);
    let desired = desired_position(&inputs.orbit, distance, inputs.target_position);

    let t = smoothing_factor(inputs.smoothing_rate, inputs.dt);
    let position = if t >= 1.0 || !inputs.previous_position.is_finite() {
        desired
    } else {
        // Written as an offset so a camera already at `desired` stays bit-identical
        inputs.previous_position + (desired - inputs.previous_position) * t
    };

    CameraPose::looking_at(position, inputs.look_at)
}
