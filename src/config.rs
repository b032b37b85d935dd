// config.rs - Camera tunables, loaded from JSON
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::CollisionMask;

pub const FOLLOW_DISTANCE_RANGE: (f32, f32) = (1.0, 20.0);
pub const MINIMUM_DISTANCE_RANGE: (f32, f32) = (0.0, 10.0);
pub const SENSITIVITY_RANGE: (f32, f32) = (0.0, 1.0);

/// Projection parameters of the rendering camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lens {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Near clipping plane distance
    pub near_clip: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near_clip: 0.3,
        }
    }
}

/// Whether occlusion rays may be stopped by the followed target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfHitPolicy {
    /// Hits on the target count toward the occlusion distance (reported to diagnostics)
    Include,
    /// The target is filtered out of every query
    #[default]
    Exclude,
}

/// Per-session camera tunables. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Un-occluded distance from target to camera
    pub follow_distance: f32,
    /// Floor for the occlusion-adjusted distance
    pub minimum_distance: f32,
    /// Interpolation speed toward the desired position, per second
    pub smoothing_rate: f32,
    pub horizontal_sensitivity: f32,
    pub vertical_sensitivity: f32,
    /// Multiplier applied to both sensitivities
    pub input_gain: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    /// Divisor applied to the field of view when sizing the near-plane footprint
    pub near_clip_fov_scale: f32,
    pub collision_mask: CollisionMask,
    pub self_hit: SelfHitPolicy,
    pub lens: Lens,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_distance: 1.0,
            minimum_distance: 0.0,
            smoothing_rate: 10.0,
            horizontal_sensitivity: 0.5,
            vertical_sensitivity: 1.0,
            input_gain: 2.0,
            min_angle: 0.0,
            max_angle: 60.0,
            near_clip_fov_scale: 2.0,
            collision_mask: CollisionMask::ALL,
            self_hit: SelfHitPolicy::default(),
            lens: Lens::default(),
        }
    }
}

impl CameraConfig {
    /// Check every field against its recognized range and the cross-field invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("follow_distance", self.follow_distance),
            ("minimum_distance", self.minimum_distance),
            ("smoothing_rate", self.smoothing_rate),
            ("horizontal_sensitivity", self.horizontal_sensitivity),
            ("vertical_sensitivity", self.vertical_sensitivity),
            ("input_gain", self.input_gain),
            ("min_angle", self.min_angle),
            ("max_angle", self.max_angle),
            ("near_clip_fov_scale", self.near_clip_fov_scale),
            ("lens.fov_degrees", self.lens.fov_degrees),
            ("lens.aspect", self.lens.aspect),
            ("lens.near_clip", self.lens.near_clip),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        check_range("follow_distance", self.follow_distance, FOLLOW_DISTANCE_RANGE)?;
        check_range("minimum_distance", self.minimum_distance, MINIMUM_DISTANCE_RANGE)?;
        check_range("horizontal_sensitivity", self.horizontal_sensitivity, SENSITIVITY_RANGE)?;
        check_range("vertical_sensitivity", self.vertical_sensitivity, SENSITIVITY_RANGE)?;

        if self.minimum_distance > self.follow_distance {
            return Err(ConfigError::MinimumExceedsFollow {
                minimum: self.minimum_distance,
                follow: self.follow_distance,
            });
        }
        if self.min_angle > self.max_angle {
            return Err(ConfigError::InvertedPitchLimits {
                min: self.min_angle,
                max: self.max_angle,
            });
        }
        if self.near_clip_fov_scale <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "near_clip_fov_scale",
                value: self.near_clip_fov_scale,
            });
        }
        for (field, value) in [
            ("smoothing_rate", self.smoothing_rate),
            ("lens.near_clip", self.lens.near_clip),
            ("lens.fov_degrees", self.lens.fov_degrees),
            ("lens.aspect", self.lens.aspect),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CameraConfig = serde_json::from_str(json).context("Failed to parse camera config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config: {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid camera config: {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write camera config: {}", path.display()))
    }
}

fn check_range(field: &'static str, value: f32, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, min, max })
    }
}
