use thiserror::Error;

/// Reasons a [`CameraConfig`](crate::config::CameraConfig) is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("minimum_distance ({minimum}) exceeds follow_distance ({follow})")]
    MinimumExceedsFollow { minimum: f32, follow: f32 },

    #[error("min_angle ({min}) exceeds max_angle ({max})")]
    InvertedPitchLimits { min: f32, max: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}
