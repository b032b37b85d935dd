pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod scene;
pub mod traits;
pub mod types;

pub use config::{CameraConfig, Lens, SelfHitPolicy};
pub use self::core::{CameraPose, FixedStepSchedule, FollowCamera, OcclusionResult, OrbitState, TickContext};
pub use error::ConfigError;
pub use scene::Scene;
pub use types::{CollisionMask, EntityId, Layer, PointerDelta, TargetFrame};
