pub mod clock;
pub mod controller;
pub mod footprint;
pub mod occlusion;
pub mod orbit;
pub mod pointer;
pub mod pose;
pub mod schedule;
pub mod timer;

pub use clock::{FixedClock, SystemClock};
pub use controller::{FollowCamera, TickContext};
pub use footprint::{FootprintSample, FOOTPRINT_POINTS};
pub use occlusion::{OcclusionQuery, OcclusionResult, MIN_DISTANCE_EPSILON};
pub use orbit::OrbitState;
pub use pointer::PointerAccumulator;
pub use pose::{CameraPose, PoseInputs};
pub use schedule::FixedStepSchedule;
pub use timer::FixedStep;
