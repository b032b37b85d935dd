use super::controller::{FollowCamera, TickContext};
use super::pose::CameraPose;
use super::timer::FixedStep;
use crate::error::ConfigError;
use crate::traits::{Clock, PointerSource, RayQuery, TargetSource, TransformSink};
use crate::types::{PointerDelta, TargetFrame};

pub const DEFAULT_FIXED_HZ: f32 = 50.0;
pub const DEFAULT_MAX_SUBSTEPS: u8 = 5;

/// Runs the pose phase on a fixed-rate tick while input and the footprint
/// refresh run once per rendered frame.
#[derive(Debug, Clone)]
pub struct FixedStepSchedule {
    step: FixedStep,
}

impl Default for FixedStepSchedule {
    fn default() -> Self {
        Self {
            step: FixedStep::default(),
        }
    }
}

impl FixedStepSchedule {
    /// Fails unless `hz` is finite and positive
    pub fn new(hz: f32, max_substeps: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            step: FixedStep::new(hz, max_substeps)?,
        })
    }

    pub fn timestep(&self) -> f32 {
        self.step.timestep()
    }

    /// One rendered frame: input, zero or more fixed pose steps, footprint refresh
    pub fn frame(
        &mut self,
        camera: &mut FollowCamera,
        frame_dt: f32,
        delta: PointerDelta,
        world: &dyn RayQuery,
        target: &TargetFrame,
    ) -> CameraPose {
        camera.integrate_input(delta);

        let steps = self.step.advance(frame_dt);
        for _ in 0..steps {
            camera.resolve_pose(self.step.timestep(), world, target);
        }
        if steps > 1 {
            log::trace!("ran {} fixed steps for a {:.4}s frame", steps, frame_dt);
        }

        camera.refresh_footprint();
        camera.pose()
    }

    /// Frame driven by host collaborators; the pose goes to the sink
    pub fn tick(&mut self, camera: &mut FollowCamera, ctx: &mut TickContext<'_>) -> CameraPose {
        let frame_dt = ctx.clock.delta_seconds();
        let delta = ctx.pointer.take_delta();
        let target = ctx.target.target();

        let pose = self.frame(camera, frame_dt, delta, ctx.world, &target);
        ctx.sink.apply(&pose);
        pose
    }
}
