use glam::Vec3;

use super::footprint::{self, FootprintSample};
use super::occlusion::{self, OcclusionQuery, OcclusionResult};
use super::orbit::OrbitState;
use super::pose::{self, CameraPose, PoseInputs};
use crate::config::CameraConfig;
use crate::error::ConfigError;
use crate::traits::{
    Clock, Diagnostics, LogDiagnostics, PointerSource, RayQuery, TargetSource, TransformSink,
};
use crate::types::{PointerDelta, TargetFrame};

/// Host collaborators for one tick
pub struct TickContext<'a> {
    pub clock: &'a mut dyn Clock,
    pub pointer: &'a mut dyn PointerSource,
    pub world: &'a dyn RayQuery,
    pub target: &'a dyn TargetSource,
    pub sink: &'a mut dyn TransformSink,
}

/// Third-person follow camera.
///
/// Each step runs input integration, occlusion against the footprint stored
/// by the previous step, the pose update, and finally a footprint refresh
/// for the next step. Occlusion therefore always sees last tick's pose.
pub struct FollowCamera {
    config: CameraConfig,
    orbit: OrbitState,
    pose: CameraPose,
    footprint: FootprintSample,
    occlusion: OcclusionResult,
    diagnostics: Box<dyn Diagnostics>,
}

impl FollowCamera {
    /// Place the camera `follow_distance` behind the target along -Z, aimed at
    /// its look-at point.
    pub fn new(config: CameraConfig, target: TargetFrame) -> Result<Self, ConfigError> {
        config.validate()?;

        let orbit = OrbitState::new(&config);
        let start = target.position - Vec3::new(0.0, 0.0, config.follow_distance);
        let pose = CameraPose::looking_at(start, target.look_at);
        let footprint = footprint::sample(pose.position, pose.forward(), &config.lens, config.near_clip_fov_scale);
        let occlusion = OcclusionResult::clear(config.follow_distance);

        log::debug!(
            "follow camera at {:?} tracking {:?}, distance {}",
            pose.position,
            target.entity,
            config.follow_distance
        );

        Ok(Self {
            config,
            orbit,
            pose,
            footprint,
            occlusion,
            diagnostics: Box::new(LogDiagnostics),
        })
    }

    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn orbit(&self) -> OrbitState {
        self.orbit
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Footprint the next occlusion pass will probe
    pub fn footprint(&self) -> &FootprintSample {
        &self.footprint
    }

    /// Result of the most recent occlusion pass
    pub fn last_occlusion(&self) -> OcclusionResult {
        self.occlusion
    }

    /// Viewport changed shape
    pub fn set_aspect(&mut self, aspect: f32) {
        self.config.lens.aspect = aspect;
    }

    /// Input phase: fold pointer motion into the orbit angles
    pub fn integrate_input(&mut self, delta: PointerDelta) -> OrbitState {
        self.orbit.accumulate(delta, &self.config, self.diagnostics.as_mut())
    }

    /// Pose phase: probe the stored footprint, then move toward the desired pose
    pub fn resolve_pose(&mut self, dt: f32, world: &dyn RayQuery, target: &TargetFrame) -> CameraPose {
        let query = OcclusionQuery {
            target_position: target.position,
            target_entity: target.entity,
            max_distance: self.config.follow_distance,
            minimum_distance: self.config.minimum_distance,
            mask: self.config.collision_mask,
            self_hit: self.config.self_hit,
        };
        self.occlusion = occlusion::resolve(&query, &self.footprint, world, self.diagnostics.as_mut());

        self.pose = pose::update(&PoseInputs {
            orbit: self.orbit,
            occlusion: self.occlusion,
            follow_distance: self.config.follow_distance,
            target_position: target.position,
            look_at: target.look_at,
            previous_position: self.pose.position,
            smoothing_rate: self.config.smoothing_rate,
            dt,
        });
        self.pose
    }

    /// Late phase: resample the footprint from the current pose for the next step
    pub fn refresh_footprint(&mut self) -> &FootprintSample {
        self.footprint = footprint::sample(
            self.pose.position,
            self.pose.forward(),
            &self.config.lens,
            self.config.near_clip_fov_scale,
        );
        &self.footprint
    }

    /// Run one whole tick
    pub fn step(&mut self, dt: f32, delta: PointerDelta, world: &dyn RayQuery, target: &TargetFrame) -> CameraPose {
        self.integrate_input(delta);
        let pose = self.resolve_pose(dt, world, target);
        self.refresh_footprint();
        pose
    }

    /// Run one tick against host collaborators and publish the pose
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> CameraPose {
        let dt = ctx.clock.delta_seconds();
        let delta = ctx.pointer.take_delta();
        let target = ctx.target.target();

        let pose = self.step(dt, delta, ctx.world, &target);
        ctx.sink.apply(&pose);
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::pointer::PointerAccumulator;
    use crate::math::Ray;
    use crate::traits::{NullDiagnostics, QueryFilter, RayHit};
    use crate::types::EntityId;

    struct EmptyWorld;

    impl RayQuery for EmptyWorld {
        fn cast(&self, _ray: &Ray, _max_distance: f32, _filter: &QueryFilter) -> Option<RayHit> {
            None
        }
    }

    fn target() -> TargetFrame {
        TargetFrame::new(EntityId(7), Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0))
    }

    fn camera() -> FollowCamera {
        let config = CameraConfig {
            follow_distance: 5.0,
            minimum_distance: 1.0,
            ..Default::default()
        };
        FollowCamera::new(config, target())
            .unwrap()
            .with_diagnostics(Box::new(NullDiagnostics))
    }

    #[test]
    fn test_new_places_camera_behind_target() {
        let camera = camera();
        assert_eq!(camera.pose().position, Vec3::new(0.0, 0.0, -5.0));
        assert!(!camera.last_occlusion().is_colliding);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CameraConfig {
            follow_distance: 2.0,
            minimum_distance: 3.0,
            ..Default::default()
        };
        assert!(FollowCamera::new(config, target()).is_err());
    }

    #[test]
    fn test_step_refreshes_footprint_after_pose() {
        let mut camera = camera();
        camera.step(0.05, PointerDelta::new(20.0, 0.0), &EmptyWorld, &target());

        let pose = camera.pose();
        let expected = footprint::sample(pose.position, pose.forward(), &camera.config().lens, 2.0);
        assert_eq!(camera.footprint(), &expected);
    }

    #[test]
    fn test_tick_publishes_pose() {
        let mut camera = camera();
        let mut clock = FixedClock::new(1.0);
        let mut pointer = PointerAccumulator::new();
        let mut sink: Option<CameraPose> = None;
        let target = target();

        let pose = camera.tick(&mut TickContext {
            clock: &mut clock,
            pointer: &mut pointer,
            world: &EmptyWorld,
            target: &target,
            sink: &mut sink,
        });

        assert_eq!(sink, Some(pose));
        assert_eq!(pose.position, Vec3::new(0.0, 0.0, -5.0));
    }
}
