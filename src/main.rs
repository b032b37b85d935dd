use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use serde::Serialize;

use follow_cam::cli::Cli;
use follow_cam::core::schedule::DEFAULT_MAX_SUBSTEPS;
use follow_cam::core::{FixedClock, PointerAccumulator};
use follow_cam::scene::PLAYER_ENTITY;
use follow_cam::{CameraConfig, CameraPose, FixedStepSchedule, FollowCamera, Scene, TargetFrame, TickContext};

// === Constants ===

const DEFAULT_FOLLOW_DISTANCE: f32 = 6.0;
const DEFAULT_MINIMUM_DISTANCE: f32 = 0.5;
const TARGET_PIVOT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const TARGET_LOOK_AT: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// One line of simulation output
#[derive(Serialize)]
struct TickReport {
    tick: u32,
    position: [f32; 3],
    forward: [f32; 3],
    yaw: f32,
    pitch: f32,
    occluded: bool,
    distance: f32,
}

fn load_config(cli: &Cli) -> Result<CameraConfig> {
    match &cli.config {
        Some(path) => CameraConfig::load(path),
        None => Ok(CameraConfig {
            follow_distance: DEFAULT_FOLLOW_DISTANCE,
            minimum_distance: DEFAULT_MINIMUM_DISTANCE,
            ..Default::default()
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    let target = TargetFrame::new(PLAYER_ENTITY, TARGET_PIVOT, TARGET_LOOK_AT);

    let mut camera = FollowCamera::new(config, target)?;
    let mut schedule = cli
        .fixed_hz
        .map(|hz| FixedStepSchedule::new(hz, DEFAULT_MAX_SUBSTEPS))
        .transpose()
        .context("Invalid --fixed-hz")?;
    let mut clock = FixedClock::new(cli.dt);
    let mut pointer = PointerAccumulator::new();
    let mut sink: Option<CameraPose> = None;
    let mut occluded_ticks = 0u32;

    for tick in 0..cli.ticks {
        pointer.push_motion(cli.yaw_rate, cli.pitch_rate);

        let mut ctx = TickContext {
            clock: &mut clock,
            pointer: &mut pointer,
            world: &scene,
            target: &target,
            sink: &mut sink,
        };
        let pose = match schedule.as_mut() {
            Some(schedule) => schedule.tick(&mut camera, &mut ctx),
            None => camera.tick(&mut ctx),
        };

        let occlusion = camera.last_occlusion();
        if occlusion.is_colliding {
            occluded_ticks += 1;
        }

        if !cli.no_ui {
            let orbit = camera.orbit();
            let report = TickReport {
                tick,
                position: pose.position.to_array(),
                forward: pose.forward().to_array(),
                yaw: orbit.yaw,
                pitch: orbit.pitch,
                occluded: occlusion.is_colliding,
                distance: occlusion.distance_or(camera.config().follow_distance),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    if let Some(pose) = sink {
        log::info!(
            "Finished {} ticks, occluded for {}, final position {:?}",
            cli.ticks,
            occluded_ticks,
            pose.position
        );
    }
    if cli.no_ui {
        println!("ticks={} occluded={}", cli.ticks, occluded_ticks);
    }

    Ok(())
}
