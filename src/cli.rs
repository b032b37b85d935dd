// cli.rs - Command-line interface for the headless simulation
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "follow-cam-sim")]
#[command(about = "Headless third-person follow camera simulation", long_about = None)]
pub struct Cli {
    /// Camera config (JSON). Defaults to a 6-unit follow distance
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scene colliders (JSON). Defaults to the built-in courtyard
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 120)]
    pub ticks: u32,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Horizontal pointer delta fed every tick
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub yaw_rate: f32,

    /// Vertical pointer delta fed every tick
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pitch_rate: f32,

    /// Resolve the pose on a fixed-rate tick instead of once per frame
    #[arg(long)]
    pub fixed_hz: Option<f32>,

    /// Disable per-tick output, print only the summary
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
