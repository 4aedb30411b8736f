//! Map proxy command line entry point.
//!
//! Authors one or more maps (from a scene file, or a single map from the INI
//! config), runs one frame of the map systems, and prints a JSON report of
//! the converted maps.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --scene scene.json --gizmos
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;

use mapproxy::components::maplabel::MapLabel;
use mapproxy::components::maporder::MapOrder;
use mapproxy::events::switchdebug::SwitchDebugEvent;
use mapproxy::report::collect_report;
use mapproxy::resources::conversionfailures::ConversionFailures;
use mapproxy::resources::debuggizmos::DebugGizmos;
use mapproxy::resources::mapconfig::MapConfig;
use mapproxy::scene::SceneData;
use mapproxy::setup::{frame_schedule, setup_world};

/// Convert authored map settings into ECS map entities.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file (default: ./mapproxy.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON scene listing the maps to author. Without it a single map is
    /// authored from the configuration.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Override the configured map width.
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i32>,

    /// Override the configured map height.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i32>,

    /// Draw map gizmos and include them in the report.
    #[arg(long)]
    gizmos: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match MapConfig::resolve(cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.gizmos |= cli.gizmos;

    let mut world = World::new();
    setup_world(&mut world);
    if config.gizmos {
        world.trigger(SwitchDebugEvent {});
    }

    match &cli.scene {
        Some(path) => match SceneData::load_from_file(path) {
            Ok(scene) => {
                scene.spawn(&mut world);
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            world.spawn((MapLabel::new("default"), MapOrder(0), config.proxy()));
        }
    }

    let mut schedule = frame_schedule();
    schedule.run(&mut world);

    for cube in world.resource::<DebugGizmos>().cubes() {
        debug!(
            "Gizmo wire cube: center={:?} size={:?} color={:?}",
            cube.center, cube.size, cube.color
        );
    }

    let report = collect_report(&mut world);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }

    let failures = world.resource::<ConversionFailures>();
    if !failures.is_empty() {
        error!("{} map(s) failed to convert", failures.len());
        std::process::exit(1);
    }
}
