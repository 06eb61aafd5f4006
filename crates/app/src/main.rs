//! `seatswap`: headless demo of door-based entry and anti-shuffle.
//!
//! Runs a scripted scenario against the reference host and logs each step.
//! Set `SEATSWAP_CONFIG` to a JSON file to override the seating config;
//! missing fields keep their defaults.

mod scenario;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use seating::sim_host::SimHostPlugin;
use seating::{SeatingConfig, SeatingPlugin, SeatingSet};

fn main() {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
        LogPlugin::default(),
    ));

    // Logging is up from here on.
    if let Ok(path) = std::env::var("SEATSWAP_CONFIG") {
        match SeatingConfig::load(&path) {
            Ok(config) => {
                info!("loaded seating config from {path}");
                app.insert_resource(config);
            }
            Err(e) => warn!("{path}: {e}; using defaults"),
        }
    }

    app.add_plugins((SeatingPlugin, SimHostPlugin))
        .init_resource::<scenario::ScriptCursor>()
        .add_systems(Startup, scenario::spawn_cast)
        .add_systems(
            Update,
            scenario::drive_scenario.before(SeatingSet::Commands),
        );

    app.run();
}
