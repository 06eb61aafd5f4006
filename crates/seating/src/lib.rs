//! Door-based seat selection and anti-shuffle control for vehicle entry.
//!
//! When the player presses the enter control next to a vehicle, the seat is
//! chosen from the door they are standing at rather than by the host's
//! default rule. While seated in the front passenger seat, the host's
//! automatic move into a free driver seat is blocked, with short suspensions
//! for deliberate seat changes.
//!
//! The host engine is reached through the ECS contract in [`host`]; the
//! [`sim_host`] plugin is a headless reference implementation of it.

pub mod anchors;
pub mod anti_shuffle;
pub mod candidates;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod host;
pub mod keybindings;
pub mod notices;
pub mod resolver;
pub mod seat;
pub mod seat_command;
pub mod seating_sets;
pub mod sim_host;

#[cfg(test)]
pub mod test_harness;

use bevy::prelude::*;

pub use config::{ConfigError, SeatingConfig};
pub use error::{Gate, SeatError};
pub use seat::SeatId;
pub use seating_sets::SeatingSet;

use anti_shuffle::AntiShufflePlugin;
use commands::{ChatCommand, SeatRequest};
use entry::EntryPlugin;
use host::{
    ClearActorTasks, EnterVehicleRequest, PlaceInSeatRequest, ShuffleToNextSeatRequest,
    SuppressedEntryPress,
};
use keybindings::SeatKeyBindings;
use notices::{collect_notices, NoticeLog, SeatNotice};

/// System: report the effective configuration once at startup.
fn report_configuration(config: Res<SeatingConfig>, bindings: Res<SeatKeyBindings>) {
    if let Err(err) = config.validate() {
        warn!("seating config: {err}");
    }
    for (a, b) in bindings.find_conflicts() {
        warn!("seating keybindings: {} and {} share a key", a.label(), b.label());
    }
    info!(
        "seating: door entry {}, anti-shuffle {}, '{}' bound to {}",
        if config.door_entry_enabled { "on" } else { "off" },
        if config.anti_shuffle_enabled { "on" } else { "off" },
        config.shuffle_bind_name,
        bindings.shuffle_seat.display_label(),
    );
}

pub struct SeatingPlugin;

impl Plugin for SeatingPlugin {
    fn build(&self, app: &mut App) {
        seating_sets::configure(app);

        // Resources inserted before the plugin (loaded config, rebound keys) win.
        app.init_resource::<SeatingConfig>()
            .init_resource::<SeatKeyBindings>()
            .init_resource::<NoticeLog>()
            .add_event::<EnterVehicleRequest>()
            .add_event::<ClearActorTasks>()
            .add_event::<PlaceInSeatRequest>()
            .add_event::<ShuffleToNextSeatRequest>()
            .add_event::<SuppressedEntryPress>()
            .add_event::<ChatCommand>()
            .add_event::<SeatRequest>()
            .add_event::<SeatNotice>()
            .add_systems(Startup, report_configuration)
            .add_systems(
                Update,
                (
                    commands::dispatch_chat_commands,
                    commands::shuffle_keybind,
                    commands::apply_seat_requests,
                )
                    .chain()
                    .in_set(SeatingSet::Commands),
            )
            .add_systems(Update, collect_notices.in_set(SeatingSet::Notices));

        app.add_plugins((EntryPlugin, AntiShufflePlugin));
    }
}
