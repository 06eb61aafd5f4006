//! Scripted demo scenario.
//!
//! The player walks up to the rear passenger-side door of a sedan that has an
//! NPC driver, gets in, switches to the front passenger seat, watches the
//! driver leave without being shuffled across, then shuffles deliberately.

use std::time::Duration;

use bevy::prelude::*;

use seating::commands::ChatCommand;
use seating::entry::EntryAttemptLog;
use seating::host::{
    InVehicle, PlayerActor, ShuffleRestriction, SuppressedEntryPress, VehicleAnchors,
    VehicleSeats,
};
use seating::notices::NoticeLog;
use seating::sim_host::ExitVehicleRequest;
use seating::SeatId;

#[derive(Debug, Clone, Copy)]
enum Step {
    /// Press the enter control (routed, as a gamepad layer would).
    PressEnter,
    Chat(&'static str),
    DriverLeaves,
    Report(&'static str),
    Finish,
}

const SCRIPT: &[(u64, Step)] = &[
    (300, Step::Report("standing at the rear right door")),
    (400, Step::PressEnter),
    (600, Step::Report("after entry")),
    (800, Step::Chat("/seat passenger")),
    (1_000, Step::Report("after /seat passenger")),
    (3_000, Step::Report("switch window over")),
    (3_200, Step::DriverLeaves),
    (3_500, Step::Report("driver gone")),
    (3_800, Step::Chat("/shuff")),
    (4_000, Step::Report("after /shuff")),
    (4_200, Step::Finish),
];

/// Entities the script drives.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Cast {
    pub player: Entity,
    pub car: Entity,
    pub driver: Entity,
}

#[derive(Resource, Debug, Default)]
pub struct ScriptCursor {
    next: usize,
}

/// Startup system: a sedan at (10, 0, 0) with an NPC driver, and the player
/// just outside its rear passenger-side door.
pub fn spawn_cast(mut commands: Commands) {
    let player = commands
        .spawn((PlayerActor, Transform::from_xyz(11.8, 0.0, 0.9)))
        .id();
    let driver = commands.spawn(Transform::default()).id();
    let car = commands
        .spawn((
            Transform::from_xyz(10.0, 0.0, 0.0),
            VehicleAnchors::four_door(),
            VehicleSeats::default().with_occupant(SeatId::Driver, driver),
        ))
        .id();
    commands.entity(driver).insert(InVehicle {
        vehicle: car,
        seat: SeatId::Driver,
    });
    commands.insert_resource(Cast {
        player,
        car,
        driver,
    });
}

fn describe(cast: &Cast, riders: &Query<&InVehicle>, restrictions: &Query<&ShuffleRestriction>) -> String {
    let seat = riders
        .get(cast.player)
        .map(|ride| ride.seat.to_string())
        .unwrap_or_else(|_| "on foot".to_string());
    let restricted = restrictions.get(cast.player).is_ok_and(|r| r.active);
    format!("player: {seat}, shuffle restriction: {restricted}")
}

/// System: run script steps whose time has come.
#[allow(clippy::too_many_arguments)]
pub fn drive_scenario(
    time: Res<Time>,
    cast: Res<Cast>,
    mut cursor: ResMut<ScriptCursor>,
    riders: Query<&InVehicle>,
    restrictions: Query<&ShuffleRestriction>,
    attempts: Res<EntryAttemptLog>,
    notices: Res<NoticeLog>,
    mut presses: EventWriter<SuppressedEntryPress>,
    mut chats: EventWriter<ChatCommand>,
    mut exits: EventWriter<ExitVehicleRequest>,
    mut app_exit: EventWriter<AppExit>,
) {
    let now = time.elapsed();
    while let Some(&(at_ms, step)) = SCRIPT.get(cursor.next) {
        if now < Duration::from_millis(at_ms) {
            break;
        }
        cursor.next += 1;
        match step {
            Step::PressEnter => {
                info!("script: press enter");
                presses.send(SuppressedEntryPress);
            }
            Step::Chat(line) => {
                info!("script: say {line:?}");
                chats.send(ChatCommand::new(line));
            }
            Step::DriverLeaves => {
                info!("script: driver {:?} leaves {:?}", cast.driver, cast.car);
                exits.send(ExitVehicleRequest { actor: cast.driver });
            }
            Step::Report(label) => {
                info!("[{label}] {}", describe(&cast, &riders, &restrictions));
            }
            Step::Finish => {
                for attempt in attempts.last_n(8) {
                    match attempt.result {
                        Ok(plan) => info!("entry at {:?}: {} seat", attempt.at, plan.seat),
                        Err(err) => info!("entry at {:?}: {err}", attempt.at),
                    }
                }
                if let Some(latest) = notices.latest() {
                    info!("last notice: {}", latest.text);
                }
                app_exit.send(AppExit::Success);
            }
        }
    }
}
