//! Player commands: `/seat <token>`, the shuffle aliases, and the shuffle key.
//!
//! Text lines arrive as [`ChatCommand`] events from whatever chat layer the
//! host runs. Lines naming one of our commands become [`SeatRequest`]s; any
//! other line is left alone for other handlers. Requests are applied through
//! [`SeatControl`], which raises the anti-shuffle suspension before asking the
//! host to move the player.

use std::fmt;
use std::time::Duration;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::anti_shuffle::AntiShuffleState;
use crate::config::SeatingConfig;
use crate::error::SeatError;
use crate::host::{
    InVehicle, PlaceInSeatRequest, PlayerActor, ShuffleRestriction, ShuffleToNextSeatRequest,
    VehicleSeats,
};
use crate::keybindings::SeatKeyBindings;
use crate::notices::SeatNotice;
use crate::seat::SeatId;
use crate::seat_command::{aliases_for, parse_seat, plan_seat_switch, plan_shuffle, SeatSwitch};

// =============================================================================
// Events
// =============================================================================

/// One line of text typed by the player, with or without a leading `/`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    pub line: String,
}

impl ChatCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// A validated request against the player's seat.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatRequest {
    SwitchTo(SeatId),
    Shuffle,
}

// =============================================================================
// Parsing
// =============================================================================

/// A line named the seat command but its argument was unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    MissingSeat { command: String },
    UnknownSeat { command: String, token: String },
}

fn usage(command: &str) -> String {
    let seats: Vec<String> = SeatId::ALL
        .iter()
        .map(|seat| {
            let aliases: Vec<&str> = aliases_for(*seat).collect();
            format!("{}: {}", seat.label(), aliases.join("/"))
        })
        .collect();
    format!("Usage: /{command} <seat> ({})", seats.join(", "))
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingSeat { command } => write!(f, "{}", usage(command)),
            CommandError::UnknownSeat { command, token } => {
                write!(f, "Unknown seat '{token}'. {}", usage(command))
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse a chat line against the configured command names.
///
/// `None` means the line is not ours. Command names match case-insensitively;
/// everything after the seat command name is one seat token, so "rear left"
/// works as well as "rl".
pub fn parse_command_line(
    line: &str,
    config: &SeatingConfig,
) -> Option<Result<SeatRequest, CommandError>> {
    let line = line.trim();
    let body = line.strip_prefix('/').unwrap_or(line);
    let mut words = body.split_whitespace();
    let name = words.next()?;

    if name.eq_ignore_ascii_case(&config.seat_command) {
        let token = words.collect::<Vec<_>>().join(" ");
        let command = config.seat_command.clone();
        if token.is_empty() {
            return Some(Err(CommandError::MissingSeat { command }));
        }
        return Some(match parse_seat(&token) {
            Some(seat) => Ok(SeatRequest::SwitchTo(seat)),
            None => Err(CommandError::UnknownSeat { command, token }),
        });
    }

    config
        .shuffle_commands
        .iter()
        .any(|alias| alias.eq_ignore_ascii_case(name))
        .then_some(Ok(SeatRequest::Shuffle))
}

// =============================================================================
// Seat control
// =============================================================================

/// Everything needed to move the player between seats of their vehicle.
#[derive(SystemParam)]
pub struct SeatControl<'w, 's> {
    time: Res<'w, Time>,
    config: Res<'w, SeatingConfig>,
    state: ResMut<'w, AntiShuffleState>,
    actors: Query<
        'w,
        's,
        (Option<&'static InVehicle>, &'static mut ShuffleRestriction),
        With<PlayerActor>,
    >,
    vehicles: Query<'w, 's, &'static VehicleSeats>,
    place: EventWriter<'w, PlaceInSeatRequest>,
    shuffle: EventWriter<'w, ShuffleToNextSeatRequest>,
}

impl SeatControl<'_, '_> {
    /// Move `actor` straight into `target` of the vehicle it sits in.
    ///
    /// The monitor is suspended for the seat-switch window and the flag is
    /// dropped right away, so the placement is never blocked by our own
    /// restriction. The window lapses on its own.
    pub fn do_seat_switch(&mut self, actor: Entity, target: SeatId) -> Result<SeatSwitch, SeatError> {
        let Ok((in_vehicle, mut restriction)) = self.actors.get_mut(actor) else {
            return Err(SeatError::NotInVehicle);
        };
        let in_vehicle = in_vehicle.copied();
        let seats = in_vehicle.and_then(|ride| self.vehicles.get(ride.vehicle).ok());
        let plan = plan_seat_switch(actor, in_vehicle.as_ref(), seats, target)?;

        if let SeatSwitch::Move { vehicle, from, to } = plan {
            let now = self.time.elapsed();
            self.state
                .suspend(now, Duration::from_millis(self.config.seat_switch_window_ms));
            restriction.active = false;
            self.place.send(PlaceInSeatRequest {
                actor,
                vehicle,
                seat: to,
            });
            info!("seat switch: {actor:?} {from} -> {to}");
        }
        Ok(plan)
    }

    /// Suspend the monitor for the shuffle window and hand the move to the
    /// host's shuffle task. Returns the vehicle.
    pub fn shuffle(&mut self, actor: Entity) -> Result<Entity, SeatError> {
        let Ok((in_vehicle, mut restriction)) = self.actors.get_mut(actor) else {
            return Err(SeatError::NotInVehicle);
        };
        let seats = in_vehicle.and_then(|ride| self.vehicles.get(ride.vehicle).ok());
        let vehicle = plan_shuffle(in_vehicle, seats)?;

        let now = self.time.elapsed();
        self.state
            .suspend(now, Duration::from_millis(self.config.shuffle_window_ms));
        restriction.active = false;
        self.shuffle.send(ShuffleToNextSeatRequest { actor, vehicle });
        info!("shuffle: anti-shuffle suspended for {}ms", self.config.shuffle_window_ms);
        Ok(vehicle)
    }
}

// =============================================================================
// Systems
// =============================================================================

/// System: turn chat lines naming our commands into [`SeatRequest`]s.
pub fn dispatch_chat_commands(
    config: Res<SeatingConfig>,
    mut lines: EventReader<ChatCommand>,
    mut requests: EventWriter<SeatRequest>,
    mut notices: EventWriter<SeatNotice>,
) {
    for chat in lines.read() {
        match parse_command_line(&chat.line, &config) {
            Some(Ok(request)) => {
                requests.send(request);
            }
            Some(Err(err)) => {
                notices.send(SeatNotice::warning(err.to_string()));
            }
            None => {}
        }
    }
}

/// System: the bindable shuffle action.
pub fn shuffle_keybind(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<SeatKeyBindings>,
    mut requests: EventWriter<SeatRequest>,
) {
    let Some(keys) = keys else {
        return;
    };
    if bindings.shuffle_seat.just_pressed(&keys) {
        requests.send(SeatRequest::Shuffle);
    }
}

/// System: apply seat requests to the player and report the outcome.
pub fn apply_seat_requests(
    mut requests: EventReader<SeatRequest>,
    players: Query<Entity, With<PlayerActor>>,
    mut control: SeatControl,
    mut notices: EventWriter<SeatNotice>,
) {
    for request in requests.read() {
        let Ok(actor) = players.get_single() else {
            warn!("seat request {request:?} ignored: no single player actor");
            continue;
        };
        let notice = match *request {
            SeatRequest::SwitchTo(target) => match control.do_seat_switch(actor, target) {
                Ok(SeatSwitch::AlreadySeated(seat)) => {
                    SeatNotice::info(format!("Already in the {seat} seat"))
                }
                Ok(SeatSwitch::Move { to, .. }) => SeatNotice::info(format!("Moving to the {to} seat")),
                Err(err) => SeatNotice::warning(err.to_string()),
            },
            SeatRequest::Shuffle => match control.shuffle(actor) {
                Ok(_) => SeatNotice::info("Shuffling seats"),
                Err(err) => SeatNotice::warning(err.to_string()),
            },
        };
        notices.send(notice);
    }
}
