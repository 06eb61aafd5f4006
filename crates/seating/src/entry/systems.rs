//! The entry controller system and its plugin.

use std::time::Duration;

use bevy::prelude::*;

use crate::anti_shuffle::AntiShuffleState;
use crate::candidates::{collect, Candidate, PlacedAnchors};
use crate::config::SeatingConfig;
use crate::error::SeatError;
use crate::host::{
    ActorCondition, ClearActorTasks, DoorLock, EnterVehicleRequest, EnteringVehicle, InVehicle,
    OccupancyFor, PlayerActor, SuppressedEntryPress, VehicleAnchors, VehicleSeats,
};
use crate::keybindings::SeatKeyBindings;
use crate::notices::SeatNotice;
use crate::SeatingSet;

use super::attempt_log::EntryAttemptLog;
use super::gates::{check_eligibility, check_lock, choose_seat, closest_vehicle, EntryPlan};

// =============================================================================
// Default-entry suppression
// =============================================================================

/// Raised while the player stands in reach of an enterable door.
///
/// The host gates its own enter-vehicle handling on
/// [`default_entry_allowed`] so both handlers never act on one press.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultEntrySuppression {
    pub active: bool,
}

/// Run condition for the host's default enter-vehicle handler.
pub fn default_entry_allowed(suppression: Res<DefaultEntrySuppression>) -> bool {
    !suppression.active
}

// =============================================================================
// Controller
// =============================================================================

type ActorQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Transform,
        &'static ActorCondition,
        Option<&'static InVehicle>,
        Option<&'static EnteringVehicle>,
    ),
    With<PlayerActor>,
>;

type VehicleQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Transform,
        &'static VehicleAnchors,
        &'static VehicleSeats,
        Option<&'static DoorLock>,
    ),
>;

type ActorRow<'a> = (
    Entity,
    &'a Transform,
    &'a ActorCondition,
    Option<&'a InVehicle>,
    Option<&'a EnteringVehicle>,
);

/// The vehicle the player could enter this frame, with the seats in reach.
struct Armed<'a> {
    actor: Entity,
    vehicle: Entity,
    seats: &'a VehicleSeats,
    candidates: Vec<Candidate>,
}

/// Eligibility, target acquisition and lock check. Candidates are computed
/// here so suppression can follow door proximity rather than vehicle range.
fn arm<'a>(
    config: &SeatingConfig,
    state: &AntiShuffleState,
    now: Duration,
    (actor, transform, condition, in_vehicle, entering): ActorRow,
    vehicles: &'a VehicleQuery,
) -> Result<Armed<'a>, SeatError> {
    check_eligibility(
        condition,
        in_vehicle.is_some(),
        state,
        now,
        Duration::from_millis(config.entry_cooldown_ms),
    )?;

    let observer = transform.translation;
    let target = entering
        .map(|e| e.0)
        .filter(|v| vehicles.contains(*v))
        .or_else(|| {
            closest_vehicle(
                observer,
                config.vehicle_search_radius,
                vehicles.iter().map(|(e, t, ..)| (e, t.translation)),
            )
        })
        .ok_or(SeatError::NoCandidate)?;
    let (vehicle, vehicle_transform, anchors, seats, lock) =
        vehicles.get(target).map_err(|_| SeatError::NoVehicleHandle)?;
    check_lock(lock, config.locked_threshold)?;

    let placed = PlacedAnchors {
        transform: vehicle_transform,
        anchors,
    };
    let candidates = collect(&placed, observer, config.anchor_max_distance);
    if candidates.is_empty() {
        return Err(SeatError::NoCandidate);
    }
    Ok(Armed {
        actor,
        vehicle,
        seats,
        candidates,
    })
}

/// System: react to the enter control by walking the player to the seat
/// behind the nearest door.
///
/// Either the bound key or a [`SuppressedEntryPress`] routed from the host
/// counts as a press. While a door is in reach the key press is consumed so
/// the host's default handler never sees it.
#[allow(clippy::too_many_arguments)]
pub fn door_entry_controller(
    time: Res<Time>,
    config: Res<SeatingConfig>,
    bindings: Res<SeatKeyBindings>,
    mut keys: Option<ResMut<ButtonInput<KeyCode>>>,
    mut routed: EventReader<SuppressedEntryPress>,
    mut state: ResMut<AntiShuffleState>,
    mut suppression: ResMut<DefaultEntrySuppression>,
    mut log: ResMut<EntryAttemptLog>,
    actors: ActorQuery,
    vehicles: VehicleQuery,
    mut clear_tasks: EventWriter<ClearActorTasks>,
    mut enter: EventWriter<EnterVehicleRequest>,
    mut notices: EventWriter<SeatNotice>,
) {
    let key_press = keys
        .as_deref()
        .is_some_and(|k| bindings.enter_vehicle.just_pressed(k));
    let routed_press = routed.read().count() > 0;
    let pressed = key_press || routed_press;

    if !config.door_entry_enabled {
        suppression.set_if_neq(DefaultEntrySuppression { active: false });
        return;
    }

    // Single-player: with no (or several) player actors there is nothing to drive.
    let Ok(actor_row) = actors.get_single() else {
        suppression.set_if_neq(DefaultEntrySuppression { active: false });
        return;
    };
    let now = time.elapsed();
    let armed = match arm(&config, &state, now, actor_row, &vehicles) {
        Ok(armed) => armed,
        Err(err) => {
            suppression.set_if_neq(DefaultEntrySuppression { active: false });
            if pressed {
                debug!("door entry refused: {err}");
                log.push(now, Err(err));
            }
            return;
        }
    };

    suppression.set_if_neq(DefaultEntrySuppression {
        active: config.suppress_default_entry,
    });
    if !pressed {
        return;
    }
    if key_press && suppression.active {
        if let Some(keys) = keys.as_mut() {
            keys.clear_just_pressed(bindings.enter_vehicle.key);
        }
    }

    let occupancy = OccupancyFor {
        seats: armed.seats,
        requester: armed.actor,
    };
    let seat = match choose_seat(&occupancy, &armed.candidates, config.policy) {
        Ok(seat) => seat,
        Err(err) => {
            if matches!(err, SeatError::SeatOccupied(_)) && config.notify_occupied {
                notices.send(SeatNotice::warning(err.to_string()));
            }
            log.push(now, Err(err));
            return;
        }
    };

    clear_tasks.send(ClearActorTasks { actor: armed.actor });
    state.record_entry(now);
    enter.send(EnterVehicleRequest {
        actor: armed.actor,
        vehicle: armed.vehicle,
        seat,
        timeout_ms: config.enter_timeout_ms,
        speed: config.enter_speed,
        flags: config.enter_flags,
    });
    log.push(
        now,
        Ok(EntryPlan {
            vehicle: armed.vehicle,
            seat,
        }),
    );
    info!("door entry: {:?} -> {seat} of {:?}", armed.actor, armed.vehicle);
}

pub struct EntryPlugin;

impl Plugin for EntryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DefaultEntrySuppression>()
            .init_resource::<EntryAttemptLog>()
            .add_systems(Update, door_entry_controller.in_set(SeatingSet::Entry));
    }
}
