//! Headless stand-in for the host engine.
//!
//! Applies the request events the seating core emits to `VehicleSeats` and
//! `InVehicle`, instantly (no walking, no animations). It also reproduces the
//! platform behavior the anti-shuffle monitor exists to block: when a driver
//! seat frees up, the front passenger is moved into it unless their
//! [`ShuffleRestriction`] is active.
//!
//! Used by the demo binary and the integration tests. A real engine
//! integration replaces this plugin with its own consumers of the same events.

use bevy::prelude::*;
use bevy::utils::HashMap;

use crate::host::{
    ClearActorTasks, EnterVehicleRequest, EnteringVehicle, InVehicle, PlaceInSeatRequest,
    ShuffleRestriction, ShuffleToNextSeatRequest, VehicleSeats,
};
use crate::seat::SeatId;

/// Get `actor` out of whatever vehicle it sits in.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitVehicleRequest {
    pub actor: Entity,
}

/// Which vehicles had someone in the driver seat at the end of last frame.
/// Only vehicles that still exist are tracked.
#[derive(Resource, Debug, Default)]
pub struct DriverSeatWatch {
    occupied: HashMap<Entity, bool>,
}

impl DriverSeatWatch {
    pub fn tracks(&self, vehicle: Entity) -> bool {
        self.occupied.contains_key(&vehicle)
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Seat `actor` in `seat`, vacating any seat it held in `seats` first.
fn seat_actor(
    commands: &mut Commands,
    seats: &mut VehicleSeats,
    actor: Entity,
    vehicle: Entity,
    seat: SeatId,
) {
    seats.vacate(actor);
    seats.set(seat, Some(actor));
    commands
        .entity(actor)
        .insert(InVehicle { vehicle, seat })
        .remove::<EnteringVehicle>();
}

// =============================================================================
// Systems
// =============================================================================

/// System: drop pending entries. The only task this host queues is the
/// "trying to enter" flag.
pub fn apply_clear_tasks(mut commands: Commands, mut events: EventReader<ClearActorTasks>) {
    for event in events.read() {
        if let Some(mut entity) = commands.get_entity(event.actor) {
            entity.remove::<EnteringVehicle>();
        }
    }
}

/// System: complete enter requests on the spot. An occupied seat is refused;
/// this host never drags occupants out.
pub fn apply_enter_requests(
    mut commands: Commands,
    mut events: EventReader<EnterVehicleRequest>,
    mut vehicles: Query<&mut VehicleSeats>,
) {
    for request in events.read() {
        let Ok(mut seats) = vehicles.get_mut(request.vehicle) else {
            warn!("enter request for missing vehicle {:?}", request.vehicle);
            continue;
        };
        match seats.occupant(request.seat) {
            Some(occupant) if occupant != request.actor => {
                warn!(
                    "enter refused: {} seat of {:?} held by {occupant:?}",
                    request.seat, request.vehicle
                );
            }
            _ => {
                seat_actor(&mut commands, &mut seats, request.actor, request.vehicle, request.seat);
                debug!("{:?} entered {:?} at {}", request.actor, request.vehicle, request.seat);
            }
        }
    }
}

/// System: teleport between seats of the same vehicle.
pub fn apply_seat_placements(
    mut commands: Commands,
    mut events: EventReader<PlaceInSeatRequest>,
    mut vehicles: Query<&mut VehicleSeats>,
) {
    for request in events.read() {
        let Ok(mut seats) = vehicles.get_mut(request.vehicle) else {
            continue;
        };
        if seats.seat_of(request.actor).is_none() {
            warn!("placement refused: {:?} is not in {:?}", request.actor, request.vehicle);
            continue;
        }
        if !seats.is_free(request.seat) && seats.occupant(request.seat) != Some(request.actor) {
            warn!("placement refused: {} seat is taken", request.seat);
            continue;
        }
        seat_actor(&mut commands, &mut seats, request.actor, request.vehicle, request.seat);
    }
}

/// System: the host's shuffle task slides the actor across its row.
pub fn apply_shuffle_requests(
    mut commands: Commands,
    mut events: EventReader<ShuffleToNextSeatRequest>,
    mut vehicles: Query<&mut VehicleSeats>,
) {
    for request in events.read() {
        let Ok(mut seats) = vehicles.get_mut(request.vehicle) else {
            continue;
        };
        let Some(current) = seats.seat_of(request.actor) else {
            continue;
        };
        let target = current.across();
        if !seats.is_free(target) {
            debug!("shuffle blocked: {target} seat is taken");
            continue;
        }
        seat_actor(&mut commands, &mut seats, request.actor, request.vehicle, target);
    }
}

/// System: vacate the seat and drop `InVehicle`.
pub fn apply_exit_requests(
    mut commands: Commands,
    mut events: EventReader<ExitVehicleRequest>,
    riders: Query<&InVehicle>,
    mut vehicles: Query<&mut VehicleSeats>,
) {
    for request in events.read() {
        let Ok(ride) = riders.get(request.actor) else {
            continue;
        };
        if let Ok(mut seats) = vehicles.get_mut(ride.vehicle) {
            seats.vacate(request.actor);
        }
        commands.entity(request.actor).remove::<InVehicle>();
    }
}

/// System: move the front passenger into a driver seat that just freed up,
/// unless the passenger's restriction flag is raised.
///
/// Only the occupied-to-free transition triggers the move, so a driver seat
/// that was already empty (for instance after a deliberate seat switch) is
/// left alone.
pub fn auto_shuffle_into_driver_seat(
    mut commands: Commands,
    mut watch: ResMut<DriverSeatWatch>,
    mut vehicles: Query<(Entity, &mut VehicleSeats)>,
    restrictions: Query<&ShuffleRestriction>,
) {
    for (vehicle, mut seats) in &mut vehicles {
        let was_occupied = watch.occupied.get(&vehicle).copied().unwrap_or(false);
        if was_occupied && seats.is_free(SeatId::Driver) {
            if let Some(passenger) = seats.occupant(SeatId::FrontPassenger) {
                let restricted = restrictions.get(passenger).is_ok_and(|r| r.active);
                if restricted {
                    debug!("auto-shuffle blocked for {passenger:?}");
                } else {
                    info!("auto-shuffle: {passenger:?} moved to the driver seat of {vehicle:?}");
                    seat_actor(&mut commands, &mut seats, passenger, vehicle, SeatId::Driver);
                }
            }
        }
        watch
            .occupied
            .insert(vehicle, !seats.is_free(SeatId::Driver));
    }
    watch.occupied.retain(|vehicle, _| vehicles.contains(*vehicle));
}

pub struct SimHostPlugin;

impl Plugin for SimHostPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExitVehicleRequest>()
            .init_resource::<DriverSeatWatch>()
            .add_systems(
                PostUpdate,
                (
                    apply_clear_tasks,
                    apply_enter_requests,
                    apply_seat_placements,
                    apply_shuffle_requests,
                    apply_exit_requests,
                    auto_shuffle_into_driver_seat,
                )
                    .chain(),
            );
    }
}
