//! ECS contract between the seating core and the host engine.
//!
//! The host keeps the components below up to date (positions, occupancy,
//! locks, actor condition) and consumes the request events this crate emits.
//! The core never spawns or despawns vehicles; it only reads them and asks
//! the host to act.

use bevy::prelude::*;

use crate::seat::SeatId;

// =============================================================================
// Actor components
// =============================================================================

/// Marker for the locally controlled character the seating systems act on.
#[derive(Component, Debug, Default, Clone, Copy)]
#[require(ActorCondition, ShuffleRestriction)]
pub struct PlayerActor;

/// Physical condition the entry gate checks.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActorCondition {
    /// Dead, downed or otherwise incapacitated.
    pub injured: bool,
    /// Falling, jumping, ragdolling. Anything that is not standing on foot.
    pub airborne: bool,
}

/// Present while the actor sits in a vehicle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InVehicle {
    pub vehicle: Entity,
    pub seat: SeatId,
}

/// The host's "actor is trying to enter this vehicle" flag.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnteringVehicle(pub Entity);

/// The host-side flag that blocks automatic seat reassignment for this actor.
/// Written only by the anti-shuffle monitor (and cleared on shutdown).
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleRestriction {
    pub active: bool,
}

// =============================================================================
// Vehicle components
// =============================================================================

/// Named anchor points in the vehicle's local space.
#[derive(Component, Debug, Default, Clone)]
pub struct VehicleAnchors {
    points: Vec<(String, Vec3)>,
}

impl VehicleAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an anchor.
    pub fn with_anchor(mut self, name: impl Into<String>, local: Vec3) -> Self {
        self.insert(name, local);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, local: Vec3) {
        let name = name.into();
        if let Some(slot) = self.points.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = local;
        } else {
            self.points.push((name, local));
        }
    }

    /// Local offset of an anchor, if the vehicle has it.
    pub fn local(&self, name: &str) -> Option<Vec3> {
        self.points
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, offset)| *offset)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Door and seat anchors of a sedan, +X to the passenger side, -Z forward.
    pub fn four_door() -> Self {
        Self::two_door()
            .with_anchor("door_dside_r", Vec3::new(-1.0, 0.0, 0.6))
            .with_anchor("seat_dside_r", Vec3::new(-0.45, 0.3, 0.5))
            .with_anchor("door_pside_r", Vec3::new(1.0, 0.0, 0.6))
            .with_anchor("seat_pside_r", Vec3::new(0.45, 0.3, 0.5))
    }

    /// Front anchors only, as on a coupe.
    pub fn two_door() -> Self {
        Self::new()
            .with_anchor("door_dside_f", Vec3::new(-1.0, 0.0, -0.5))
            .with_anchor("seat_dside_f", Vec3::new(-0.45, 0.3, -0.4))
            .with_anchor("door_pside_f", Vec3::new(1.0, 0.0, -0.5))
            .with_anchor("seat_pside_f", Vec3::new(0.45, 0.3, -0.4))
    }
}

/// Who sits where.
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct VehicleSeats {
    occupants: [Option<Entity>; 4],
}

impl VehicleSeats {
    pub fn occupant(&self, seat: SeatId) -> Option<Entity> {
        self.occupants[seat.slot()]
    }

    pub fn is_free(&self, seat: SeatId) -> bool {
        self.occupant(seat).is_none()
    }

    pub fn set(&mut self, seat: SeatId, occupant: Option<Entity>) {
        self.occupants[seat.slot()] = occupant;
    }

    /// Seat currently held by `entity`, if any.
    pub fn seat_of(&self, entity: Entity) -> Option<SeatId> {
        SeatId::ALL
            .into_iter()
            .find(|seat| self.occupant(*seat) == Some(entity))
    }

    /// Vacate whatever seat `entity` holds.
    pub fn vacate(&mut self, entity: Entity) -> Option<SeatId> {
        let seat = self.seat_of(entity)?;
        self.set(seat, None);
        Some(seat)
    }

    pub fn with_occupant(mut self, seat: SeatId, occupant: Entity) -> Self {
        self.set(seat, Some(occupant));
        self
    }
}

/// Door lock status as reported by the host.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorLock {
    pub status: u8,
}

impl DoorLock {
    pub const NONE: u8 = 0;
    pub const UNLOCKED: u8 = 1;
    pub const LOCKED: u8 = 2;

    pub fn unlocked() -> Self {
        Self {
            status: Self::UNLOCKED,
        }
    }

    pub fn locked() -> Self {
        Self {
            status: Self::LOCKED,
        }
    }
}

impl Default for DoorLock {
    fn default() -> Self {
        Self::unlocked()
    }
}

// =============================================================================
// Requests to the host
// =============================================================================

/// Walk to the vehicle and get into `seat`. Timeout, speed and flags are
/// configuration pass-through; the host decides what happens on timeout.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnterVehicleRequest {
    pub actor: Entity,
    pub vehicle: Entity,
    pub seat: SeatId,
    pub timeout_ms: u32,
    pub speed: f32,
    pub flags: u32,
}

/// Drop any queued movement or interaction tasks on the actor.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearActorTasks {
    pub actor: Entity,
}

/// Teleport the actor into a seat of the vehicle it is already in.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceInSeatRequest {
    pub actor: Entity,
    pub vehicle: Entity,
    pub seat: SeatId,
}

/// Run the host's own shuffle-to-next-seat task.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleToNextSeatRequest {
    pub actor: Entity,
    pub vehicle: Entity,
}

/// A press of the entry control that the host detected after its default
/// input handling was suppressed (gamepad layers, disabled-control reads).
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuppressedEntryPress;

// =============================================================================
// Occupancy views
// =============================================================================

/// Read access to seat occupancy, as needed by the resolver.
pub trait SeatOccupancy {
    fn is_free(&self, seat: SeatId) -> bool;
}

impl SeatOccupancy for VehicleSeats {
    fn is_free(&self, seat: SeatId) -> bool {
        VehicleSeats::is_free(self, seat)
    }
}

/// Occupancy as seen by `requester`: a seat the requester itself holds is free.
pub struct OccupancyFor<'a> {
    pub seats: &'a VehicleSeats,
    pub requester: Entity,
}

impl SeatOccupancy for OccupancyFor<'_> {
    fn is_free(&self, seat: SeatId) -> bool {
        match self.seats.occupant(seat) {
            None => true,
            Some(occupant) => occupant == self.requester,
        }
    }
}
