use bevy::prelude::*;

use crate::error::SeatError;
use crate::host::{InVehicle, VehicleSeats};
use crate::seat::SeatId;

/// What a seat switch will do once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatSwitch {
    /// The actor already sits there. Nothing to do.
    AlreadySeated(SeatId),
    Move {
        vehicle: Entity,
        from: SeatId,
        to: SeatId,
    },
}

/// Validate a direct move of `actor` into `target`.
///
/// `seats` is the occupancy of the vehicle named by `in_vehicle`, or `None`
/// when that handle no longer resolves.
pub fn plan_seat_switch(
    actor: Entity,
    in_vehicle: Option<&InVehicle>,
    seats: Option<&VehicleSeats>,
    target: SeatId,
) -> Result<SeatSwitch, SeatError> {
    let in_vehicle = in_vehicle.ok_or(SeatError::NotInVehicle)?;
    let seats = seats.ok_or(SeatError::NoVehicleHandle)?;
    if in_vehicle.seat == target {
        return Ok(SeatSwitch::AlreadySeated(target));
    }
    match seats.occupant(target) {
        Some(occupant) if occupant == actor => Ok(SeatSwitch::AlreadySeated(target)),
        Some(_) => Err(SeatError::SeatOccupied(target)),
        None => Ok(SeatSwitch::Move {
            vehicle: in_vehicle.vehicle,
            from: in_vehicle.seat,
            to: target,
        }),
    }
}

/// Validate a request for the host's shuffle task. Returns the vehicle.
pub fn plan_shuffle(
    in_vehicle: Option<&InVehicle>,
    seats: Option<&VehicleSeats>,
) -> Result<Entity, SeatError> {
    let in_vehicle = in_vehicle.ok_or(SeatError::NotInVehicle)?;
    seats.ok_or(SeatError::NoVehicleHandle)?;
    Ok(in_vehicle.vehicle)
}
