//! Pure checks the entry controller runs each frame, in order.

use std::time::Duration;

use bevy::prelude::*;

use crate::anti_shuffle::AntiShuffleState;
use crate::candidates::{pick_nearest, Candidate};
use crate::error::{Gate, SeatError};
use crate::host::{ActorCondition, DoorLock, SeatOccupancy};
use crate::resolver::{resolve, SeatPolicy};
use crate::seat::SeatId;

/// A committed entry: which vehicle and which seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPlan {
    pub vehicle: Entity,
    pub seat: SeatId,
}

/// Actor must be unhurt, standing on foot, outside any vehicle, and past the
/// cooldown since the last committed entry.
pub fn check_eligibility(
    condition: &ActorCondition,
    in_vehicle: bool,
    state: &AntiShuffleState,
    now: Duration,
    cooldown: Duration,
) -> Result<(), SeatError> {
    if condition.injured {
        return Err(SeatError::Ineligible(Gate::Injured));
    }
    if in_vehicle {
        return Err(SeatError::Ineligible(Gate::AlreadyInVehicle));
    }
    if condition.airborne {
        return Err(SeatError::Ineligible(Gate::NotOnFoot));
    }
    if !state.cooldown_elapsed(now, cooldown) {
        return Err(SeatError::Ineligible(Gate::Cooldown));
    }
    Ok(())
}

/// Vehicles without a lock component count as unlocked.
pub fn check_lock(lock: Option<&DoorLock>, locked_threshold: u8) -> Result<(), SeatError> {
    match lock {
        Some(lock) if lock.status >= locked_threshold => Err(SeatError::Ineligible(Gate::Locked)),
        _ => Ok(()),
    }
}

/// Closest vehicle whose origin lies within `radius` of `observer`.
pub fn closest_vehicle(
    observer: Vec3,
    radius: f32,
    vehicles: impl IntoIterator<Item = (Entity, Vec3)>,
) -> Option<Entity> {
    let radius_sq = radius * radius;
    vehicles
        .into_iter()
        .map(|(entity, pos)| (entity, pos.distance_squared(observer)))
        .filter(|(_, d)| *d <= radius_sq)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

/// Preferred seat is the one behind the nearest door; the resolver decides
/// from there. `None` from the resolver only happens when that seat is taken.
pub fn choose_seat(
    occupancy: &impl SeatOccupancy,
    candidates: &[Candidate],
    policy: SeatPolicy,
) -> Result<SeatId, SeatError> {
    let preferred = pick_nearest(candidates).ok_or(SeatError::NoCandidate)?.seat;
    resolve(occupancy, preferred, candidates, policy).ok_or(SeatError::SeatOccupied(preferred))
}
