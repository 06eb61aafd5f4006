use std::time::Duration;

use bevy::prelude::*;

use super::gates::*;
use crate::anti_shuffle::AntiShuffleState;
use crate::candidates::Candidate;
use crate::error::{Gate, SeatError};
use crate::host::{ActorCondition, DoorLock, VehicleSeats};
use crate::resolver::SeatPolicy;
use crate::seat::SeatId;

const COOLDOWN: Duration = Duration::from_millis(1_500);

fn candidate(seat: SeatId, distance_sq: f32) -> Candidate {
    Candidate {
        seat,
        label: seat.label(),
        distance_sq,
    }
}

// -------------------------------------------------------------------------
// Eligibility
// -------------------------------------------------------------------------

#[test]
fn test_healthy_actor_on_foot_is_eligible() {
    let state = AntiShuffleState::default();
    assert_eq!(
        check_eligibility(&ActorCondition::default(), false, &state, Duration::ZERO, COOLDOWN),
        Ok(())
    );
}

#[test]
fn test_each_gate_reports_itself() {
    let state = AntiShuffleState::default();
    let now = Duration::from_secs(5);
    let injured = ActorCondition {
        injured: true,
        airborne: false,
    };
    let airborne = ActorCondition {
        injured: false,
        airborne: true,
    };
    assert_eq!(
        check_eligibility(&injured, false, &state, now, COOLDOWN),
        Err(SeatError::Ineligible(Gate::Injured))
    );
    assert_eq!(
        check_eligibility(&airborne, false, &state, now, COOLDOWN),
        Err(SeatError::Ineligible(Gate::NotOnFoot))
    );
    assert_eq!(
        check_eligibility(&ActorCondition::default(), true, &state, now, COOLDOWN),
        Err(SeatError::Ineligible(Gate::AlreadyInVehicle))
    );
}

#[test]
fn test_cooldown_gate_after_recent_entry() {
    let mut state = AntiShuffleState::default();
    state.record_entry(Duration::from_secs(10));
    let healthy = ActorCondition::default();
    assert_eq!(
        check_eligibility(&healthy, false, &state, Duration::from_millis(11_000), COOLDOWN),
        Err(SeatError::Ineligible(Gate::Cooldown))
    );
    assert_eq!(
        check_eligibility(&healthy, false, &state, Duration::from_millis(11_500), COOLDOWN),
        Ok(())
    );
}

// -------------------------------------------------------------------------
// Lock and vehicle search
// -------------------------------------------------------------------------

#[test]
fn test_lock_threshold() {
    assert_eq!(check_lock(None, 2), Ok(()));
    assert_eq!(check_lock(Some(&DoorLock::unlocked()), 2), Ok(()));
    assert_eq!(
        check_lock(Some(&DoorLock::locked()), 2),
        Err(SeatError::Ineligible(Gate::Locked))
    );
    assert_eq!(check_lock(Some(&DoorLock { status: 7 }), 2), Err(SeatError::Ineligible(Gate::Locked)));
}

#[test]
fn test_closest_vehicle_within_radius() {
    let near = Entity::from_raw(1);
    let far = Entity::from_raw(2);
    let vehicles = [(far, Vec3::new(5.0, 0.0, 0.0)), (near, Vec3::new(0.0, 0.0, 3.0))];
    assert_eq!(closest_vehicle(Vec3::ZERO, 6.0, vehicles), Some(near));
    assert_eq!(closest_vehicle(Vec3::ZERO, 2.0, vehicles), None);
    assert_eq!(closest_vehicle(Vec3::ZERO, 6.0, std::iter::empty()), None);
}

// -------------------------------------------------------------------------
// Seat choice
// -------------------------------------------------------------------------

#[test]
fn test_choose_seat_prefers_nearest_door() {
    let seats = VehicleSeats::default();
    let candidates = [
        candidate(SeatId::Driver, 4.0),
        candidate(SeatId::RearRight, 0.25),
    ];
    assert_eq!(
        choose_seat(&seats, &candidates, SeatPolicy::default()),
        Ok(SeatId::RearRight)
    );
}

#[test]
fn test_choose_seat_without_candidates() {
    let seats = VehicleSeats::default();
    assert_eq!(
        choose_seat(&seats, &[], SeatPolicy::default()),
        Err(SeatError::NoCandidate)
    );
}

#[test]
fn test_choose_seat_reports_preferred_when_blocked() {
    let seats = VehicleSeats::default().with_occupant(SeatId::RearRight, Entity::from_raw(9));
    let candidates = [candidate(SeatId::RearRight, 0.25)];
    let policy = SeatPolicy {
        override_when_occupied: false,
        fallback_to_nearest_free: false,
    };
    assert_eq!(
        choose_seat(&seats, &candidates, policy),
        Err(SeatError::SeatOccupied(SeatId::RearRight))
    );
}

#[test]
fn test_choose_seat_falls_back_to_free_door() {
    let seats = VehicleSeats::default().with_occupant(SeatId::RearRight, Entity::from_raw(9));
    let candidates = [
        candidate(SeatId::RearRight, 0.25),
        candidate(SeatId::FrontPassenger, 1.5),
    ];
    assert_eq!(
        choose_seat(&seats, &candidates, SeatPolicy::default()),
        Ok(SeatId::FrontPassenger)
    );
}
