//! Tests for the shared seating state and the monitor decision.

use std::time::Duration;

use super::*;

use crate::config::SeatingConfig;
use crate::seat::SeatId;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

// -------------------------------------------------------------------------
// Suspension window
// -------------------------------------------------------------------------

#[test]
fn test_suspend_covers_window_then_lapses() {
    let mut state = AntiShuffleState::default();
    state.suspend(ms(1_000), ms(3_000));
    assert!(state.is_suspended(ms(1_000)));
    assert!(state.is_suspended(ms(3_999)));
    assert!(!state.is_suspended(ms(4_000)));
    assert!(!state.lapse_if_expired(ms(3_999)));
    assert!(state.lapse_if_expired(ms(4_000)));
    assert_eq!(state.suspended_until(), None);
    assert!(!state.lapse_if_expired(ms(4_100)));
}

#[test]
fn test_second_suspend_restarts_window() {
    let mut state = AntiShuffleState::default();
    state.suspend(ms(0), ms(3_000));
    // A shorter window raised mid-way replaces the pending end.
    state.suspend(ms(100), ms(1_500));
    assert_eq!(state.suspended_until(), Some(ms(1_600)));
    assert!(state.is_suspended(ms(1_599)));
    assert!(!state.is_suspended(ms(1_600)));
    assert_eq!(state.last_override_at, Some(ms(100)));
    // A longer one pushes it out again.
    state.suspend(ms(1_000), ms(3_000));
    assert_eq!(state.suspended_until(), Some(ms(4_000)));
}

#[test]
fn test_suspend_forces_immediate_poll() {
    let mut state = AntiShuffleState::default();
    state.schedule_next(ms(0), ms(1_000));
    assert!(!state.poll_due(ms(200)));
    state.suspend(ms(200), ms(3_000));
    assert!(state.poll_due(ms(200)));
}

// -------------------------------------------------------------------------
// Entry cooldown
// -------------------------------------------------------------------------

#[test]
fn test_cooldown_without_prior_entry() {
    let state = AntiShuffleState::default();
    assert!(state.cooldown_elapsed(ms(0), ms(1_500)));
}

#[test]
fn test_cooldown_blocks_until_elapsed() {
    let mut state = AntiShuffleState::default();
    state.record_entry(ms(10_000));
    assert!(!state.cooldown_elapsed(ms(10_000), ms(1_500)));
    assert!(!state.cooldown_elapsed(ms(11_499), ms(1_500)));
    assert!(state.cooldown_elapsed(ms(11_500), ms(1_500)));
}

#[test]
fn test_reset_clears_everything() {
    let mut state = AntiShuffleState::default();
    state.suspend(ms(0), ms(3_000));
    state.record_entry(ms(10));
    state.reset();
    assert_eq!(state, AntiShuffleState::default());
    assert!(!state.is_suspended(ms(1)));
}

// -------------------------------------------------------------------------
// Monitor decision
// -------------------------------------------------------------------------

#[test]
fn test_restricts_only_in_restricted_seat() {
    let restricted = SeatId::FrontPassenger;
    assert_eq!(
        evaluate_restriction(true, false, Some(SeatId::FrontPassenger), restricted),
        (true, MonitorPhase::InVehicle)
    );
    assert_eq!(
        evaluate_restriction(true, false, Some(SeatId::RearLeft), restricted),
        (false, MonitorPhase::InVehicle)
    );
    assert_eq!(
        evaluate_restriction(true, false, None, restricted),
        (false, MonitorPhase::OnFoot)
    );
}

#[test]
fn test_disabled_or_suspended_never_restricts() {
    let seat = Some(SeatId::FrontPassenger);
    assert_eq!(
        evaluate_restriction(false, false, seat, SeatId::FrontPassenger),
        (false, MonitorPhase::Suspended)
    );
    assert_eq!(
        evaluate_restriction(true, true, seat, SeatId::FrontPassenger),
        (false, MonitorPhase::Suspended)
    );
}

#[test]
fn test_phase_intervals_follow_config() {
    let config = SeatingConfig::default();
    assert_eq!(MonitorPhase::InVehicle.interval(&config), ms(100));
    assert_eq!(MonitorPhase::OnFoot.interval(&config), ms(1_000));
    assert_eq!(MonitorPhase::Suspended.interval(&config), ms(100));
    assert!(MonitorPhase::InVehicle.interval(&config) < MonitorPhase::OnFoot.interval(&config));
}
