//! Shared seating state and the pure monitor decision.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::SeatingConfig;
use crate::seat::SeatId;

// =============================================================================
// Resource: shared state
// =============================================================================

/// State shared by the monitor, the command path and the entry controller.
///
/// The temporary-disable signal is an expiry timestamp rather than a flag
/// cleared by a timer, so nothing is left running if the window is replaced
/// or the configuration changes mid-window.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct AntiShuffleState {
    suspended_until: Option<Duration>,
    /// When the last suspension (shuffle command or seat switch) was raised.
    pub last_override_at: Option<Duration>,
    /// When the entry controller last committed an entry.
    pub last_entry_at: Option<Duration>,
    next_poll_at: Duration,
}

impl AntiShuffleState {
    /// Raise the temporary-disable signal for `window`. A call while a window
    /// is pending restarts its end at `now + window`; windows never stack.
    pub fn suspend(&mut self, now: Duration, window: Duration) {
        self.suspended_until = Some(now + window);
        self.last_override_at = Some(now);
        // Re-evaluate on the next monitor pass instead of waiting out the
        // current poll interval.
        self.next_poll_at = now;
    }

    pub fn is_suspended(&self, now: Duration) -> bool {
        self.suspended_until.is_some_and(|until| now < until)
    }

    pub fn suspended_until(&self) -> Option<Duration> {
        self.suspended_until
    }

    /// Drop an expired window. Returns true when one was dropped.
    pub fn lapse_if_expired(&mut self, now: Duration) -> bool {
        match self.suspended_until {
            Some(until) if now >= until => {
                self.suspended_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn poll_due(&self, now: Duration) -> bool {
        now >= self.next_poll_at
    }

    pub fn schedule_next(&mut self, now: Duration, interval: Duration) {
        self.next_poll_at = now + interval;
    }

    pub fn record_entry(&mut self, now: Duration) {
        self.last_entry_at = Some(now);
    }

    /// True when at least `cooldown` has passed since the last entry.
    pub fn cooldown_elapsed(&self, now: Duration, cooldown: Duration) -> bool {
        self.last_entry_at
            .map_or(true, |at| now.saturating_sub(at) >= cooldown)
    }

    /// Back to the safe default: no suspension, no timestamps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Pure decision
// =============================================================================

/// Which polling cadence the monitor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorPhase {
    /// Feature off or temporarily suspended.
    Suspended,
    InVehicle,
    OnFoot,
}

impl MonitorPhase {
    pub fn interval(self, config: &SeatingConfig) -> Duration {
        Duration::from_millis(match self {
            MonitorPhase::Suspended => config.monitor_suspended_ms,
            MonitorPhase::InVehicle => config.monitor_in_vehicle_ms,
            MonitorPhase::OnFoot => config.monitor_on_foot_ms,
        })
    }
}

/// Restriction flag value and polling phase for one actor.
///
/// `seat` is the seat the actor occupies, `None` when on foot.
pub fn evaluate_restriction(
    enabled: bool,
    suspended: bool,
    seat: Option<SeatId>,
    restricted_seat: SeatId,
) -> (bool, MonitorPhase) {
    if !enabled || suspended {
        return (false, MonitorPhase::Suspended);
    }
    match seat {
        Some(seat) => (seat == restricted_seat, MonitorPhase::InVehicle),
        None => (false, MonitorPhase::OnFoot),
    }
}
