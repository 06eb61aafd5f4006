//! Final seat choice from a preferred seat, occupancy and the candidate list.

use serde::{Deserialize, Serialize};

use crate::candidates::Candidate;
use crate::host::SeatOccupancy;
use crate::seat::SeatId;

/// What to do when the seat at the approached door is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatPolicy {
    /// Target the preferred seat even when occupied and let the host's enter
    /// action decide what happens to the occupant.
    pub override_when_occupied: bool,
    /// Fall back to the nearest free candidate seat.
    pub fallback_to_nearest_free: bool,
}

impl Default for SeatPolicy {
    fn default() -> Self {
        Self {
            override_when_occupied: false,
            fallback_to_nearest_free: true,
        }
    }
}

/// Pick the seat to enter. First matching rule wins:
///
/// 1. preferred seat is free
/// 2. policy overrides occupancy
/// 3. fallback disabled → `None`
/// 4. nearest free candidate, or `None`
pub fn resolve(
    occupancy: &impl SeatOccupancy,
    preferred: SeatId,
    candidates: &[Candidate],
    policy: SeatPolicy,
) -> Option<SeatId> {
    if occupancy.is_free(preferred) {
        return Some(preferred);
    }
    if policy.override_when_occupied {
        return Some(preferred);
    }
    if !policy.fallback_to_nearest_free {
        return None;
    }

    candidates
        .iter()
        .filter(|c| occupancy.is_free(c.seat))
        .min_by(|a, b| a.distance_sq.total_cmp(&b.distance_sq))
        .map(|c| c.seat)
}
