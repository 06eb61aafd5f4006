// ---------------------------------------------------------------------------
// SeatError: expected, non-fatal outcomes of seat operations
// ---------------------------------------------------------------------------

use std::fmt;

use crate::seat::SeatId;

/// The eligibility gate that stopped an entry attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Injured,
    NotOnFoot,
    AlreadyInVehicle,
    Cooldown,
    Locked,
}

impl Gate {
    pub fn label(self) -> &'static str {
        match self {
            Gate::Injured => "injured",
            Gate::NotOnFoot => "not on foot",
            Gate::AlreadyInVehicle => "already in a vehicle",
            Gate::Cooldown => "entry cooldown active",
            Gate::Locked => "vehicle locked",
        }
    }
}

/// Why a seat operation did not happen. None of these are fatal; the worst
/// case is that no seat change occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatError {
    /// The actor is on foot.
    NotInVehicle,
    /// The actor's vehicle reference no longer resolves to a vehicle.
    NoVehicleHandle,
    /// Someone else sits in the requested seat.
    SeatOccupied(SeatId),
    /// No door of the target vehicle is within reach.
    NoCandidate,
    /// An entry gate failed.
    Ineligible(Gate),
}

impl fmt::Display for SeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatError::NotInVehicle => write!(f, "You are not in a vehicle"),
            SeatError::NoVehicleHandle => write!(f, "Could not find your vehicle"),
            SeatError::SeatOccupied(seat) => write!(f, "The {seat} seat is occupied"),
            SeatError::NoCandidate => write!(f, "No door within reach"),
            SeatError::Ineligible(gate) => write!(f, "Cannot enter: {}", gate.label()),
        }
    }
}

impl std::error::Error for SeatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_seat_occupied_names_seat() {
        let msg = SeatError::SeatOccupied(SeatId::RearLeft).to_string();
        assert!(msg.contains("Rear Left"), "got: {msg}");
    }

    #[test]
    fn test_display_ineligible_names_gate() {
        let msg = format!("{}", SeatError::Ineligible(Gate::Cooldown));
        assert!(msg.contains("cooldown"), "got: {msg}");
    }

    #[test]
    fn test_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(SeatError::NotInVehicle);
        assert!(err.source().is_none());
    }
}
