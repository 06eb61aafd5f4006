//! Canonical seat identifiers.
//!
//! The host engine addresses seats by a raw native index where the driver is
//! `-1` and passengers count up from `0`. Everything inside this crate uses
//! [`SeatId`] and converts at the edges.

use serde::{Deserialize, Serialize};

/// One of the four seats a standard vehicle exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeatId {
    Driver,
    FrontPassenger,
    RearLeft,
    RearRight,
}

impl SeatId {
    /// All seats in native index order.
    pub const ALL: [SeatId; 4] = [
        SeatId::Driver,
        SeatId::FrontPassenger,
        SeatId::RearLeft,
        SeatId::RearRight,
    ];

    /// Lowest raw index accepted for numeric pass-through.
    pub const NATIVE_MIN: i32 = -1;
    /// Highest raw index accepted for numeric pass-through.
    pub const NATIVE_MAX: i32 = 2;

    /// Host-native seat index (`-1` = driver).
    pub fn native_index(self) -> i32 {
        match self {
            SeatId::Driver => -1,
            SeatId::FrontPassenger => 0,
            SeatId::RearLeft => 1,
            SeatId::RearRight => 2,
        }
    }

    /// Inverse of [`SeatId::native_index`]. `None` outside `-1..=2`.
    pub fn from_native(index: i32) -> Option<SeatId> {
        match index {
            -1 => Some(SeatId::Driver),
            0 => Some(SeatId::FrontPassenger),
            1 => Some(SeatId::RearLeft),
            2 => Some(SeatId::RearRight),
            _ => None,
        }
    }

    /// Position in [`SeatId::ALL`], used to index per-seat arrays.
    pub fn slot(self) -> usize {
        match self {
            SeatId::Driver => 0,
            SeatId::FrontPassenger => 1,
            SeatId::RearLeft => 2,
            SeatId::RearRight => 3,
        }
    }

    /// Human-readable label shown in notices.
    pub fn label(self) -> &'static str {
        match self {
            SeatId::Driver => "Driver",
            SeatId::FrontPassenger => "Front Passenger",
            SeatId::RearLeft => "Rear Left",
            SeatId::RearRight => "Rear Right",
        }
    }

    /// The seat on the other side of the same row, where a shuffle lands.
    pub fn across(self) -> SeatId {
        match self {
            SeatId::Driver => SeatId::FrontPassenger,
            SeatId::FrontPassenger => SeatId::Driver,
            SeatId::RearLeft => SeatId::RearRight,
            SeatId::RearRight => SeatId::RearLeft,
        }
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_index_roundtrip() {
        for seat in SeatId::ALL {
            assert_eq!(SeatId::from_native(seat.native_index()), Some(seat));
        }
    }

    #[test]
    fn test_native_range_bounds() {
        assert_eq!(SeatId::from_native(SeatId::NATIVE_MIN), Some(SeatId::Driver));
        assert_eq!(SeatId::from_native(SeatId::NATIVE_MAX), Some(SeatId::RearRight));
        assert_eq!(SeatId::from_native(-2), None);
        assert_eq!(SeatId::from_native(3), None);
    }

    #[test]
    fn test_slot_matches_all_order() {
        for (i, seat) in SeatId::ALL.iter().enumerate() {
            assert_eq!(seat.slot(), i);
        }
    }

    #[test]
    fn test_across_stays_in_row() {
        for seat in SeatId::ALL {
            assert_ne!(seat.across(), seat);
            assert_eq!(seat.across().across(), seat);
        }
        assert_eq!(SeatId::FrontPassenger.across(), SeatId::Driver);
    }
}
