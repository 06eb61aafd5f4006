//! Static catalog of the named anchor points that belong to each seat.
//!
//! Each seat lists a door anchor and a seat anchor. Both are probed during
//! candidate collection and the closer one wins, so approaching from an open
//! door or leaning in over the seat both resolve to the same seat.

use crate::seat::SeatId;

/// One catalog row: a seat, its label, and the anchors that locate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorCatalogEntry {
    pub seat: SeatId,
    pub label: &'static str,
    pub anchors: &'static [&'static str],
}

pub const DRIVER_ANCHORS: &[&str] = &["door_dside_f", "seat_dside_f"];
pub const FRONT_PASSENGER_ANCHORS: &[&str] = &["door_pside_f", "seat_pside_f"];
pub const REAR_LEFT_ANCHORS: &[&str] = &["door_dside_r", "seat_dside_r"];
pub const REAR_RIGHT_ANCHORS: &[&str] = &["door_pside_r", "seat_pside_r"];

/// Catalog in native seat order.
pub const ANCHOR_CATALOG: [AnchorCatalogEntry; 4] = [
    AnchorCatalogEntry {
        seat: SeatId::Driver,
        label: "Driver",
        anchors: DRIVER_ANCHORS,
    },
    AnchorCatalogEntry {
        seat: SeatId::FrontPassenger,
        label: "Front Passenger",
        anchors: FRONT_PASSENGER_ANCHORS,
    },
    AnchorCatalogEntry {
        seat: SeatId::RearLeft,
        label: "Rear Left",
        anchors: REAR_LEFT_ANCHORS,
    },
    AnchorCatalogEntry {
        seat: SeatId::RearRight,
        label: "Rear Right",
        anchors: REAR_RIGHT_ANCHORS,
    },
];

/// Anchor names for a seat, in probe order.
pub fn anchors_for(seat: SeatId) -> &'static [&'static str] {
    catalog_entry(seat).anchors
}

/// Full catalog row for a seat.
pub fn catalog_entry(seat: SeatId) -> &'static AnchorCatalogEntry {
    &ANCHOR_CATALOG[seat.slot()]
}
