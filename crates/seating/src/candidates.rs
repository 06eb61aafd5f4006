//! Candidate collection: which seats of a vehicle are within reach of the
//! observer, and how far away each one is.

use bevy::prelude::*;

use crate::anchors::ANCHOR_CATALOG;
use crate::host::VehicleAnchors;
use crate::seat::SeatId;

/// A reachable seat and the squared distance to its nearest anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub seat: SeatId,
    pub label: &'static str,
    pub distance_sq: f32,
}

/// Resolves anchor names to world positions.
pub trait AnchorSource {
    fn anchor_position(&self, name: &str) -> Option<Vec3>;
}

/// A vehicle's local anchors placed in the world by its transform.
pub struct PlacedAnchors<'a> {
    pub transform: &'a Transform,
    pub anchors: &'a VehicleAnchors,
}

impl AnchorSource for PlacedAnchors<'_> {
    fn anchor_position(&self, name: &str) -> Option<Vec3> {
        self.anchors
            .local(name)
            .map(|local| self.transform.transform_point(local))
    }
}

/// Collect one candidate per seat whose nearest anchor lies within
/// `max_distance` of `observer`. Seats without any resolvable anchor are
/// skipped. Output order is unspecified.
///
/// A negative or NaN `max_distance` reaches nothing.
pub fn collect(source: &impl AnchorSource, observer: Vec3, max_distance: f32) -> Vec<Candidate> {
    let reach = max_distance.max(0.0);
    let max_sq = reach * reach;
    let mut candidates = Vec::with_capacity(ANCHOR_CATALOG.len());

    for entry in &ANCHOR_CATALOG {
        let nearest = entry
            .anchors
            .iter()
            .filter_map(|name| source.anchor_position(name))
            .map(|pos| pos.distance_squared(observer))
            .fold(None, |best: Option<f32>, d| match best {
                Some(b) if b <= d => Some(b),
                _ => Some(d),
            });

        if let Some(distance_sq) = nearest {
            if distance_sq <= max_sq {
                candidates.push(Candidate {
                    seat: entry.seat,
                    label: entry.label,
                    distance_sq,
                });
            }
        }
    }

    candidates
}

/// The globally nearest candidate, or `None` for an empty slice.
pub fn pick_nearest(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for c in candidates {
        match best {
            Some(b) if b.distance_sq <= c.distance_sq => {}
            _ => best = Some(c),
        }
    }
    best
}
