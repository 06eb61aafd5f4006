//! Ordering of the seating systems within `Update`.
//!
//! ```text
//! Commands  →  Entry  →  Monitor  →  Notices
//! ```
//!
//! * **Commands** – Chat commands and the shuffle key. A suspension raised
//!   here is seen by the monitor in the same frame.
//! * **Entry** – The door entry controller.
//! * **Monitor** – The anti-shuffle monitor. Runs after everything that can
//!   suspend it.
//! * **Notices** – Collects notices emitted by the phases above.
//!
//! Host-side consumers of the request events belong in `PostUpdate` (the
//! reference host in [`crate::sim_host`] does exactly that).

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatingSet {
    Commands,
    Entry,
    Monitor,
    Notices,
}

pub(crate) fn configure(app: &mut App) {
    app.configure_sets(
        Update,
        (
            SeatingSet::Commands,
            SeatingSet::Entry,
            SeatingSet::Monitor,
            SeatingSet::Notices,
        )
            .chain(),
    );
}
