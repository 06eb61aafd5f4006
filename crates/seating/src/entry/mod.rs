//! Door-based entry.
//!
//! On a press of the enter control the controller checks the player can get
//! in, finds the vehicle they are heading for (or the closest one), refuses
//! locked vehicles, and asks the host to walk them to the seat behind the
//! nearest door. Committed entries start a cooldown shared with the
//! anti-shuffle state.

pub mod attempt_log;
pub mod gates;
pub mod systems;

#[cfg(test)]
mod tests_gates;

pub use attempt_log::*;
pub use gates::*;
pub use systems::*;
