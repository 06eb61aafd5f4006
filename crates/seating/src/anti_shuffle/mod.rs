//! Anti-shuffle monitor.
//!
//! The host automatically moves an occupant of the front passenger seat into
//! the driver seat as soon as the driver seat frees up. While the player sits
//! in that seat the monitor keeps the host's restriction flag raised; it
//! drops the flag on foot, when the feature is off, and during temporary
//! suspensions requested by the shuffle command or a direct seat switch.

pub mod state;
pub mod systems;

#[cfg(test)]
mod tests_state;

pub use state::*;
pub use systems::*;
