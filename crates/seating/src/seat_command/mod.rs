//! Seat command: parse a seat token and validate a direct seat switch.
//!
//! The systems that act on the result live in [`crate::commands`].

pub mod parse;
pub mod switch;

pub use parse::*;
pub use switch::*;
