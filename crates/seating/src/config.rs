//! Tunables for door entry and the anti-shuffle monitor.
//!
//! Every threshold, duration and command name lives in [`SeatingConfig`] so
//! hosts can override them from a JSON file without recompiling. Missing
//! fields fall back to the defaults below.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resolver::SeatPolicy;
use crate::seat::SeatId;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    /// Pick the seat by nearest door when the enter control is pressed.
    pub door_entry_enabled: bool,
    /// Block the host's automatic move into the driver seat.
    pub anti_shuffle_enabled: bool,
    /// Capture the host's default entry handling while a door is in reach.
    pub suppress_default_entry: bool,
    /// Tell the player when the seat at their door is taken.
    pub notify_occupied: bool,

    /// Max distance (world units) from the actor to a door/seat anchor.
    pub anchor_max_distance: f32,
    /// Radius searched for a vehicle when the host has no entry target.
    pub vehicle_search_radius: f32,
    /// Lock status at or above which entry is refused.
    pub locked_threshold: u8,

    pub entry_cooldown_ms: u64,
    pub enter_timeout_ms: u32,
    pub enter_speed: f32,
    pub enter_flags: u32,
    pub policy: SeatPolicy,

    /// Seat whose occupant the host would move into a free driver seat.
    pub restricted_seat: SeatId,
    pub monitor_in_vehicle_ms: u64,
    pub monitor_on_foot_ms: u64,
    pub monitor_suspended_ms: u64,
    /// Suspension applied by the shuffle command.
    pub shuffle_window_ms: u64,
    /// Suspension applied around a direct seat switch.
    pub seat_switch_window_ms: u64,

    pub seat_command: String,
    pub shuffle_commands: Vec<String>,
    /// Name the shuffle action is registered under in the host's key mapper.
    pub shuffle_bind_name: String,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            door_entry_enabled: true,
            anti_shuffle_enabled: true,
            suppress_default_entry: true,
            notify_occupied: true,
            anchor_max_distance: 2.5,
            vehicle_search_radius: 6.0,
            locked_threshold: 2,
            entry_cooldown_ms: 1_500,
            enter_timeout_ms: 10_000,
            enter_speed: 1.0,
            enter_flags: 1,
            policy: SeatPolicy::default(),
            restricted_seat: SeatId::FrontPassenger,
            monitor_in_vehicle_ms: 100,
            monitor_on_foot_ms: 1_000,
            monitor_suspended_ms: 100,
            shuffle_window_ms: 3_000,
            seat_switch_window_ms: 1_500,
            seat_command: "seat".to_string(),
            shuffle_commands: vec!["shuff".to_string(), "shuffle".to_string()],
            shuffle_bind_name: "seat_shuffle".to_string(),
        }
    }
}

impl SeatingConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SeatingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.anchor_max_distance > 0.0) {
            return Err(ConfigError::Invalid(
                "anchor_max_distance must be positive".to_string(),
            ));
        }
        if !(self.vehicle_search_radius > 0.0) {
            return Err(ConfigError::Invalid(
                "vehicle_search_radius must be positive".to_string(),
            ));
        }
        if self.monitor_in_vehicle_ms == 0
            || self.monitor_on_foot_ms == 0
            || self.monitor_suspended_ms == 0
        {
            return Err(ConfigError::Invalid(
                "monitor intervals must be non-zero".to_string(),
            ));
        }
        if self.seat_command.trim().is_empty() {
            return Err(ConfigError::Invalid("seat_command is empty".to_string()));
        }
        if self.shuffle_commands.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "at least one shuffle command is required".to_string(),
            ));
        }
        if self
            .shuffle_commands
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(self.seat_command.trim()))
        {
            return Err(ConfigError::Invalid(format!(
                "shuffle command collides with seat command '{}'",
                self.seat_command
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// The document is not valid JSON for this schema.
    Parse(serde_json::Error),
    /// The values parse but make no sense together.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config read error: {e}"),
            ConfigError::Parse(e) => write!(f, "Config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SeatingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SeatingConfig::from_json_str(
            r#"{ "entry_cooldown_ms": 250, "policy": { "fallback_to_nearest_free": false } }"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.entry_cooldown_ms, 250);
        assert!(!config.policy.fallback_to_nearest_free);
        assert!(!config.policy.override_when_occupied);
        assert_eq!(config.seat_command, "seat");
        assert_eq!(config.restricted_seat, SeatId::FrontPassenger);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = SeatingConfig::default();
        config.restricted_seat = SeatId::RearLeft;
        config.shuffle_commands = vec!["swap".to_string()];
        let json = config.to_json_pretty().expect("serialize");
        let restored = SeatingConfig::from_json_str(&json).expect("parse");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = SeatingConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let err = SeatingConfig::from_json_str(r#"{ "anchor_max_distance": 0.0 }"#).unwrap_err();
        assert!(err.to_string().contains("anchor_max_distance"), "got: {err}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SeatingConfig::load("/nonexistent/seating.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("Config read error"));
    }

    #[test]
    fn test_rejects_command_collision() {
        let err =
            SeatingConfig::from_json_str(r#"{ "seat_command": "shuff" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
