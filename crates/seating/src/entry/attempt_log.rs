//! Ring-buffer log of recent entry attempts.
//!
//! Every press of the entry control that reaches the controller is recorded
//! with its outcome, giving HUDs and tests a way to see why nothing happened
//! without tracing the systems.

use std::time::Duration;

use bevy::prelude::*;

use super::gates::EntryPlan;
use crate::error::SeatError;

/// Maximum number of attempts retained.
const MAX_ENTRIES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryAttempt {
    pub at: Duration,
    pub result: Result<EntryPlan, SeatError>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct EntryAttemptLog {
    entries: Vec<EntryAttempt>,
}

impl EntryAttemptLog {
    /// Record an attempt, evicting the oldest when full.
    pub fn push(&mut self, at: Duration, result: Result<EntryPlan, SeatError>) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(EntryAttempt { at, result });
    }

    pub fn last(&self) -> Option<&EntryAttempt> {
        self.entries.last()
    }

    /// The last `n` attempts (or fewer), oldest first.
    pub fn last_n(&self, n: usize) -> &[EntryAttempt] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn committed(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
