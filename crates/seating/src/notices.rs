//! Player-facing notices.
//!
//! Seating systems emit [`SeatNotice`] events; they are collected into the
//! [`NoticeLog`] resource which a chat or HUD layer reads. Entries expire
//! after their level's display time and the history is bounded.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticeLevel {
    /// A command was refused or a seat was taken.
    Warning,
    /// A command went through.
    Info,
}

impl NoticeLevel {
    pub fn display_time(self) -> Duration {
        match self {
            NoticeLevel::Warning => Duration::from_secs(6),
            NoticeLevel::Info => Duration::from_secs(4),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoticeLevel::Warning => "WARNING",
            NoticeLevel::Info => "INFO",
        }
    }
}

/// Event emitted by seating systems to tell the player something.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SeatNotice {
    pub text: String,
    pub level: NoticeLevel,
}

impl SeatNotice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub created_at: Duration,
}

#[derive(Resource, Debug)]
pub struct NoticeLog {
    pub active: Vec<Notice>,
    pub max_active: usize,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            max_active: 16,
        }
    }
}

impl NoticeLog {
    pub fn push(&mut self, notice: &SeatNotice, now: Duration) {
        self.active.push(Notice {
            text: notice.text.clone(),
            level: notice.level,
            created_at: now,
        });
        if self.active.len() > self.max_active {
            let excess = self.active.len() - self.max_active;
            self.active.drain(0..excess);
        }
    }

    /// Drop notices whose display time has passed.
    pub fn sweep(&mut self, now: Duration) {
        self.active
            .retain(|n| now.saturating_sub(n.created_at) < n.level.display_time());
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.active.last()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.active.iter().any(|n| n.text.contains(needle))
    }
}

/// System: move new notices into the log and expire old ones.
pub fn collect_notices(
    time: Res<Time>,
    mut events: EventReader<SeatNotice>,
    mut log: ResMut<NoticeLog>,
) {
    let now = time.elapsed();
    for notice in events.read() {
        info!("[{}] {}", notice.level.label(), notice.text);
        log.push(notice, now);
    }
    log.sweep(now);
}
