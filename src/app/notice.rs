//! Transient user-facing notices.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Holds the latest notice. A new notice replaces the previous one, and a
/// notice stops being visible once its time-to-live has passed.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: TimeDelta,
    latest: Option<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            latest: None,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.latest = Some(Notice {
            message: message.into(),
            raised_at: now,
        });
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.latest.as_ref()
    }

    /// The notice still on screen at `now`, if any.
    pub fn visible(&self, now: DateTime<Utc>) -> Option<&str> {
        self.latest
            .as_ref()
            .filter(|n| now - n.raised_at < self.ttl)
            .map(|n| n.message.as_str())
    }
}
