// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the notification lifecycle.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::{Level, NotificationId};

/// A step in the life of a single notification (or of the whole service).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A notification was raised and added to the live set.
    Created {
        id: NotificationId,
        level: Level,
        /// `0` when auto-dismiss is disabled.
        auto_dismiss_ms: u64,
        persist: bool,
    },

    /// The auto-dismiss timer ran out.
    AutoDismissed { id: NotificationId },

    /// A live notification left the toast area.
    Dismissed {
        id: NotificationId,
        /// True if it moved to the history tray instead of disappearing.
        persisted: bool,
    },

    /// Auto-dismiss countdown paused (pointer over the toast).
    Paused {
        id: NotificationId,
        remaining_ms: u64,
    },

    /// Auto-dismiss countdown resumed.
    Resumed { id: NotificationId },

    /// A toast action ran. `action` is `None` for the primary action.
    ActionInvoked {
        id: NotificationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<String>,
    },

    /// Both collections were wiped.
    ClearedAll {
        live: usize,
        persisted: usize,
        /// Pending timers cancelled along the way.
        timers: usize,
    },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
///
/// - `Notification`: Lifecycle transitions of notifications
/// - `Warning`: A warning notification was shown to the user
/// - `Error`: An error notification was shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Notification { event: NotificationEvent },

    Warning { message: String },

    Error { message: String },
}
