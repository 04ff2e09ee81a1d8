// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` value object, its `Level`, and the
//! configuration merged into it at construction time. A notification never
//! changes after it has been built; everything that varies per call is
//! decided by merging [`NotificationOptions`] over the defaults first.

use crate::domain::notification::AutoDismiss;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Display level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Warnings and errors are kept in the history tray unless the caller
    /// says otherwise.
    #[must_use]
    pub fn persists_by_default(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "success" => Ok(Level::Success),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

/// Zero-argument callback attached to a notification.
pub type ActionFn = Arc<dyn Fn() + Send + Sync>;

/// A named secondary action shown on a toast.
#[derive(Clone)]
pub struct NotificationAction {
    name: String,
    action: ActionFn,
}

impl NotificationAction {
    pub fn new(name: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            action: Arc::new(action),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the action.
    pub fn run(&self) {
        (self.action)();
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Merged, read-only configuration of a notification.
#[derive(Clone, Default)]
pub struct NotificationConfig {
    /// Delay before the toast dismisses itself; disabled means never.
    pub auto_dismiss: AutoDismiss,
    /// Whether a persistence-aware dismissal moves it to the history tray.
    pub persist: bool,
    /// Primary action, run when the toast itself is activated.
    pub action: Option<ActionFn>,
    /// Secondary actions, in display order.
    pub actions: Vec<NotificationAction>,
}

impl fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("auto_dismiss", &self.auto_dismiss)
            .field("persist", &self.persist)
            .field("action", &self.action.as_ref().map(|_| "Fn()"))
            .field("actions", &self.actions)
            .finish()
    }
}

/// Per-call overrides. Every unset field keeps the default.
///
/// # Example
///
/// ```
/// use batch_notify::notifications::NotificationOptions;
///
/// let options = NotificationOptions::new()
///     .auto_dismiss_ms(0)
///     .persist(true)
///     .with_action("Retry", || println!("retrying"));
/// ```
#[derive(Clone, Default)]
pub struct NotificationOptions {
    pub auto_dismiss: Option<AutoDismiss>,
    pub persist: Option<bool>,
    pub action: Option<ActionFn>,
    pub actions: Option<Vec<NotificationAction>>,
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-dismiss delay in milliseconds; `0` disables it.
    #[must_use]
    pub fn auto_dismiss_ms(mut self, millis: u64) -> Self {
        self.auto_dismiss = Some(AutoDismiss::from_millis(millis));
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, delay: AutoDismiss) -> Self {
        self.auto_dismiss = Some(delay);
        self
    }

    #[must_use]
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = Some(persist);
        self
    }

    /// Sets the primary action.
    #[must_use]
    pub fn action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Appends a named secondary action.
    #[must_use]
    pub fn with_action(
        mut self,
        name: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.actions
            .get_or_insert_with(Vec::new)
            .push(NotificationAction::new(name, action));
        self
    }

    /// Shallow merge: each field set here replaces the one in `base`.
    #[must_use]
    pub fn merge_over(self, base: NotificationConfig) -> NotificationConfig {
        NotificationConfig {
            auto_dismiss: self.auto_dismiss.unwrap_or(base.auto_dismiss),
            persist: self.persist.unwrap_or(base.persist),
            action: self.action.or(base.action),
            actions: self.actions.unwrap_or(base.actions),
        }
    }
}

impl fmt::Debug for NotificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationOptions")
            .field("auto_dismiss", &self.auto_dismiss)
            .field("persist", &self.persist)
            .field("action", &self.action.as_ref().map(|_| "Fn()"))
            .field("actions", &self.actions)
            .finish()
    }
}

/// A notification raised through the service.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    level: Level,
    title: String,
    message: String,
    /// Wall-clock time shown next to entries in the history tray.
    created_at: DateTime<Utc>,
    config: Arc<NotificationConfig>,
}

impl Notification {
    /// Creates a notification merging `options` over the built-in defaults.
    pub fn new(
        level: Level,
        title: impl Into<String>,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Self {
        Self::with_defaults(level, title, message, NotificationConfig::default(), options)
    }

    /// Creates a notification merging `options` over `base`.
    pub fn with_defaults(
        level: Level,
        title: impl Into<String>,
        message: impl Into<String>,
        base: NotificationConfig,
        options: NotificationOptions,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            level,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
            config: Arc::new(options.merge_over(base)),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    #[must_use]
    pub fn auto_dismiss(&self) -> AutoDismiss {
        self.config.auto_dismiss
    }

    #[must_use]
    pub fn persist(&self) -> bool {
        self.config.persist
    }

    #[must_use]
    pub fn actions(&self) -> &[NotificationAction] {
        &self.config.actions
    }
}

/// Equality is identity: two values are equal when they are the same notification.
impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}
