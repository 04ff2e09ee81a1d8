// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for notification values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Auto-dismiss Bounds
// =============================================================================

/// Auto-dismiss delay bounds in milliseconds.
pub mod auto_dismiss_bounds {
    /// Zero disables auto-dismiss.
    pub const DISABLED_MS: u64 = 0;
    /// Largest default delay accepted from the settings file (10 minutes).
    /// Per-call delays are not bounded.
    pub const MAX_DEFAULT_MS: u64 = 10 * 60 * 1000;
    /// Default auto-dismiss delay.
    pub const DEFAULT_MS: u64 = 3000;
}

// =============================================================================
// AutoDismiss
// =============================================================================

/// Delay after which a live notification removes itself.
///
/// A value of zero disables auto-dismiss entirely; the notification then
/// stays live until something dismisses it explicitly. Any other delay is
/// kept as given; only [`AutoDismiss::clamped_default`] applies a bound.
///
/// # Example
///
/// ```
/// use batch_notify::domain::notification::AutoDismiss;
///
/// let delay = AutoDismiss::from_millis(1500);
/// assert_eq!(delay.as_millis(), 1500);
/// assert!(AutoDismiss::disabled().is_disabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoDismiss(u64);

impl AutoDismiss {
    /// Creates a delay from milliseconds, exactly as given.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a delay from a [`Duration`], saturating at `u64::MAX` ms.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    /// Creates a service-wide default delay, clamped to
    /// [`auto_dismiss_bounds::MAX_DEFAULT_MS`].
    #[must_use]
    pub fn clamped_default(millis: u64) -> Self {
        Self(millis.min(auto_dismiss_bounds::MAX_DEFAULT_MS))
    }

    /// Returns a delay that never fires.
    #[must_use]
    pub fn disabled() -> Self {
        Self(auto_dismiss_bounds::DISABLED_MS)
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if auto-dismiss is turned off.
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 == auto_dismiss_bounds::DISABLED_MS
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self(auto_dismiss_bounds::DEFAULT_MS)
    }
}
