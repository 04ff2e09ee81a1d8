// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Auto-dismiss delay applied when a caller does not override it
//! - **Diagnostics**: Lifecycle event buffer sizing

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::notification::auto_dismiss_bounds;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for toasts (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = auto_dismiss_bounds::DEFAULT_MS;

/// Maximum configured default auto-dismiss delay (in milliseconds).
/// Zero disables auto-dismiss.
pub const MAX_AUTO_DISMISS_MS: u64 = auto_dismiss_bounds::MAX_DEFAULT_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTO_DISMISS_MS > 0);
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
