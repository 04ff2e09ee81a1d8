// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`AutoDismiss`]: Auto-dismiss delay, where zero means "stay until dismissed"

mod newtypes;

pub use newtypes::{auto_dismiss_bounds, AutoDismiss};
