// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: How many lifecycle events the diagnostics buffer retains

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
