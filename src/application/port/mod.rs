// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The notification core only talks to these traits, so it stays independent
//! of the async runtime that actually drives the timers.
//!
//! # Available Ports
//!
//! - [`scheduler`]: Host timer facility (schedule a one-shot callback, cancel it)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so a service handle can be shared across tasks
//! - No `async fn` - scheduling is fire-and-forget and returns a cancel handle

pub mod scheduler;

pub use scheduler::{ScheduledTask, Scheduler, TimerCallback};
