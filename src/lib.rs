// SPDX-License-Identifier: MPL-2.0
//! `batch_notify` is the toast notification layer of a batch-compute
//! management console.
//!
//! It raises info, success, warning and error notifications, dismisses them
//! after a pausable delay, and keeps warnings and errors in a history tray.
//! Timers run on any host facility implementing
//! [`application::port::Scheduler`]; the tokio adapter ships in
//! [`infrastructure`].

#![doc(html_root_url = "https://docs.rs/batch_notify/0.3.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod notifications;

#[cfg(test)]
mod test_utils;
