// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! This module provides the notification lifecycle: raising toasts,
//! auto-dismissing them after a pausable delay, and retaining warnings and
//! errors in a history tray once they leave the screen.
//!
//! # Example
//!
//! ```no_run
//! use batch_notify::infrastructure::TokioScheduler;
//! use batch_notify::notifications::{NotificationOptions, NotificationService};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let scheduler = TokioScheduler::current().expect("inside a tokio runtime");
//! let service = NotificationService::new(Arc::new(scheduler));
//!
//! service.success("Pool created", "pool-01 is ready", NotificationOptions::new());
//! service.error("Job failed", "Task exited with code 1", NotificationOptions::new());
//! # }
//! ```

mod notification;
mod service;
mod timer;

pub use notification::{
    ActionFn, Level, Notification, NotificationAction, NotificationConfig, NotificationId,
    NotificationOptions,
};
pub use service::{NotificationDefaults, NotificationService};
pub use timer::{NotificationTimer, TimerFn};
