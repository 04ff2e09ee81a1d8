// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing the application ports.
//!
//! # Adapters
//!
//! - [`tokio_scheduler`]: [`Scheduler`](crate::application::port::Scheduler) on a tokio runtime

pub mod tokio_scheduler;

pub use tokio_scheduler::TokioScheduler;
