// SPDX-License-Identifier: MPL-2.0
//! Tokio adapter for the [`Scheduler`] port.
//!
//! Each scheduled callback is a spawned task that sleeps for the delay and
//! then runs the callback; cancelling aborts the task. The clock is tokio's,
//! so tests running on a paused runtime see consistent elapsed times.

use crate::application::port::{ScheduledTask, Scheduler, TimerCallback};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// [`Scheduler`] backed by a tokio runtime handle.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler spawning onto the given runtime.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime the caller is running in.
    ///
    /// Returns `None` outside a tokio runtime.
    #[must_use]
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Box<dyn ScheduledTask> {
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Box::new(TokioTask(task))
    }
}

struct TokioTask(JoinHandle<()>);

impl ScheduledTask for TokioTask {
    fn cancel(&self) {
        self.0.abort();
    }
}
