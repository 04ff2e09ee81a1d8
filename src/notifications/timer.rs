// SPDX-License-Identifier: MPL-2.0
//! Pausable one-shot timer driving auto-dismiss.
//!
//! A [`NotificationTimer`] wraps a callback and the time left before it
//! fires. Pausing cancels the pending task and banks the elapsed time;
//! resuming schedules a fresh task for whatever is left. At most one task is
//! outstanding per timer at any moment.

use crate::application::port::{ScheduledTask, Scheduler};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Callback fired when the timer runs out. Shared so it can be rescheduled.
pub type TimerFn = Arc<dyn Fn() + Send + Sync>;

pub struct NotificationTimer {
    callback: TimerFn,
    scheduler: Arc<dyn Scheduler>,
    remaining: Duration,
    /// Clock reading at the last `resume`.
    started_at: Instant,
    task: Option<Box<dyn ScheduledTask>>,
    cleared: bool,
}

impl NotificationTimer {
    /// Creates the timer and starts counting down immediately.
    pub fn new(callback: TimerFn, delay: Duration, scheduler: Arc<dyn Scheduler>) -> Self {
        let started_at = scheduler.now();
        let mut timer = Self {
            callback,
            scheduler,
            remaining: delay,
            started_at,
            task: None,
            cleared: false,
        };
        timer.resume();
        timer
    }

    /// Stops the countdown, keeping the time left.
    ///
    /// Pausing a timer that is not running leaves `remaining` untouched, so
    /// repeated pauses never shrink it twice. `remaining` saturates at zero.
    pub fn pause(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        task.cancel();
        let elapsed = self.scheduler.now().saturating_duration_since(self.started_at);
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    /// Restarts the countdown from the time left.
    ///
    /// Any outstanding task is cancelled first. Does nothing once cleared.
    pub fn resume(&mut self) {
        if self.cleared {
            return;
        }
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.started_at = self.scheduler.now();
        let callback = Arc::clone(&self.callback);
        self.task = Some(
            self.scheduler
                .schedule(self.remaining, Box::new(move || callback())),
        );
    }

    /// Cancels the timer for good. Idempotent.
    pub fn clear(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.cleared = true;
    }

    /// Time left as of the last pause (or the initial delay if never paused).
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for NotificationTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationTimer")
            .field("remaining", &self.remaining)
            .field("running", &self.is_running())
            .field("cleared", &self.cleared)
            .finish_non_exhaustive()
    }
}
