// SPDX-License-Identifier: MPL-2.0
//! Host timer facility port.
//!
//! This is the `setTimeout`/`clearTimeout` pair the notification timers are
//! built on. Implementations decide where the callback runs; the core only
//! requires that a cancelled task never invokes its callback afterwards.

use std::time::{Duration, Instant};

/// One-shot callback handed to [`Scheduler::schedule`].
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Port for delayed, cancellable callbacks.
///
/// # Example
///
/// ```ignore
/// use batch_notify::application::port::Scheduler;
/// use std::time::Duration;
///
/// fn ping_later(scheduler: &dyn Scheduler) {
///     let task = scheduler.schedule(Duration::from_millis(500), Box::new(|| println!("ping")));
///     // Changed our mind.
///     task.cancel();
/// }
/// ```
pub trait Scheduler: Send + Sync {
    /// Returns the scheduler's notion of "now".
    ///
    /// Timers measure elapsed time against this clock, so a scheduler with
    /// a virtual clock keeps pause/resume arithmetic consistent with when
    /// callbacks actually fire.
    fn now(&self) -> Instant;

    /// Runs `callback` once after `delay`.
    ///
    /// A zero delay fires as soon as the host gets around to it, never
    /// synchronously inside this call.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Box<dyn ScheduledTask>;
}

/// Handle to a pending callback.
pub trait ScheduledTask: Send {
    /// Cancels the callback if it has not run yet.
    ///
    /// Cancelling more than once, or after the callback already ran, is a no-op.
    fn cancel(&self);
}
