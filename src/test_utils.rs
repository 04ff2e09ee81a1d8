// SPDX-License-Identifier: MPL-2.0
//! Test utilities: a deterministic scheduler with a virtual clock.
//!
//! [`ManualScheduler`] never fires anything on its own. Tests move the clock
//! with [`ManualScheduler::advance`], which runs every due callback in
//! deadline order on the calling thread.

use crate::application::port::{ScheduledTask, Scheduler, TimerCallback};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

struct Pending {
    due: Instant,
    seq: u64,
    cancelled: Arc<AtomicBool>,
    callback: TimerCallback,
}

struct State {
    now: Instant,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Scheduler whose clock only moves when a test says so.
pub struct ManualScheduler {
    state: Mutex<State>,
}

impl ManualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                now: Instant::now(),
                next_seq: 0,
                pending: Vec::new(),
            }),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of scheduled callbacks that are neither cancelled nor fired.
    pub fn pending_count(&self) -> usize {
        self.lock()
            .pending
            .iter()
            .filter(|p| !p.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Moves the clock forward, firing due callbacks in deadline order.
    ///
    /// Callbacks run without the scheduler lock held, so they may schedule
    /// or cancel other tasks.
    pub fn advance(&self, by: Duration) {
        let target = self.lock().now + by;
        loop {
            let next = {
                let mut state = self.lock();
                state.pending.retain(|p| !p.cancelled.load(Ordering::SeqCst));
                let due = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let pending = state.pending.remove(index);
                        state.now = state.now.max(pending.due);
                        Some(pending)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            match next {
                Some(pending) => (pending.callback)(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Instant {
        self.lock().now
    }

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Box<dyn ScheduledTask> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut state = self.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        let due = state.now + delay;
        state.pending.push(Pending {
            due,
            seq,
            cancelled: Arc::clone(&cancelled),
            callback,
        });
        Box::new(ManualTask(cancelled))
    }
}

struct ManualTask(Arc<AtomicBool>);

impl ScheduledTask for ManualTask {
    fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
