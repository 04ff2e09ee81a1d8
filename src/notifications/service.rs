// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationService` owns the two notification collections (live
//! toasts and the persisted history tray) and one auto-dismiss timer per
//! timed notification. It is the only place either collection is mutated.
//! Observers receive full snapshots through `tokio::sync::watch` channels.

use super::notification::{
    Level, Notification, NotificationConfig, NotificationId, NotificationOptions,
};
use super::timer::{NotificationTimer, TimerFn};
use crate::application::port::Scheduler;
use crate::diagnostics::{DiagnosticsHandle, NotificationEvent};
use crate::domain::notification::AutoDismiss;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::sync::watch;

/// Built-in configuration applied to every notification before level and
/// caller overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationDefaults {
    pub auto_dismiss: AutoDismiss,
}

impl NotificationDefaults {
    fn base_config(self, level_persist: bool) -> NotificationConfig {
        NotificationConfig {
            auto_dismiss: self.auto_dismiss,
            persist: level_persist,
            ..NotificationConfig::default()
        }
    }
}

/// What a single removal changed.
#[derive(Debug, Clone, Copy)]
struct Removal {
    was_live: bool,
    persisted_changed: bool,
    moved_to_history: bool,
}

#[derive(Default)]
struct State {
    /// Currently displayed, in creation order.
    live: Vec<Notification>,
    persisted: Vec<Notification>,
    timers: HashMap<NotificationId, NotificationTimer>,
}

struct Shared {
    scheduler: Arc<dyn Scheduler>,
    defaults: NotificationDefaults,
    diagnostics: OnceLock<DiagnosticsHandle>,
    state: Mutex<State>,
    live_tx: watch::Sender<Vec<Notification>>,
    persisted_tx: watch::Sender<Vec<Notification>>,
}

/// Handle to the notification service.
///
/// Cloning is cheap and every clone drives the same collections. Build one
/// at startup and pass it to whatever raises notifications.
#[derive(Clone)]
pub struct NotificationService {
    shared: Arc<Shared>,
}

impl NotificationService {
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_defaults(scheduler, NotificationDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(scheduler: Arc<dyn Scheduler>, defaults: NotificationDefaults) -> Self {
        let (live_tx, _) = watch::channel(Vec::new());
        let (persisted_tx, _) = watch::channel(Vec::new());
        Self {
            shared: Arc::new(Shared {
                scheduler,
                defaults,
                diagnostics: OnceLock::new(),
                state: Mutex::new(State::default()),
                live_tx,
                persisted_tx,
            }),
        }
    }

    /// Routes lifecycle events to `handle`. Only the first handle is kept.
    #[must_use]
    pub fn with_diagnostics(self, handle: DiagnosticsHandle) -> Self {
        let _ = self.shared.diagnostics.set(handle);
        self
    }

    #[must_use]
    pub fn defaults(&self) -> NotificationDefaults {
        self.shared.defaults
    }

    /// Raises a notification and adds it to the live set.
    ///
    /// If its auto-dismiss delay is enabled, a timer is registered that
    /// dismisses it with persistence applied when it runs out.
    pub fn notify(
        &self,
        level: Level,
        title: impl Into<String>,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Notification {
        self.raise(level, title.into(), message.into(), false, options)
    }

    pub fn info(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Notification {
        self.notify(Level::Info, title, message, options)
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Notification {
        self.notify(Level::Success, title, message, options)
    }

    /// Like [`notify`](Self::notify) but persisted unless `options` says otherwise.
    pub fn warn(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Notification {
        self.raise(Level::Warning, title.into(), message.into(), true, options)
    }

    /// Like [`notify`](Self::notify) but persisted unless `options` says otherwise.
    pub fn error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Notification {
        self.raise(Level::Error, title.into(), message.into(), true, options)
    }

    fn raise(
        &self,
        level: Level,
        title: String,
        message: String,
        level_persist: bool,
        options: NotificationOptions,
    ) -> Notification {
        let base = self.shared.defaults.base_config(level_persist);
        let notification = Notification::with_defaults(level, title, message, base, options);

        {
            let mut state = self.lock();
            state.live.push(notification.clone());

            let delay = notification.auto_dismiss();
            if !delay.is_disabled() {
                let timer = NotificationTimer::new(
                    self.auto_dismiss_callback(&notification),
                    delay.as_duration(),
                    Arc::clone(&self.shared.scheduler),
                );
                state.timers.insert(notification.id(), timer);
            }

            self.shared.live_tx.send_replace(state.live.clone());
        }

        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::Created {
                id: notification.id(),
                level,
                auto_dismiss_ms: notification.auto_dismiss().as_millis(),
                persist: notification.persist(),
            });
            // Warnings and errors are diagnostic events in their own right
            match level {
                Level::Warning => handle.log_warning(summary(&notification)),
                Level::Error => handle.log_error(summary(&notification)),
                Level::Info | Level::Success => {}
            }
        }

        notification
    }

    /// The timer holds only a weak reference so a pending timer never keeps
    /// a dropped service alive.
    fn auto_dismiss_callback(&self, notification: &Notification) -> TimerFn {
        let shared = Arc::downgrade(&self.shared);
        let target = notification.clone();
        Arc::new(move || {
            if let Some(shared) = shared.upgrade() {
                NotificationService { shared }.auto_dismiss(&target);
            }
        })
    }

    /// Runs when a timer expires. A firing that lost the race against
    /// another dismissal changes nothing and logs nothing.
    fn auto_dismiss(&self, notification: &Notification) {
        let removal = self.remove(notification, true);
        if !removal.was_live {
            return;
        }
        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::AutoDismissed {
                id: notification.id(),
            });
        }
        self.log_removal(notification.id(), removal);
    }

    /// Removes a notification from the live set.
    ///
    /// With `persist_if_applicable` and a persisting notification, it moves
    /// to the history tray. Otherwise it is purged from both collections.
    /// Dismissing a notification that is already gone is a no-op, and a
    /// notification is never persisted twice.
    pub fn dismiss(&self, notification: &Notification, persist_if_applicable: bool) {
        let removal = self.remove(notification, persist_if_applicable);
        self.log_removal(notification.id(), removal);
    }

    fn remove(&self, notification: &Notification, persist_if_applicable: bool) -> Removal {
        let id = notification.id();
        let persist = persist_if_applicable && notification.persist();

        let mut state = self.lock();
        if let Some(mut timer) = state.timers.remove(&id) {
            timer.clear();
        }

        let was_live = remove_by_id(&mut state.live, id);
        let persisted_changed = if persist {
            // Only a live notification moves to history; a stale
            // timer must not resurrect a purged one.
            let insert = was_live && !state.persisted.iter().any(|n| n.id() == id);
            if insert {
                state.persisted.push(notification.clone());
            }
            insert
        } else {
            remove_by_id(&mut state.persisted, id)
        };

        if was_live {
            self.shared.live_tx.send_replace(state.live.clone());
        }
        if persisted_changed {
            self.shared.persisted_tx.send_replace(state.persisted.clone());
        }
        Removal {
            was_live,
            persisted_changed,
            moved_to_history: persist && was_live,
        }
    }

    fn log_removal(&self, id: NotificationId, removal: Removal) {
        if !(removal.was_live || removal.persisted_changed) {
            return;
        }
        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::Dismissed {
                id,
                persisted: removal.moved_to_history,
            });
        }
    }

    /// Empties both collections and cancels every pending timer.
    pub fn dismiss_all(&self) {
        let (live, persisted, timers) = {
            let mut state = self.lock();
            let timers = state.timers.len();
            for (_, mut timer) in state.timers.drain() {
                timer.clear();
            }

            let live = std::mem::take(&mut state.live).len();
            let persisted = std::mem::take(&mut state.persisted).len();
            if live > 0 {
                self.shared.live_tx.send_replace(Vec::new());
            }
            if persisted > 0 {
                self.shared.persisted_tx.send_replace(Vec::new());
            }
            (live, persisted, timers)
        };

        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::ClearedAll {
                live,
                persisted,
                timers,
            });
        }
    }

    /// Freezes the auto-dismiss countdown (pointer entered the toast).
    ///
    /// No-op for notifications without a running timer.
    pub fn pause_auto_dismiss(&self, notification: &Notification) {
        let remaining = {
            let mut state = self.lock();
            match state.timers.get_mut(&notification.id()) {
                Some(timer) if timer.is_running() => {
                    timer.pause();
                    timer.remaining()
                }
                _ => return,
            }
        };

        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::Paused {
                id: notification.id(),
                remaining_ms: duration_ms(remaining),
            });
        }
    }

    /// Restarts a paused countdown from the time it had left.
    ///
    /// A running timer is left alone so a stray resume cannot extend it.
    pub fn resume_auto_dismiss(&self, notification: &Notification) {
        {
            let mut state = self.lock();
            match state.timers.get_mut(&notification.id()) {
                Some(timer) if !timer.is_running() => timer.resume(),
                _ => return,
            }
        }

        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::Resumed {
                id: notification.id(),
            });
        }
    }

    /// Runs the primary action of a toast that was clicked.
    ///
    /// Returns `false` if the notification has none. The toast stays up.
    pub fn activate(&self, notification: &Notification) -> bool {
        let Some(action) = notification.config().action.clone() else {
            return false;
        };
        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::ActionInvoked {
                id: notification.id(),
                action: None,
            });
        }
        action();
        true
    }

    /// Runs the secondary action at `index`, then dismisses the notification
    /// with persistence applied.
    ///
    /// Returns `false` without side effects if `index` is out of range.
    pub fn invoke_action(&self, notification: &Notification, index: usize) -> bool {
        let Some(action) = notification.actions().get(index) else {
            return false;
        };
        if let Some(handle) = self.diagnostics() {
            handle.log_notification(NotificationEvent::ActionInvoked {
                id: notification.id(),
                action: Some(action.name().to_string()),
            });
        }
        action.run();
        self.dismiss(notification, true);
        true
    }

    /// Receiver yielding the full live collection after every change.
    #[must_use]
    pub fn subscribe_live(&self) -> watch::Receiver<Vec<Notification>> {
        self.shared.live_tx.subscribe()
    }

    /// Receiver yielding the full history tray after every change.
    #[must_use]
    pub fn subscribe_persisted(&self) -> watch::Receiver<Vec<Notification>> {
        self.shared.persisted_tx.subscribe()
    }

    #[must_use]
    pub fn live(&self) -> Vec<Notification> {
        self.shared.live_tx.borrow().clone()
    }

    #[must_use]
    pub fn persisted(&self) -> Vec<Notification> {
        self.shared.persisted_tx.borrow().clone()
    }

    /// Number of registered auto-dismiss timers, paused ones included.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.lock().timers.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn diagnostics(&self) -> Option<&DiagnosticsHandle> {
        self.shared.diagnostics.get()
    }
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("NotificationService")
            .field("defaults", &self.shared.defaults)
            .field("live", &state.live.len())
            .field("persisted", &state.persisted.len())
            .field("timers", &state.timers.len())
            .finish_non_exhaustive()
    }
}

fn remove_by_id(items: &mut Vec<Notification>, id: NotificationId) -> bool {
    let before = items.len();
    items.retain(|n| n.id() != id);
    items.len() != before
}

fn summary(notification: &Notification) -> String {
    format!("{}: {}", notification.title(), notification.message())
}

fn duration_ms(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::test_utils::ManualScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn service() -> (Arc<ManualScheduler>, NotificationService) {
        let scheduler = ManualScheduler::new();
        let service = NotificationService::new(scheduler.clone());
        (scheduler, service)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn sticky() -> NotificationOptions {
        NotificationOptions::new().auto_dismiss_ms(0)
    }

    fn titles(items: &[Notification]) -> Vec<&str> {
        items.iter().map(Notification::title).collect()
    }

    #[test]
    fn new_service_is_empty() {
        let (_scheduler, service) = service();
        assert!(service.live().is_empty());
        assert!(service.persisted().is_empty());
        assert_eq!(service.pending_timers(), 0);
    }

    #[test]
    fn untimed_notification_only_leaves_on_dismiss() {
        let (scheduler, service) = service();
        let n = service.notify(Level::Info, "T", "M", sticky());

        assert_eq!(service.live().len(), 1);
        assert_eq!(service.pending_timers(), 0);

        scheduler.advance(ms(600_000));
        assert_eq!(service.live().len(), 1);

        service.dismiss(&n, false);
        assert!(service.live().is_empty());
        assert!(service.persisted().is_empty());
    }

    #[test]
    fn timed_notification_leaves_after_its_delay() {
        let (scheduler, service) = service();
        service.info("T", "M", NotificationOptions::new().auto_dismiss_ms(1000));

        scheduler.advance(ms(999));
        assert_eq!(service.live().len(), 1);

        scheduler.advance(ms(1));
        assert!(service.live().is_empty());
        assert_eq!(service.pending_timers(), 0);
    }

    #[test]
    fn hour_long_delay_is_stored_and_honored() {
        let (scheduler, service) = service();
        let n = service.info(
            "Long job",
            "m",
            NotificationOptions::new().auto_dismiss_ms(3_600_000),
        );
        assert_eq!(n.auto_dismiss().as_millis(), 3_600_000);

        scheduler.advance(ms(600_000));
        assert_eq!(service.live().len(), 1);

        scheduler.advance(ms(2_999_999));
        assert_eq!(service.live().len(), 1);

        scheduler.advance(ms(1));
        assert!(service.live().is_empty());
    }

    #[test]
    fn default_delay_comes_from_defaults() {
        let scheduler = ManualScheduler::new();
        let defaults = NotificationDefaults {
            auto_dismiss: AutoDismiss::from_millis(250),
        };
        let service = NotificationService::with_defaults(scheduler.clone(), defaults);
        let n = service.success("Saved", "Pool created", NotificationOptions::new());

        assert_eq!(n.auto_dismiss().as_millis(), 250);
        scheduler.advance(ms(250));
        assert!(service.live().is_empty());
    }

    #[test]
    fn pause_and_resume_without_elapsed_time_keep_full_delay() {
        let (scheduler, service) = service();
        let n = service.info("T", "M", NotificationOptions::new().auto_dismiss_ms(1000));

        service.pause_auto_dismiss(&n);
        service.resume_auto_dismiss(&n);

        scheduler.advance(ms(999));
        assert_eq!(service.live().len(), 1);
        scheduler.advance(ms(1));
        assert!(service.live().is_empty());
    }

    #[test]
    fn paused_notification_survives_past_its_delay() {
        let (scheduler, service) = service();
        let n = service.info("T", "M", NotificationOptions::new().auto_dismiss_ms(1000));

        scheduler.advance(ms(400));
        service.pause_auto_dismiss(&n);
        scheduler.advance(ms(5000));
        assert_eq!(service.live().len(), 1);

        service.resume_auto_dismiss(&n);
        scheduler.advance(ms(599));
        assert_eq!(service.live().len(), 1);
        scheduler.advance(ms(1));
        assert!(service.live().is_empty());
    }

    #[test]
    fn stray_resume_does_not_extend_a_running_timer() {
        let (scheduler, service) = service();
        let n = service.info("T", "M", NotificationOptions::new().auto_dismiss_ms(1000));

        scheduler.advance(ms(800));
        service.resume_auto_dismiss(&n);
        scheduler.advance(ms(200));

        assert!(service.live().is_empty());
    }

    #[test]
    fn pause_and_resume_without_timer_are_noops() {
        let (_scheduler, service) = service();
        let n = service.info("T", "M", sticky());

        service.pause_auto_dismiss(&n);
        service.resume_auto_dismiss(&n);

        assert_eq!(service.live().len(), 1);
        assert_eq!(service.pending_timers(), 0);
    }

    #[test]
    fn persistent_dismissal_moves_to_history() {
        let (_scheduler, service) = service();
        let n = service.info("T", "M", sticky().persist(true));

        service.dismiss(&n, true);

        assert!(service.live().is_empty());
        assert_eq!(service.persisted(), vec![n]);
    }

    #[test]
    fn non_persistent_notification_is_gone_after_dismissal() {
        let (_scheduler, service) = service();
        let n = service.info("T", "M", sticky());

        service.dismiss(&n, true);

        assert!(service.live().is_empty());
        assert!(service.persisted().is_empty());
    }

    #[test]
    fn plain_dismissal_purges_from_both_collections() {
        let (_scheduler, service) = service();
        let live = service.error("E", "live one", sticky());
        let archived = service.error("E", "archived one", sticky());
        service.dismiss(&archived, true);
        assert_eq!(service.persisted().len(), 1);

        service.dismiss(&live, false);
        service.dismiss(&archived, false);

        assert!(service.live().is_empty());
        assert!(service.persisted().is_empty());
    }

    #[test]
    fn double_dismissal_never_duplicates_history() {
        let (_scheduler, service) = service();
        let n = service.warn("W", "msg", sticky());

        service.dismiss(&n, true);
        service.dismiss(&n, true);

        assert_eq!(service.persisted().len(), 1);
    }

    #[test]
    fn dismiss_clears_the_timer() {
        let (scheduler, service) = service();
        let n = service.warn("W", "msg", NotificationOptions::new());
        assert_eq!(scheduler.pending_count(), 1);

        service.dismiss(&n, false);

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(service.pending_timers(), 0);
        scheduler.advance(ms(10_000));
        assert!(service.persisted().is_empty());
    }

    #[test]
    fn dismiss_all_empties_everything_and_cancels_timers() {
        let (scheduler, service) = service();
        service.info("A", "a", NotificationOptions::new());
        service.warn("B", "b", NotificationOptions::new());
        let c = service.error("C", "c", sticky());
        service.dismiss(&c, true);

        service.dismiss_all();

        assert!(service.live().is_empty());
        assert!(service.persisted().is_empty());
        assert_eq!(service.pending_timers(), 0);
        assert_eq!(scheduler.pending_count(), 0);

        scheduler.advance(ms(10_000));
        assert!(service.live().is_empty());
        assert!(service.persisted().is_empty());
    }

    #[test]
    fn stale_auto_dismiss_never_reinserts() {
        let (_scheduler, service) = service();
        let n = service.warn("W", "msg", sticky());
        service.dismiss_all();

        service.auto_dismiss(&n);

        assert!(service.persisted().is_empty());
    }

    #[test]
    fn stale_auto_dismiss_logs_nothing() {
        let scheduler = ManualScheduler::new();
        let mut collector = DiagnosticsCollector::default();
        let service =
            NotificationService::new(scheduler.clone()).with_diagnostics(collector.handle());
        let n = service.warn("W", "msg", NotificationOptions::new());
        service.dismiss(&n, false);
        collector.process_pending();
        collector.clear();

        service.auto_dismiss(&n);

        collector.process_pending();
        assert!(collector.is_empty());
        assert!(service.persisted().is_empty());
    }

    #[test]
    fn warn_and_error_persist_unless_overridden() {
        let (_scheduler, service) = service();

        assert!(service.error("E", "m", NotificationOptions::new()).persist());
        assert!(service.warn("W", "m", NotificationOptions::new()).persist());
        assert!(!service
            .error("E", "m", NotificationOptions::new().persist(false))
            .persist());
        assert!(!service.info("I", "m", NotificationOptions::new()).persist());
        assert!(!service.success("S", "m", NotificationOptions::new()).persist());
    }

    #[test]
    fn notify_with_warning_level_keeps_plain_default() {
        let (_scheduler, service) = service();
        let n = service.notify(Level::Warning, "W", "m", NotificationOptions::new());
        assert_eq!(n.level(), Level::Warning);
        assert!(!n.persist());
    }

    #[test]
    fn warning_reaches_history_through_the_timer() {
        let (scheduler, service) = service();
        service.warn("W", "msg", NotificationOptions::new());

        scheduler.advance(ms(3000));

        assert!(service.live().is_empty());
        assert_eq!(titles(&service.persisted()), vec!["W"]);
    }

    #[test]
    fn live_keeps_creation_order_and_distinct_ids() {
        let (_scheduler, service) = service();
        let first = service.info("first", "m", sticky());
        let second = service.info("second", "m", sticky());

        assert_ne!(first.id(), second.id());
        assert_eq!(titles(&service.live()), vec!["first", "second"]);
    }

    #[test]
    fn subscribers_see_full_snapshots() {
        let (scheduler, service) = service();
        let mut live = service.subscribe_live();
        let mut persisted = service.subscribe_persisted();

        service.info("A", "a", sticky());
        service.warn("B", "b", NotificationOptions::new().auto_dismiss_ms(100));
        assert!(live.has_changed().unwrap_or(false));
        assert_eq!(titles(&live.borrow_and_update()), vec!["A", "B"]);

        scheduler.advance(ms(100));
        assert_eq!(titles(&live.borrow_and_update()), vec!["A"]);
        assert!(persisted.has_changed().unwrap_or(false));
        assert_eq!(titles(&persisted.borrow_and_update()), vec!["B"]);
    }

    #[test]
    fn unchanged_collections_are_not_republished() {
        let (_scheduler, service) = service();
        let n = service.info("A", "a", sticky());
        service.dismiss(&n, false);
        let live = service.subscribe_live();
        let persisted = service.subscribe_persisted();

        service.dismiss(&n, false);
        service.pause_auto_dismiss(&n);

        assert!(!live.has_changed().unwrap_or(true));
        assert!(!persisted.has_changed().unwrap_or(true));
    }

    #[test]
    fn activate_runs_primary_action_and_keeps_toast() {
        let (_scheduler, service) = service();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let with_action = service.info(
            "T",
            "M",
            sticky().action(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let without = service.info("T", "M", sticky());

        assert!(service.activate(&with_action));
        assert!(!service.activate(&without));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(service.live().len(), 2);
    }

    #[test]
    fn invoke_action_runs_and_dismisses_with_persistence() {
        let (_scheduler, service) = service();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let n = service.error(
            "Pool failed",
            "Quota exceeded",
            NotificationOptions::new()
                .with_action("Ignore", || {})
                .with_action("Retry", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        );

        assert!(!service.invoke_action(&n, 2));
        assert_eq!(service.live().len(), 1);

        assert!(service.invoke_action(&n, 1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(service.live().is_empty());
        assert_eq!(service.persisted(), vec![n]);
        assert_eq!(service.pending_timers(), 0);
    }

    #[test]
    fn actions_may_call_back_into_the_service() {
        let (_scheduler, service) = service();
        let inner = service.clone();
        let n = service.info(
            "T",
            "M",
            sticky().with_action("Again", move || {
                inner.info("follow-up", "raised from an action", NotificationOptions::new());
            }),
        );

        assert!(service.invoke_action(&n, 0));
        assert_eq!(titles(&service.live()), vec!["follow-up"]);
    }

    #[test]
    fn dropping_the_service_disarms_pending_timers() {
        let (scheduler, service) = service();
        let mut live = service.subscribe_live();
        service.info("T", "M", NotificationOptions::new());
        live.mark_unchanged();

        drop(service);
        scheduler.advance(ms(10_000));

        assert!(live.has_changed().is_err());
    }

    #[test]
    fn lifecycle_is_logged_to_diagnostics() {
        let scheduler = ManualScheduler::new();
        let mut collector = DiagnosticsCollector::default();
        let service = NotificationService::new(scheduler.clone()).with_diagnostics(collector.handle());

        let n = service.warn("W", "disk almost full", NotificationOptions::new());
        scheduler.advance(ms(1000));
        service.pause_auto_dismiss(&n);
        service.resume_auto_dismiss(&n);
        scheduler.advance(ms(2000));
        service.dismiss_all();

        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        let id = n.id();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::Created {
                        id,
                        level: Level::Warning,
                        auto_dismiss_ms: 3000,
                        persist: true,
                    }
                },
                DiagnosticEventKind::Warning {
                    message: "W: disk almost full".into()
                },
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::Paused {
                        id,
                        remaining_ms: 2000,
                    }
                },
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::Resumed { id }
                },
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::AutoDismissed { id }
                },
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::Dismissed {
                        id,
                        persisted: true,
                    }
                },
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::ClearedAll {
                        live: 0,
                        persisted: 1,
                        timers: 0,
                    }
                },
            ]
        );
    }
}
