//! Dashboard coordinator.
//!
//! Loads the doctor's working-set lists on activation, re-runs the same
//! five-way fetch on a fixed timer (silently) and on user demand (with a
//! visible refreshing flag), and publishes each result as one wholesale
//! snapshot. The caller owns the lifecycle: `activate()` starts the timer,
//! `stop()` must be called when the dashboard is no longer visible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use chakravue_core::api::DoctorApi;
use chakravue_core::dashboard::DashboardSnapshot;
use chakravue_core::session::SessionStore;

/// Reference cadence of the silent background refresh.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

enum RefreshKind {
    /// First load after activation: clears `is_loading`, sets the name.
    Initial,
    /// Timer-driven reload, no visible indicator.
    Silent,
    /// User-triggered reload, toggles `is_refreshing`.
    Manual,
}

/// Loads and continuously refreshes the dashboard lists.
pub struct DashboardCoordinator {
    inner: Arc<Inner>,
    interval: Duration,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    api: Arc<dyn DoctorApi>,
    store: Arc<dyn SessionStore>,
    snapshot: watch::Sender<DashboardSnapshot>,
    /// Set while any refresh cycle is running; silent ticks that find it
    /// set are skipped to avoid redundant traffic.
    in_flight: AtomicBool,
    /// Set by `stop()`; publications after it are dropped.
    stopped: AtomicBool,
}

impl DashboardCoordinator {
    /// Creates a coordinator with the reference 30-second refresh interval.
    pub fn new(api: Arc<dyn DoctorApi>, store: Arc<dyn SessionStore>) -> Self {
        Self::with_interval(api, store, DEFAULT_REFRESH_INTERVAL)
    }

    /// Creates a coordinator with a custom silent-refresh interval.
    pub fn with_interval(
        api: Arc<dyn DoctorApi>,
        store: Arc<dyn SessionStore>,
        interval: Duration,
    ) -> Self {
        let (snapshot, _) = watch::channel(DashboardSnapshot::default());
        Self {
            inner: Arc::new(Inner {
                api,
                store,
                snapshot,
                in_flight: AtomicBool::new(false),
                stopped: AtomicBool::new(false),
            }),
            interval,
            refresh_task: Mutex::new(None),
        }
    }

    /// Subscribes to snapshot publications.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.inner.snapshot.subscribe()
    }

    /// The most recently published snapshot.
    pub fn current(&self) -> DashboardSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// Runs the initial load and starts the periodic silent refresh.
    ///
    /// With no doctor logged in, no network calls are made and an empty
    /// snapshot is published immediately. Activating again restarts the
    /// timer rather than stacking a second one.
    pub async fn activate(&self) {
        self.inner.stopped.store(false, Ordering::SeqCst);
        self.start_refresh_task();
        self.inner.run_cycle(RefreshKind::Initial).await;
    }

    /// User-triggered reload; drives a visible refreshing indicator.
    pub async fn refresh(&self) {
        if self.inner.stopped.load(Ordering::SeqCst) {
            return;
        }

        // Overlapping manual refreshes stay last-write-wins; holding the
        // flag here only coalesces silent ticks underneath them.
        self.inner.in_flight.store(true, Ordering::SeqCst);
        self.inner.run_cycle(RefreshKind::Manual).await;
        self.inner.in_flight.store(false, Ordering::SeqCst);
    }

    /// Cancels the periodic refresh. Idempotent. A cycle already in flight
    /// completes but its snapshot is dropped.
    pub fn stop(&self) {
        self.inner.stopped.store(true, Ordering::SeqCst);
        if let Some(task) = self.task_slot().take() {
            task.abort();
        }
    }

    fn start_refresh_task(&self) {
        let inner = Arc::clone(&self.inner);
        let period = self.interval;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial load is
            // activate()'s job.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                inner.silent_tick().await;
            }
        });

        if let Some(previous) = self.task_slot().replace(task) {
            previous.abort();
        }
    }

    fn task_slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.refresh_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for DashboardCoordinator {
    fn drop(&mut self) {
        // Callers are expected to stop() explicitly; this keeps a leaked
        // coordinator from ticking forever anyway.
        if let Some(task) = self.task_slot().take() {
            task.abort();
        }
    }
}

impl Inner {
    async fn silent_tick(&self) {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("silent refresh skipped: a refresh cycle is already in flight");
            return;
        }

        self.run_cycle(RefreshKind::Silent).await;
        self.in_flight.store(false, Ordering::SeqCst);
    }

    async fn run_cycle(&self, kind: RefreshKind) {
        let doctor_id = self.store.doctor_id();

        if doctor_id.is_empty() {
            // A logged-out dashboard must not fetch.
            let mut next = self.snapshot.borrow().clone();
            next.is_loading = false;
            next.is_refreshing = false;
            self.publish(next);
            return;
        }

        if matches!(kind, RefreshKind::Manual) {
            let mut next = self.snapshot.borrow().clone();
            next.is_refreshing = true;
            self.publish(next);
        }

        let (urgent, history, vision, video_calls, adherence) = tokio::join!(
            self.api.urgent_submissions(&doctor_id),
            self.api.submission_history(&doctor_id),
            self.api.vision_submissions(&doctor_id),
            self.api.video_call_requests(None),
            self.api.adherence_list(&doctor_id),
        );

        let mut next = self.snapshot.borrow().clone();
        next.is_loading = false;
        next.is_refreshing = false;
        if matches!(kind, RefreshKind::Initial) {
            next.doctor_name = self.store.doctor_name();
        }
        next.urgent_reviews = urgent;
        next.history = history;
        next.vision_submissions = vision;
        next.video_call_requests = video_calls;
        next.adherence_patients = adherence;
        self.publish(next);
    }

    fn publish(&self, next: DashboardSnapshot) {
        if self.stopped.load(Ordering::SeqCst) {
            debug!("snapshot dropped: coordinator already stopped");
            return;
        }

        self.snapshot.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod tests;
