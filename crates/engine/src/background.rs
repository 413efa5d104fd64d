//! Periodic background snapshots.
//!
//! A single named worker thread runs the snapshot task on a fixed interval.
//! Stopping wakes the worker through a condvar, so shutdown never waits out
//! the remaining interval.

use parking_lot::{Condvar, Mutex as ParkingMutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rafdb_core::{Error, Result};
use tracing::{debug, warn};

/// Name of the snapshot worker thread.
pub const SNAPSHOT_THREAD_NAME: &str = "rafdb-snapshot";

struct SchedulerInner {
    stopped: ParkingMutex<bool>,
    wake: Condvar,
    runs_completed: AtomicU64,
    runs_failed: AtomicU64,
}

/// Runs a snapshot task every `interval` until stopped.
pub struct SnapshotScheduler {
    inner: Arc<SchedulerInner>,
    handle: ParkingMutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl SnapshotScheduler {
    /// Spawn the worker thread.
    ///
    /// The first run happens one `interval` after start. Task failures are
    /// logged and counted; the worker keeps going.
    pub fn start<F>(interval: Duration, task: F) -> Result<Self>
    where
        F: Fn() -> Result<()> + Send + 'static,
    {
        let inner = Arc::new(SchedulerInner {
            stopped: ParkingMutex::new(false),
            wake: Condvar::new(),
            runs_completed: AtomicU64::new(0),
            runs_failed: AtomicU64::new(0),
        });

        let worker = Arc::clone(&inner);
        let handle = std::thread::Builder::new()
            .name(SNAPSHOT_THREAD_NAME.to_string())
            .spawn(move || run_loop(&worker, interval, task))
            .map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to spawn snapshot thread: {}", e),
                ))
            })?;

        if Instant::now().checked_add(interval).is_none() {
            warn!(
                interval_secs = interval.as_secs(),
                "Snapshot interval is too large to schedule; background snapshots will not run"
            );
        }
        debug!(interval_ms = interval.as_millis() as u64, "Started snapshot scheduler");
        Ok(Self {
            inner,
            handle: ParkingMutex::new(Some(handle)),
            interval,
        })
    }

    /// Signal the worker to stop and wait for it to exit.
    ///
    /// A run already in progress finishes first. Calling this twice is a no-op.
    pub fn stop(&self) {
        {
            let mut stopped = self.inner.stopped.lock();
            *stopped = true;
            self.inner.wake.notify_all();
        }
        if let Some(handle) = self.handle.lock().take() {
            if handle.join().is_err() {
                warn!("Snapshot worker thread panicked");
            }
        }
    }

    /// True while the worker is alive and [`stop`](Self::stop) has not been called.
    pub fn is_running(&self) -> bool {
        if *self.inner.stopped.lock() {
            return false;
        }
        self.handle
            .lock()
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of successful runs.
    pub fn runs_completed(&self) -> u64 {
        self.inner.runs_completed.load(Ordering::Relaxed)
    }

    /// Number of failed runs.
    pub fn runs_failed(&self) -> u64 {
        self.inner.runs_failed.load(Ordering::Relaxed)
    }
}

fn run_loop<F>(inner: &SchedulerInner, interval: Duration, task: F)
where
    F: Fn() -> Result<()>,
{
    // `None` means the interval overflows `Instant`: sleep until stopped.
    let mut next_run = Instant::now().checked_add(interval);
    loop {
        {
            let mut stopped = inner.stopped.lock();
            while !*stopped {
                match next_run {
                    Some(at) if Instant::now() >= at => break,
                    Some(at) => {
                        inner.wake.wait_until(&mut stopped, at);
                    }
                    None => inner.wake.wait(&mut stopped),
                }
            }
            if *stopped {
                break;
            }
        }

        match task() {
            Ok(()) => {
                inner.runs_completed.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                inner.runs_failed.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "Background snapshot failed");
            }
        }
        next_run = Instant::now().checked_add(interval);
    }
}

impl Drop for SnapshotScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for SnapshotScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotScheduler")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .field("runs_completed", &self.runs_completed())
            .field("runs_failed", &self.runs_failed())
            .finish()
    }
}
