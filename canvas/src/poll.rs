//! Cancellable periodic refresh.
//!
//! [`run_polling`] fetches, sleeps for the configured interval and repeats
//! until its [`PollHandle`] is cancelled. Liveness is checked before every
//! tick and again before a fetch result is committed, so nothing lands in
//! the cache after teardown even if a read was already in flight.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;

use crate::accessor::{CanvasAccessor, FetchOutcome, ProcessReader, ProcessWriter};

/// Cancellation handle for a polling loop. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Poll until `handle` is cancelled. Returns the number of fetches attempted.
pub async fn run_polling<R, W>(accessor: &CanvasAccessor<R, W>, handle: &PollHandle) -> u64
where
    R: ProcessReader,
    W: ProcessWriter,
{
    let interval = Duration::from_millis(accessor.config().poll_interval_ms);
    let mut ticks = 0_u64;

    while handle.is_alive() {
        let outcome = accessor.fetch_gated(Some(handle)).await;
        ticks += 1;
        if outcome == FetchOutcome::Discarded || !handle.is_alive() {
            break;
        }
        accessor.reader().sleep(interval).await;
    }

    debug!("polling stopped after {ticks} fetches");
    ticks
}
