//! Cancellable countdown clock.
//!
//! The clock is the only concurrent actor in the crate: a spawned task
//! ticking once per real second, independent of move activity. It is
//! decoupled from the engine; callers wire the callbacks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// A running countdown.
///
/// `on_tick` fires each second with the seconds remaining; `on_expire`
/// fires once when the countdown reaches zero. [`cancel`] is
/// idempotent and guarantees no callback is delivered afterwards;
/// dropping the clock cancels it, so replacing an old countdown can
/// never fire into a new match.
///
/// [`cancel`]: Countdown::cancel
#[derive(Debug)]
pub struct Countdown {
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Starts a countdown of `seconds` seconds on the current tokio
    /// runtime.
    #[instrument(skip(on_tick, on_expire))]
    pub fn start<T, E>(seconds: i64, on_tick: T, on_expire: E) -> Self
    where
        T: Fn(i64) + Send + 'static,
        E: FnOnce() + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let handle = tokio::spawn(async move {
            let mut remaining = seconds;
            while remaining > 0 {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                if flag.load(Ordering::SeqCst) {
                    return;
                }
                remaining -= 1;
                if remaining == 0 {
                    debug!("Countdown expired");
                    on_expire();
                    return;
                }
                on_tick(remaining);
            }
        });
        Self { cancelled, handle }
    }

    /// Stops the countdown. Safe to call repeatedly or after expiry.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.handle.abort();
    }

    /// Whether [`cancel`](Countdown::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
