//! Scoped repeating timer that drives countdown refreshes.
//!
//! DESIGN
//! ======
//! A `Ticker` is an owned handle: creating it starts the timer and dropping
//! it stops the timer. Components create one on mount and drop it from
//! `on_cleanup`, so no interval outlives the view that asked for it.
//!
//! Native targets run the loop on a tokio task and abort it on drop. In the
//! browser the loop runs on the local executor with `gloo-timers` and exits
//! at its next wake-up once the handle is gone. Either way the handle is
//! `Send + Sync` and can move into Leptos cleanup closures.
//!
//! The first tick fires one full period after `start`; callers render the
//! initial value themselves.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use std::sync::Arc;
#[cfg(target_arch = "wasm32")]
use std::sync::atomic::{AtomicBool, Ordering};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Repeating timer owned by its creator. Dropping it cancels future ticks.
#[must_use = "dropping a Ticker stops it immediately"]
pub struct Ticker {
    period: Duration,
    #[cfg(not(target_arch = "wasm32"))]
    task: tokio::task::JoinHandle<()>,
    #[cfg(target_arch = "wasm32")]
    alive: Arc<AtomicBool>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Ticker {
    /// Start ticking every `period` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        use tokio::time::{Instant, MissedTickBehavior};

        let period = period.max(MIN_PERIOD);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick();
            }
        });
        tracing::debug!(period_ms = period.as_millis(), "ticker started");
        Self { period, task }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

#[cfg(target_arch = "wasm32")]
impl Ticker {
    /// Start ticking every `period` on the browser's local executor.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                on_tick();
            }
        });
        tracing::debug!(period_ms = period.as_millis(), "ticker started");
        Self { period, alive }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Ticker {
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        self.task.abort();
        #[cfg(target_arch = "wasm32")]
        self.alive.store(false, Ordering::Relaxed);
        tracing::debug!(period_ms = self.period.as_millis(), "ticker stopped");
    }
}
