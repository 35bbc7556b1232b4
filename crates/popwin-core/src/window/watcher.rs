//! Poll task that notices windows closed from outside the controller.
//!
//! Hosts give no notification when the user closes a window, so the watcher
//! asks the handle on a fixed interval. The task is started by every
//! successful `open()` and cancelled on every close path.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::controller::{WindowSlot, lock_slot};
use super::traits::WindowHandle;
use super::types::{CloseReason, WindowState};

pub(crate) struct Watcher<W> {
    pub(crate) slot: Arc<Mutex<WindowSlot<W>>>,
    pub(crate) state: Arc<watch::Sender<WindowState>>,
    pub(crate) token: CancellationToken,
    pub(crate) poll_interval: Duration,
    pub(crate) window_name: String,
}

impl<W: WindowHandle> Watcher<W> {
    /// Spawn on the current tokio runtime.
    ///
    /// Returns false when no runtime is available; the window stays open but
    /// user closes will not be detected.
    pub(crate) fn spawn(self) -> bool {
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                // First check one full interval after the open, not at spawn time.
                let first_tick = Instant::now() + self.poll_interval;
                runtime.spawn(self.run(first_tick));
                true
            }
            Err(_) => false,
        }
    }

    async fn run(self, first_tick: Instant) {
        let mut ticker = tokio::time::interval_at(first_tick, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!(
            event = "core.watcher.started",
            name = %self.window_name,
            interval_ms = u64::try_from(self.poll_interval.as_millis()).unwrap_or(u64::MAX)
        );

        loop {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => {
                    debug!(event = "core.watcher.cancelled", name = %self.window_name);
                    return;
                }
                _ = ticker.tick() => {}
            }

            if self.check() {
                return;
            }
        }
    }

    /// One poll. Returns true when the watcher is done.
    fn check(&self) -> bool {
        let mut slot = lock_slot(&self.slot);

        // Cancelled between the tick and the lock: the slot may already hold
        // a newer window that is not ours to inspect.
        if self.token.is_cancelled() {
            return true;
        }

        let closed = slot.handle.as_ref().is_none_or(|handle| handle.is_closed());
        if !closed {
            return false;
        }

        slot.release();
        self.state
            .send_replace(WindowState::Closed(CloseReason::ClosedByUser));
        drop(slot);

        info!(
            event = "core.window.closed_externally",
            name = %self.window_name
        );
        true
    }
}
