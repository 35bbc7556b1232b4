//! Lifecycle controller for a single secondary window.
//!
//! The controller owns at most one window handle and publishes whether that
//! window is open through a `watch` channel. `open()` is idempotent while the
//! window is alive, `close()` is always safe, and dropping the controller
//! closes whatever it still owns.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::traits::{WindowHandle, WindowHost};
use super::types::{
    CloseReason, DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL, OpenOutcome, WindowSpec, WindowState,
};
use super::watcher::Watcher;

/// The handle and the token of the watcher currently guarding it.
pub(crate) struct WindowSlot<W> {
    pub(crate) handle: Option<W>,
    pub(crate) watcher: Option<CancellationToken>,
}

impl<W: WindowHandle> WindowSlot<W> {
    /// Stop the watcher, close the window if it is still alive and forget it.
    pub(crate) fn release(&mut self) {
        if let Some(token) = self.watcher.take() {
            token.cancel();
        }
        if let Some(handle) = self.handle.take()
            && !handle.is_closed()
        {
            handle.close();
        }
    }
}

pub(crate) fn lock_slot<W>(slot: &Mutex<WindowSlot<W>>) -> MutexGuard<'_, WindowSlot<W>> {
    // A panic while holding the lock leaves the slot structurally valid.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Opens, tracks and closes one window on a [`WindowHost`].
///
/// `open()` needs a tokio runtime to start the close watcher.
pub struct WindowController<H: WindowHost> {
    host: Arc<H>,
    spec: WindowSpec,
    poll_interval: Duration,
    slot: Arc<Mutex<WindowSlot<H::Handle>>>,
    state: Arc<watch::Sender<WindowState>>,
}

impl<H: WindowHost> WindowController<H> {
    pub fn new(host: Arc<H>, spec: WindowSpec) -> Self {
        let (state, _) = watch::channel(WindowState::Idle);
        Self {
            host,
            spec,
            poll_interval: DEFAULT_POLL_INTERVAL,
            slot: Arc::new(Mutex::new(WindowSlot {
                handle: None,
                watcher: None,
            })),
            state: Arc::new(state),
        }
    }

    /// Override the watcher interval. Values below 1ms are clamped.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        self
    }

    pub fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn state(&self) -> WindowState {
        *self.state.borrow()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<WindowState> {
        self.state.subscribe()
    }

    /// Open the window unless a live one is already owned.
    pub fn open(&self) -> OpenOutcome {
        let mut slot = lock_slot(&self.slot);

        if slot.handle.as_ref().is_some_and(|handle| !handle.is_closed()) {
            debug!(
                event = "core.window.open_skipped",
                name = %self.spec.name(),
                reason = "already_open"
            );
            return OpenOutcome::AlreadyOpen;
        }

        // Closed by the user but not yet noticed by the watcher.
        if slot.handle.is_some() {
            slot.release();
            self.state
                .send_replace(WindowState::Closed(CloseReason::ClosedByUser));
            debug!(
                event = "core.window.stale_handle_discarded",
                name = %self.spec.name()
            );
        }

        info!(
            event = "core.window.open_started",
            host = self.host.name(),
            url = %self.spec.url(),
            name = %self.spec.name(),
            features = %self.spec.features()
        );

        let handle = match self.host.open(&self.spec) {
            Ok(handle) => handle,
            Err(e) => {
                warn!(
                    event = "core.window.open_blocked",
                    host = self.host.name(),
                    url = %self.spec.url(),
                    error = %e
                );
                return OpenOutcome::Blocked;
            }
        };

        let token = CancellationToken::new();
        slot.handle = Some(handle);
        slot.watcher = Some(token.clone());
        self.state.send_replace(WindowState::Open);

        let watcher = Watcher {
            slot: Arc::clone(&self.slot),
            state: Arc::clone(&self.state),
            token,
            poll_interval: self.poll_interval,
            window_name: self.spec.name().to_string(),
        };
        if !watcher.spawn() {
            warn!(
                event = "core.watcher.unavailable",
                name = %self.spec.name(),
                "No tokio runtime - user closes will not be detected"
            );
        }

        info!(
            event = "core.window.open_completed",
            url = %self.spec.url(),
            name = %self.spec.name()
        );
        OpenOutcome::Opened
    }

    /// Close the window if one is open. Safe to call at any time.
    pub fn close(&self) {
        self.close_with(CloseReason::Requested);
    }

    fn close_with(&self, reason: CloseReason) {
        let mut slot = lock_slot(&self.slot);
        slot.release();
        let changed = self.state.send_if_modified(|state| {
            if state.is_open() {
                *state = WindowState::Closed(reason);
                true
            } else {
                false
            }
        });
        drop(slot);

        if changed {
            info!(
                event = "core.window.close_completed",
                name = %self.spec.name(),
                reason = ?reason
            );
        } else {
            debug!(
                event = "core.window.close_skipped",
                name = %self.spec.name(),
                reason = ?reason
            );
        }
    }
}

impl<H: WindowHost> Drop for WindowController<H> {
    fn drop(&mut self) {
        self.close_with(CloseReason::Teardown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::testing::RecordingHost;

    const INTERVAL: Duration = Duration::from_millis(400);

    fn controller(host: &Arc<RecordingHost>) -> WindowController<RecordingHost> {
        WindowController::new(Arc::clone(host), WindowSpec::new("https://example.com"))
    }

    /// Let the paused clock run past `duration` so due watcher ticks execute.
    async fn advance(duration: Duration) {
        tokio::time::sleep(duration + Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_controller_is_closed_and_silent() {
        let host = RecordingHost::new();
        let controller = controller(&host);

        assert!(!controller.is_open());
        assert_eq!(controller.state(), WindowState::Idle);
        assert!(host.requests().is_empty());
        assert_eq!(controller.poll_interval(), DEFAULT_POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_issues_one_request_with_spec() {
        let host = RecordingHost::new();
        let controller = WindowController::new(
            Arc::clone(&host),
            WindowSpec::new("https://example.com")
                .with_features("width=400,height=300")
                .with_name("preview"),
        );

        assert_eq!(controller.open(), OpenOutcome::Opened);

        let requests = host.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url(), "https://example.com");
        assert_eq!(requests[0].name(), "preview");
        assert_eq!(requests[0].features(), "width=400,height=300");
        assert!(controller.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_twice_is_idempotent() {
        let host = RecordingHost::new();
        let controller = controller(&host);

        assert_eq!(controller.open(), OpenOutcome::Opened);
        assert_eq!(controller.open(), OpenOutcome::AlreadyOpen);

        assert_eq!(host.requests().len(), 1);
        assert_eq!(host.last_window().close_calls(), 0);
        assert!(controller.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_closes_handle_and_is_repeatable() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        let window = host.last_window();

        controller.close();
        assert_eq!(window.close_calls(), 1);
        assert!(!controller.is_open());
        assert_eq!(
            controller.state(),
            WindowState::Closed(CloseReason::Requested)
        );

        controller.close();
        assert_eq!(window.close_calls(), 1);
        assert_eq!(
            controller.state(),
            WindowState::Closed(CloseReason::Requested)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_before_open_is_noop() {
        let host = RecordingHost::new();
        let controller = controller(&host);

        controller.close();

        assert_eq!(controller.state(), WindowState::Idle);
        assert!(host.requests().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_watcher_detects_user_close_within_interval() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        let window = host.last_window();

        window.close_externally();
        assert!(controller.is_open());

        advance(INTERVAL).await;

        assert!(!controller.is_open());
        assert_eq!(
            controller.state(),
            WindowState::Closed(CloseReason::ClosedByUser)
        );
        // Already closed by the user, so no close request is sent.
        assert_eq!(window.close_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watcher_stops_after_detecting_close() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        let window = host.last_window();

        window.close_externally();
        advance(INTERVAL).await;
        let polls = window.polls();

        advance(INTERVAL * 5).await;
        assert_eq!(window.polls(), polls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watcher_keeps_polling_while_window_alive() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        let window = host.last_window();
        let after_open = window.polls();

        advance(INTERVAL * 3).await;

        assert!(window.polls() >= after_open + 3);
        assert!(controller.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_poll_interval() {
        let host = RecordingHost::new();
        let controller = controller(&host).with_poll_interval(Duration::from_millis(50));
        controller.open();
        host.last_window().close_externally();

        advance(Duration::from_millis(50)).await;

        assert!(!controller.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_poll_interval_is_clamped() {
        let host = RecordingHost::new();
        let controller = controller(&host).with_poll_interval(Duration::ZERO);
        assert_eq!(controller.poll_interval(), MIN_POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_close_cancels_watcher() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        let window = host.last_window();

        controller.close();
        let polls = window.polls();
        advance(INTERVAL * 3).await;

        assert_eq!(window.polls(), polls);
        assert_eq!(
            controller.state(),
            WindowState::Closed(CloseReason::Requested)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_closes_window_and_cancels_watcher() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        let mut states = controller.subscribe();
        controller.open();
        let window = host.last_window();

        drop(controller);
        assert_eq!(window.close_calls(), 1);
        assert_eq!(
            *states.borrow_and_update(),
            WindowState::Closed(CloseReason::Teardown)
        );

        let polls = window.polls();
        advance(INTERVAL * 3).await;
        assert_eq!(window.polls(), polls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_when_closed_sends_nothing() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        controller.close();
        let window = host.last_window();

        drop(controller);
        assert_eq!(window.close_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocked_open_leaves_controller_closed() {
        let host = RecordingHost::new();
        let controller = controller(&host);

        host.block_next();
        assert_eq!(controller.open(), OpenOutcome::Blocked);
        assert!(!controller.is_open());
        assert_eq!(controller.state(), WindowState::Idle);
        assert_eq!(host.requests().len(), 1);

        assert_eq!(controller.open(), OpenOutcome::Opened);
        assert!(controller.is_open());
        assert_eq!(host.requests().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_after_user_close() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        controller.open();
        host.last_window().close_externally();
        advance(INTERVAL).await;
        assert!(!controller.is_open());

        assert_eq!(controller.open(), OpenOutcome::Opened);
        assert_eq!(host.requests().len(), 2);

        let second = host.last_window();
        second.close_externally();
        advance(INTERVAL).await;
        assert_eq!(
            controller.state(),
            WindowState::Closed(CloseReason::ClosedByUser)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_before_watcher_notices_user_close() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        let mut states = controller.subscribe();
        controller.open();
        let first = host.last_window();

        first.close_externally();
        assert_eq!(controller.open(), OpenOutcome::Opened);
        assert_eq!(host.requests().len(), 2);
        assert!(controller.is_open());
        assert_eq!(first.close_calls(), 0);

        // The first watcher was cancelled and must not close the new window.
        advance(INTERVAL).await;
        assert!(controller.is_open());
        assert!(states.has_changed().unwrap());
        assert_eq!(*states.borrow_and_update(), WindowState::Open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_open_then_closed() {
        let host = RecordingHost::new();
        let controller = controller(&host);
        let mut states = controller.subscribe();

        controller.open();
        assert!(states.has_changed().unwrap());
        assert_eq!(*states.borrow_and_update(), WindowState::Open);

        host.last_window().close_externally();
        let state = tokio::time::timeout(
            INTERVAL * 2,
            states.wait_for(|state| !state.is_open()),
        )
        .await
        .expect("watcher did not report the close")
        .map(|state| *state)
        .unwrap();
        assert_eq!(state, WindowState::Closed(CloseReason::ClosedByUser));
    }

    #[tokio::test(start_paused = true)]
    async fn test_example_scenario() {
        let host = RecordingHost::new();
        let controller = WindowController::new(
            Arc::clone(&host),
            WindowSpec::new("https://example.com")
                .with_features("")
                .with_name("_blank"),
        );

        controller.open();
        let requests = host.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            (requests[0].url(), requests[0].name(), requests[0].features()),
            ("https://example.com", "_blank", "")
        );
        assert!(controller.is_open());

        let window = host.last_window();
        window.close_externally();
        advance(INTERVAL).await;
        assert!(!controller.is_open());

        let polls = window.polls();
        advance(INTERVAL * 4).await;
        assert_eq!(window.polls(), polls);
    }

    #[test]
    fn test_open_without_runtime_still_opens() {
        let host = RecordingHost::new();
        let controller = controller(&host);

        assert_eq!(controller.open(), OpenOutcome::Opened);
        assert!(controller.is_open());

        controller.close();
        assert_eq!(host.last_window().close_calls(), 1);
    }
}
