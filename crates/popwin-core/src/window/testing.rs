//! In-memory host that records open requests, for controller tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::errors::WindowError;
use super::traits::{WindowHandle, WindowHost};
use super::types::WindowSpec;

#[derive(Default)]
struct Probe {
    closed: AtomicBool,
    close_calls: AtomicUsize,
    polls: AtomicUsize,
}

/// Handle whose liveness is flipped by the test.
#[derive(Clone, Default)]
pub(crate) struct RecordingWindow {
    probe: Arc<Probe>,
}

impl RecordingWindow {
    /// Simulate the user closing the window from its own close control.
    pub(crate) fn close_externally(&self) {
        self.probe.closed.store(true, Ordering::SeqCst);
    }

    pub(crate) fn close_calls(&self) -> usize {
        self.probe.close_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn polls(&self) -> usize {
        self.probe.polls.load(Ordering::SeqCst)
    }
}

impl WindowHandle for RecordingWindow {
    fn is_closed(&self) -> bool {
        self.probe.polls.fetch_add(1, Ordering::SeqCst);
        self.probe.closed.load(Ordering::SeqCst)
    }

    fn close(&self) {
        self.probe.close_calls.fetch_add(1, Ordering::SeqCst);
        self.probe.closed.store(true, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub(crate) struct RecordingHost {
    requests: Mutex<Vec<WindowSpec>>,
    windows: Mutex<Vec<RecordingWindow>>,
    block_next: AtomicBool,
}

impl RecordingHost {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make the next open request fail as if the popup were blocked.
    pub(crate) fn block_next(&self) {
        self.block_next.store(true, Ordering::SeqCst);
    }

    pub(crate) fn requests(&self) -> Vec<WindowSpec> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_window(&self) -> RecordingWindow {
        self.windows
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no window was opened")
    }
}

impl WindowHost for RecordingHost {
    type Handle = RecordingWindow;

    fn name(&self) -> &'static str {
        "recording"
    }

    fn open(&self, spec: &WindowSpec) -> Result<RecordingWindow, WindowError> {
        self.requests.lock().unwrap().push(spec.clone());
        if self.block_next.swap(false, Ordering::SeqCst) {
            return Err(WindowError::SpawnFailed {
                program: "recording".to_string(),
                message: "popup blocked".to_string(),
            });
        }
        let window = RecordingWindow::default();
        self.windows.lock().unwrap().push(window.clone());
        Ok(window)
    }
}
