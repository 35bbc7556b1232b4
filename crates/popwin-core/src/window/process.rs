//! Process-backed window host.
//!
//! Each window is a browser process launched from a [`CommandTemplate`]. The
//! window is considered open for as long as that process runs, so templates
//! must start a dedicated browser instance (the `{profile}` placeholder gives
//! each window its own throwaway profile directory for that purpose).

use std::collections::HashMap;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tempfile::TempDir;
use tracing::{debug, info, warn};

use super::errors::WindowError;
use super::template::CommandTemplate;
use super::traits::{WindowHandle, WindowHost};
use super::types::WindowSpec;

struct ProcessSlot {
    child: Child,
    exited: bool,
    // Removed from disk once the last handle to the window is dropped.
    _profile: Option<TempDir>,
}

fn lock(slot: &Mutex<ProcessSlot>) -> MutexGuard<'_, ProcessSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a browser process.
#[derive(Clone)]
pub struct ProcessWindow {
    pid: u32,
    slot: Arc<Mutex<ProcessSlot>>,
}

impl ProcessWindow {
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl WindowHandle for ProcessWindow {
    fn is_closed(&self) -> bool {
        let mut slot = lock(&self.slot);
        if slot.exited {
            return true;
        }
        match slot.child.try_wait() {
            Ok(Some(status)) => {
                debug!(
                    event = "core.process_window.exited",
                    pid = self.pid,
                    status = %status
                );
                slot.exited = true;
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(
                    event = "core.process_window.status_failed",
                    pid = self.pid,
                    error = %e
                );
                slot.exited = true;
                true
            }
        }
    }

    fn close(&self) {
        let mut slot = lock(&self.slot);
        if slot.exited {
            return;
        }
        if let Err(e) = slot.child.kill() {
            // InvalidInput means the process already exited.
            if e.kind() != std::io::ErrorKind::InvalidInput {
                warn!(
                    event = "core.process_window.kill_failed",
                    pid = self.pid,
                    error = %e
                );
                return;
            }
        }
        // SIGKILL cannot be caught, so reaping here only waits for the kernel.
        match slot.child.wait() {
            Ok(status) => {
                info!(
                    event = "core.process_window.killed",
                    pid = self.pid,
                    status = %status
                );
            }
            Err(e) => {
                warn!(
                    event = "core.process_window.reap_failed",
                    pid = self.pid,
                    error = %e
                );
            }
        }
        slot.exited = true;
    }
}

/// Opens windows by spawning processes from a command template.
pub struct ProcessHost {
    template: CommandTemplate,
    named: Mutex<HashMap<String, Weak<Mutex<ProcessSlot>>>>,
}

impl ProcessHost {
    pub fn new(template: CommandTemplate) -> Self {
        Self {
            template,
            named: Mutex::new(HashMap::new()),
        }
    }

    pub fn template(&self) -> &CommandTemplate {
        &self.template
    }

    /// A live window previously opened under `name`, if any.
    fn find_named(&self, name: &str) -> Option<ProcessWindow> {
        let mut named = self.named.lock().unwrap_or_else(PoisonError::into_inner);
        named.retain(|_, slot| slot.strong_count() > 0);

        let slot = named.get(name)?.upgrade()?;
        let pid = lock(&slot).child.id();
        let window = ProcessWindow { pid, slot };
        (!window.is_closed()).then_some(window)
    }

    fn spawn(&self, spec: &WindowSpec) -> Result<ProcessWindow, WindowError> {
        let profile = if self.template.needs_profile() {
            Some(
                tempfile::Builder::new()
                    .prefix("popwin-profile-")
                    .tempdir()?,
            )
        } else {
            None
        };

        let args = self
            .template
            .render(spec, profile.as_ref().map(|dir| dir.path()));

        debug!(
            event = "core.process_host.spawn_started",
            program = %self.template.program(),
            args = ?args
        );

        let child = Command::new(self.template.program())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| WindowError::SpawnFailed {
                program: self.template.program().to_string(),
                message: e.to_string(),
            })?;

        let pid = child.id();
        info!(
            event = "core.process_host.spawn_completed",
            program = %self.template.program(),
            pid = pid
        );

        Ok(ProcessWindow {
            pid,
            slot: Arc::new(Mutex::new(ProcessSlot {
                child,
                exited: false,
                _profile: profile,
            })),
        })
    }
}

impl WindowHost for ProcessHost {
    type Handle = ProcessWindow;

    fn name(&self) -> &'static str {
        "process"
    }

    fn open(&self, spec: &WindowSpec) -> Result<ProcessWindow, WindowError> {
        if !spec.is_blank()
            && let Some(window) = self.find_named(spec.name())
        {
            info!(
                event = "core.process_host.window_reused",
                name = %spec.name(),
                pid = window.pid()
            );
            return Ok(window);
        }

        let window = self.spawn(spec)?;
        if !spec.is_blank() {
            self.named
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(spec.name().to_string(), Arc::downgrade(&window.slot));
        }
        Ok(window)
    }
}
