//! Host window traits.

use crate::window::errors::WindowError;
use crate::window::types::WindowSpec;

/// A reference to a window created by a [`WindowHost`].
///
/// Both calls are fire-and-forget: a handle never reports failure, it only
/// reports whether the window is still there.
pub trait WindowHandle: Send + Sync + 'static {
    /// Whether the window has gone away, by any means.
    fn is_closed(&self) -> bool;

    /// Ask the host to close the window. No-op if it is already closed.
    fn close(&self);
}

/// The environment that actually creates windows.
pub trait WindowHost: Send + Sync + 'static {
    type Handle: WindowHandle;

    /// Short name used in logs (e.g. "process").
    fn name(&self) -> &'static str;

    /// Open a window for `spec`.
    ///
    /// An error means no window was produced (the equivalent of a blocked
    /// popup). Hosts that honour window names return a handle to the existing
    /// window when `spec.name()` is still alive.
    fn open(&self, spec: &WindowSpec) -> Result<Self::Handle, WindowError>;
}
