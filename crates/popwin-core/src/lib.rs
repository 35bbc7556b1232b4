//! popwin-core: lifecycle management for a single secondary window
//!
//! A [`WindowController`] opens one window on a [`WindowHost`], tracks
//! whether it is still open, closes it on request and notices when the user
//! closes it by polling the window handle. Dropping the controller closes
//! the window.
//!
//! # Main Entry Points
//!
//! - [`window`] - Controller, host traits and the process-backed host
//! - [`browser`] - Browser backends and command resolution
//! - [`config`] - Configuration management

pub mod browser;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::PopwinConfig;
pub use errors::PopwinError;
pub use window::{
    CloseReason, CommandTemplate, OpenOutcome, ProcessHost, ProcessWindow, WindowController,
    WindowHandle, WindowHost, WindowSpec, WindowState,
};

// Re-export logging initialization
pub use logging::init_logging;
