mod controller;
mod errors;
mod process;
mod template;
mod traits;
mod types;
mod watcher;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::WindowController;
pub use errors::WindowError;
pub use process::{ProcessHost, ProcessWindow};
pub use template::CommandTemplate;
pub use traits::{WindowHandle, WindowHost};
pub use types::{
    CloseReason, DEFAULT_POLL_INTERVAL, DEFAULT_WINDOW_NAME, MIN_POLL_INTERVAL, OpenOutcome,
    WindowSpec, WindowState,
};
