//! Application lifecycle events shared by every popwin front end.

use tracing::{error, info, warn};

use crate::errors::PopwinError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id()
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log a failed operation. User errors are warnings, everything else is an error.
pub fn log_app_error(error: &dyn PopwinError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    }
}
