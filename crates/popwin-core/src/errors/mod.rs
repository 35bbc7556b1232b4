use std::error::Error;

pub use crate::browser::BrowserError;
pub use crate::config::ConfigError;
pub use crate::window::WindowError;

/// Base trait for all popwin errors
pub trait PopwinError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}
