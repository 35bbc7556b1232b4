use crate::errors::PopwinError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Unknown browser '{name}'. Supported browsers: {supported}")]
    UnknownBrowser { name: String, supported: String },

    #[error("Browser '{name}' is not installed (looked for: {executables})")]
    BrowserNotInstalled { name: String, executables: String },

    #[error("No supported browser found. Set [browser] command in config or pass --browser")]
    NoBrowserFound,

    #[error("Invalid browser command: {source}")]
    InvalidCommand {
        #[from]
        source: WindowError,
    },
}

impl PopwinError for BrowserError {
    fn error_code(&self) -> &'static str {
        match self {
            BrowserError::UnknownBrowser { .. } => "UNKNOWN_BROWSER",
            BrowserError::BrowserNotInstalled { .. } => "BROWSER_NOT_INSTALLED",
            BrowserError::NoBrowserFound => "NO_BROWSER_FOUND",
            BrowserError::InvalidCommand { .. } => "INVALID_BROWSER_COMMAND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
