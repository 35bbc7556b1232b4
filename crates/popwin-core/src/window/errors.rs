use crate::errors::PopwinError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Invalid window command template: {message}")]
    InvalidTemplate { message: String },

    #[error("Failed to open window with '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("IO error during window operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl PopwinError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::InvalidTemplate { .. } => "WINDOW_INVALID_TEMPLATE",
            WindowError::SpawnFailed { .. } => "WINDOW_SPAWN_FAILED",
            WindowError::IoError { .. } => "WINDOW_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::InvalidTemplate { .. })
    }
}
