use std::time::Duration;

use serde::Serialize;

/// Window name that always requests a fresh window.
pub const DEFAULT_WINDOW_NAME: &str = "_blank";

/// Delay between two watcher checks for a user-initiated close.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(400);

/// Smallest poll interval the controller will schedule.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// What to open: destination, feature string and window name.
///
/// Fixed when the controller is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    url: String,
    features: String,
    name: String,
}

impl WindowSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            features: String::new(),
            name: DEFAULT_WINDOW_NAME.to_string(),
        }
    }

    /// Feature string forwarded verbatim to the host (e.g. "width=400,height=300").
    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = features.into();
        self
    }

    /// Window name. Opening under a name that is still alive re-uses that window.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn features(&self) -> &str {
        &self.features
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether every open under this name must produce a new window.
    pub fn is_blank(&self) -> bool {
        self.name == DEFAULT_WINDOW_NAME
    }
}

/// Why the last window stopped being open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// `close()` was called.
    Requested,
    /// The watcher found the window closed by someone else.
    ClosedByUser,
    /// The controller was dropped while the window was open.
    Teardown,
}

impl std::fmt::Display for CloseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloseReason::Requested => write!(f, "closed on request"),
            CloseReason::ClosedByUser => write!(f, "closed by user"),
            CloseReason::Teardown => write!(f, "closed on shutdown"),
        }
    }
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    /// No window has been opened yet.
    Idle,
    Open,
    Closed(CloseReason),
}

impl WindowState {
    pub fn is_open(&self) -> bool {
        matches!(self, WindowState::Open)
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        match self {
            WindowState::Closed(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Result of a call to `WindowController::open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenOutcome {
    /// A new open request was issued and a handle obtained.
    Opened,
    /// A live window was already owned; nothing happened.
    AlreadyOpen,
    /// The host refused to produce a window.
    Blocked,
}
