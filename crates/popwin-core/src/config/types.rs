//! Configuration type definitions for popwin.
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! poll_interval_ms = 400
//! name = "preview"
//! features = "width=800,height=600"
//!
//! [browser]
//! preferred = "firefox"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.popwin/config.toml`
/// 2. Project config: `./.popwin/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PopwinConfig {
    /// Window defaults
    #[serde(default)]
    pub window: WindowConfig,

    /// Browser used by the process host
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Window defaults applied when the CLI does not override them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WindowConfig {
    /// Interval between checks for a user-closed window.
    /// Default: 400ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Window name. Default: "_blank".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Feature string forwarded to the browser command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
}

/// Browser selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrowserConfig {
    /// Preferred browser backend.
    /// Options: chromium, chrome, firefox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,

    /// Full command template. Takes precedence over `preferred`.
    /// Placeholders: {url}, {name}, {features}, {profile}.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl WindowConfig {
    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
            .unwrap_or_else(super::defaults::default_poll_interval_ms)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms())
    }

    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or(crate::window::DEFAULT_WINDOW_NAME)
    }

    pub fn features(&self) -> &str {
        self.features.as_deref().unwrap_or_default()
    }
}
