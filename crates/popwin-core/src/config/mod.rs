//! # Configuration System
//!
//! Hierarchical TOML configuration for popwin.
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.popwin/config.toml
//! [window]
//! poll_interval_ms = 400
//!
//! [browser]
//! preferred = "chromium"
//! ```
//!
//! ```rust,no_run
//! use popwin_core::config::PopwinConfig;
//!
//! fn example() -> Result<(), popwin_core::config::ConfigError> {
//!     let config = PopwinConfig::load_hierarchy()?;
//!     let interval = config.window.poll_interval();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod errors;
pub mod loading;
pub mod types;
pub mod validation;

pub use errors::ConfigError;
pub use types::{BrowserConfig, PopwinConfig, WindowConfig};
pub use validation::{MAX_POLL_INTERVAL_MS, validate_config};

impl PopwinConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
