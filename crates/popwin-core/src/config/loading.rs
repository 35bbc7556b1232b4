//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.popwin/config.toml` (global user preferences)
//! 3. **Project config** - `./.popwin/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::errors::ConfigError;
use crate::config::types::{BrowserConfig, PopwinConfig, WindowConfig};
use crate::config::validation::validate_config;

const CONFIG_DIR: &str = ".popwin";
const CONFIG_FILE: &str = "config.toml";

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Path of the project config file below `dir`.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PopwinConfig, ConfigError> {
    let project = project_config_path(&std::env::current_dir()?);
    load_from_paths(user_config_path().as_deref(), &project)
}

/// Load and merge the given user and project config files.
pub fn load_from_paths(user: Option<&Path>, project: &Path) -> Result<PopwinConfig, ConfigError> {
    let mut config = PopwinConfig::default();

    if let Some(user_config) = user.map(load_config_file).transpose()?.flatten() {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(project)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Load one config file. `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<PopwinConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_missing",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Fields left unset in the override fall back to the base.
pub fn merge_configs(base: PopwinConfig, override_config: PopwinConfig) -> PopwinConfig {
    PopwinConfig {
        window: WindowConfig {
            poll_interval_ms: override_config
                .window
                .poll_interval_ms
                .or(base.window.poll_interval_ms),
            name: override_config.window.name.or(base.window.name),
            features: override_config.window.features.or(base.window.features),
        },
        browser: BrowserConfig {
            preferred: override_config.browser.preferred.or(base.browser.preferred),
            command: override_config.browser.command.or(base.browser.command),
        },
    }
}
