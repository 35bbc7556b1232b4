use tracing::warn;

use popwin_core::PopwinConfig;

/// Load the config hierarchy, falling back to defaults with a warning.
pub fn load_config_with_warning() -> PopwinConfig {
    match PopwinConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.popwin/config.toml and ./.popwin/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PopwinConfig::default()
        }
    }
}
