//! Configuration validation.

use crate::browser::{is_valid_browser, supported_browsers_string};
use crate::config::errors::ConfigError;
use crate::config::types::PopwinConfig;

/// Upper bound for the poll interval (one minute).
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

/// Validate a merged configuration.
pub fn validate_config(config: &PopwinConfig) -> Result<(), ConfigError> {
    let interval = config.window.poll_interval_ms();
    if interval == 0 || interval > MAX_POLL_INTERVAL_MS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "window.poll_interval_ms must be between 1 and {}, got {}",
                MAX_POLL_INTERVAL_MS, interval
            ),
        });
    }

    if let Some(name) = &config.window.name
        && name.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "window.name cannot be empty".to_string(),
        });
    }

    if let Some(preferred) = &config.browser.preferred
        && !is_valid_browser(preferred)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "Unknown browser '{}'. Supported browsers: {}",
                preferred,
                supported_browsers_string()
            ),
        });
    }

    if let Some(command) = &config.browser.command
        && command.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "browser.command cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PopwinConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = PopwinConfig::default();
        config.window.poll_interval_ms = Some(0);
        let error = validate_config(&config).unwrap_err();
        assert!(error.to_string().contains("poll_interval_ms"));
    }

    #[test]
    fn test_huge_poll_interval_rejected() {
        let mut config = PopwinConfig::default();
        config.window.poll_interval_ms = Some(MAX_POLL_INTERVAL_MS + 1);
        assert!(validate_config(&config).is_err());

        config.window.poll_interval_ms = Some(MAX_POLL_INTERVAL_MS);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_browser_rejected() {
        let mut config = PopwinConfig::default();
        config.browser.preferred = Some("netscape".to_string());
        let error = validate_config(&config).unwrap_err();
        assert!(error.to_string().contains("Unknown browser 'netscape'"));
    }

    #[test]
    fn test_blank_command_and_name_rejected() {
        let mut config = PopwinConfig::default();
        config.browser.command = Some("   ".to_string());
        assert!(validate_config(&config).is_err());

        let mut config = PopwinConfig::default();
        config.window.name = Some(String::new());
        assert!(validate_config(&config).is_err());
    }
}
