//! Browser backends and command resolution for [`crate::window::ProcessHost`].

mod backends;
mod errors;
mod registry;
mod traits;

pub use errors::BrowserError;
pub use registry::{
    all_browsers, detect_browser, get_browser, is_valid_browser, supported_browsers_string,
    valid_browser_names,
};
pub use traits::BrowserBackend;

use tracing::info;

use crate::config::BrowserConfig;
use crate::window::CommandTemplate;

/// Pick the command template used to open windows.
///
/// Resolution order:
/// 1. An explicit `command` template
/// 2. The `preferred` browser, which must be installed
/// 3. The first installed browser
pub fn resolve_command(config: &BrowserConfig) -> Result<CommandTemplate, BrowserError> {
    if let Some(command) = &config.command {
        let template = CommandTemplate::parse(command)?;
        info!(
            event = "core.browser.resolve_completed",
            source = "command",
            program = %template.program()
        );
        return Ok(template);
    }

    let backend = match &config.preferred {
        Some(name) => {
            let backend = get_browser(name).ok_or_else(|| BrowserError::UnknownBrowser {
                name: name.clone(),
                supported: supported_browsers_string(),
            })?;
            if !backend.is_available() {
                return Err(BrowserError::BrowserNotInstalled {
                    name: backend.name().to_string(),
                    executables: backend.executables().join(", "),
                });
            }
            backend
        }
        None => detect_browser().ok_or(BrowserError::NoBrowserFound)?,
    };

    let command = backend
        .command_template()
        .ok_or_else(|| BrowserError::BrowserNotInstalled {
            name: backend.name().to_string(),
            executables: backend.executables().join(", "),
        })?;
    let template = CommandTemplate::parse(&command)?;

    info!(
        event = "core.browser.resolve_completed",
        source = "backend",
        browser = backend.name(),
        program = %template.program()
    );
    Ok(template)
}
