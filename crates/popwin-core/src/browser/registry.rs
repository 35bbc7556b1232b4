//! Browser registry for managing and looking up browser backends.

use std::sync::LazyLock;

use tracing::debug;

use super::backends::{ChromeBackend, ChromiumBackend, FirefoxBackend};
use super::traits::BrowserBackend;

/// Global registry of all supported browser backends.
static REGISTRY: LazyLock<BrowserRegistry> = LazyLock::new(BrowserRegistry::new);

/// Registry of browser backends, in detection order.
struct BrowserRegistry {
    backends: Vec<Box<dyn BrowserBackend>>,
}

impl BrowserRegistry {
    fn new() -> Self {
        Self {
            backends: vec![
                Box::new(ChromiumBackend),
                Box::new(ChromeBackend),
                Box::new(FirefoxBackend),
            ],
        }
    }

    /// Get a backend by name (case-insensitive).
    fn get(&self, name: &str) -> Option<&dyn BrowserBackend> {
        self.backends
            .iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .map(|b| b.as_ref())
    }

    /// First installed backend.
    fn detect(&self) -> Option<&dyn BrowserBackend> {
        self.backends.iter().find_map(|b| {
            if b.is_available() {
                Some(b.as_ref())
            } else {
                None
            }
        })
    }
}

/// Get a reference to a browser backend by name (case-insensitive).
pub fn get_browser(name: &str) -> Option<&'static dyn BrowserBackend> {
    REGISTRY.get(name)
}

/// All backends, in detection order.
pub fn all_browsers() -> impl Iterator<Item = &'static dyn BrowserBackend> {
    REGISTRY.backends.iter().map(|b| b.as_ref())
}

/// Check if a browser name is known (case-insensitive).
pub fn is_valid_browser(name: &str) -> bool {
    get_browser(name).is_some()
}

/// Get all valid browser names, sorted.
pub fn valid_browser_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = all_browsers().map(|b| b.name()).collect();
    names.sort();
    names
}

/// Comma-separated list of valid browser names, for error messages.
pub fn supported_browsers_string() -> String {
    valid_browser_names().join(", ")
}

/// Detect the first installed browser.
///
/// Returns `None` when none of the known browsers is in PATH.
pub fn detect_browser() -> Option<&'static dyn BrowserBackend> {
    let detected = REGISTRY.detect();
    debug!(
        event = "core.browser.detect_completed",
        browser = detected.map(|b| b.name())
    );
    detected
}
