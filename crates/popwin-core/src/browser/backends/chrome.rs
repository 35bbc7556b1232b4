//! Google Chrome browser backend implementation.

use crate::browser::traits::BrowserBackend;

/// Backend implementation for Google Chrome.
pub struct ChromeBackend;

impl BrowserBackend for ChromeBackend {
    fn name(&self) -> &'static str {
        "chrome"
    }

    fn display_name(&self) -> &'static str {
        "Google Chrome"
    }

    fn executables(&self) -> &'static [&'static str] {
        &["google-chrome", "google-chrome-stable"]
    }

    fn launch_args(&self) -> &'static str {
        "--user-data-dir={profile} --no-first-run --app={url}"
    }
}
