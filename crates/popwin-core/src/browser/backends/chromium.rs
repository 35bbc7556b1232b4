//! Chromium browser backend implementation.

use crate::browser::traits::BrowserBackend;

/// Backend implementation for Chromium.
pub struct ChromiumBackend;

impl BrowserBackend for ChromiumBackend {
    fn name(&self) -> &'static str {
        "chromium"
    }

    fn display_name(&self) -> &'static str {
        "Chromium"
    }

    fn executables(&self) -> &'static [&'static str] {
        &["chromium", "chromium-browser"]
    }

    fn launch_args(&self) -> &'static str {
        // A private profile keeps Chromium from handing the URL to a running
        // instance and exiting straight away.
        "--user-data-dir={profile} --no-first-run --app={url}"
    }
}
