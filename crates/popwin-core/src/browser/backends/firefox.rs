//! Firefox browser backend implementation.

use crate::browser::traits::BrowserBackend;

/// Backend implementation for Firefox.
pub struct FirefoxBackend;

impl BrowserBackend for FirefoxBackend {
    fn name(&self) -> &'static str {
        "firefox"
    }

    fn display_name(&self) -> &'static str {
        "Firefox"
    }

    fn executables(&self) -> &'static [&'static str] {
        &["firefox"]
    }

    fn launch_args(&self) -> &'static str {
        "--new-instance --profile {profile} {url}"
    }
}
