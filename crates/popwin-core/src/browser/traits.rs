//! Browser backend trait definition.

/// Trait defining the interface for browser backends.
///
/// Each supported browser knows its executable names and the arguments that
/// make it open a URL in a dedicated, window-lifetime process.
pub trait BrowserBackend: Send + Sync {
    /// The canonical name of this browser (e.g., "chromium", "firefox").
    fn name(&self) -> &'static str;

    /// The display name for this browser (e.g., "Google Chrome").
    fn display_name(&self) -> &'static str;

    /// Executable names to look up in PATH, in order of preference.
    fn executables(&self) -> &'static [&'static str];

    /// Argument template appended after the executable.
    fn launch_args(&self) -> &'static str;

    /// First executable found in PATH.
    fn find_executable(&self) -> Option<&'static str> {
        self.executables()
            .iter()
            .copied()
            .find(|exe| which::which(exe).is_ok())
    }

    /// Check if this browser is installed and available in PATH.
    fn is_available(&self) -> bool {
        self.find_executable().is_some()
    }

    /// Full command template for the installed executable.
    fn command_template(&self) -> Option<String> {
        self.find_executable()
            .map(|exe| format!("{} {}", exe, self.launch_args()))
    }
}
