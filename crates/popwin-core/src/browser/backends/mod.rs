mod chrome;
mod chromium;
mod firefox;

pub use chrome::ChromeBackend;
pub use chromium::ChromiumBackend;
pub use firefox::FirefoxBackend;
