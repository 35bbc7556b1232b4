//! Default values for configuration types.

use crate::window::DEFAULT_POLL_INTERVAL;

/// Returns the default poll interval in milliseconds (400ms).
pub fn default_poll_interval_ms() -> u64 {
    u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(u64::MAX)
}
