//! Client-wide constants for timeouts and the monitored-object class.

use std::time::Duration;

/// Timeout for establishing HTTP connections to the management server
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for individual requests to the management server
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Class identifier under which computer objects are enumerated
pub const WINDOWS_COMPUTER_CLASS: &str = "windows.computer";
