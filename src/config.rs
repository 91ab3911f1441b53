use std::env;
use std::time::Duration;

/// Policy constants for the driver. The defaults match the stock driver
/// behavior; both can be overridden through the environment for testing.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many directory levels the installed-application scan descends.
    pub scan_depth: usize,
    /// Pause between focusing an application and dispatching a key combo at
    /// it, so the OS has delivered the focus change first.
    pub settle_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            scan_depth: env::var("DESK_DRIVER_SCAN_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scan_depth),
            settle_delay: env::var("DESK_DRIVER_SETTLE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.settle_delay),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_depth: 2,
            settle_delay: Duration::from_millis(100),
        }
    }
}
