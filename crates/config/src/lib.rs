//! Typed runtime settings for the monitor.
//!
//! There is no config file, CLI surface, or environment lookup here — the
//! history capacity, refresh period, and disk mount are constructor
//! parameters wired up in `main` and validated once before the UI starts.

use std::path::PathBuf;
use vitals_core::{MonitorError, Result};

/// Default rolling-history capacity (samples kept per metric).
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default sampling/update period in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 250;

/// Runtime settings, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bound on the CPU / memory rolling histories.
    pub history_capacity: usize,
    /// Sampling/update period in milliseconds.
    pub refresh_interval_ms: u64,
    /// Mount point whose utilization feeds the disk readout.
    pub disk_mount: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity:    DEFAULT_HISTORY_CAPACITY,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            disk_mount:          PathBuf::from("/"),
        }
    }
}

impl Settings {
    /// Reject invalid settings up front rather than failing lazily on the
    /// first sampling cycle.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(MonitorError::Config(
                "history capacity must be at least 1".into(),
            ));
        }
        if self.refresh_interval_ms == 0 {
            return Err(MonitorError::Config(
                "refresh interval must be at least 1 ms".into(),
            ));
        }
        Ok(())
    }
}
