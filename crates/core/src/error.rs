use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Invalid settings at construction time — zero history capacity, a disk
    /// path that is not mounted.  Surfaces before the UI starts.
    #[error("config error: {0}")]
    Config(String),

    /// The OS instrumentation could not produce a reading.  Propagates out
    /// of a sampling cycle uncaught; the refresh loop skips that cycle.
    #[error("metrics source error: {0}")]
    Source(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
