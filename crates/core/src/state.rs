use serde::{Deserialize, Serialize};

/// One point-in-time reading from the metrics source.
///
/// Percentages are trusted to the source — the store performs no clamping
/// or validation on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Instantaneous CPU utilization (0.0 – 100.0).
    pub cpu_percent: f64,
    /// Resident memory utilization (0.0 – 100.0).
    pub memory_percent: f64,
    /// Utilization of the configured mount (0.0 – 100.0).
    pub disk_percent: f64,
    /// Cumulative bytes sent since boot.
    pub bytes_sent: u64,
    /// Cumulative bytes received since boot.
    pub bytes_received: u64,
}

/// Cumulative network transfer converted to megabytes (bytes / 1024²).
///
/// Since-boot totals, not rates.  The conversion is the only unit handling
/// the store performs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkIo {
    pub sent_mb: f64,
    pub received_mb: f64,
}

/// Immutable read view handed to the presentation layer.
///
/// Histories are chronological: oldest first, newest last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub cpu_history: Vec<f64>,
    pub mem_history: Vec<f64>,
    pub disk_usage: f64,
    pub net_io: NetworkIo,
}

impl MetricsSnapshot {
    /// Newest CPU reading, `None` before the first sampling cycle.
    #[must_use]
    pub fn latest_cpu(&self) -> Option<f64> {
        self.cpu_history.last().copied()
    }

    /// Newest memory reading, `None` before the first sampling cycle.
    #[must_use]
    pub fn latest_mem(&self) -> Option<f64> {
        self.mem_history.last().copied()
    }
}

/// Static host identity shown in the dashboard header.
///
/// Detected once at startup; fields the platform cannot report stay empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostInfo {
    /// OS name and version, e.g. `"Linux 6.8"`.
    pub os: String,
    /// Processor brand string.
    pub processor: String,
    /// CPU architecture, e.g. `"x86_64"`.
    pub arch: String,
}

impl HostInfo {
    /// One-line header summary, skipping fields the platform left empty.
    #[must_use]
    pub fn summary(&self) -> String {
        [&self.os, &self.processor, &self.arch]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join("  |  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_summary_joins_known_fields() {
        let host = HostInfo {
            os: "Linux 6.8".to_string(),
            processor: "Example CPU".to_string(),
            arch: "x86_64".to_string(),
        };
        assert_eq!(host.summary(), "Linux 6.8  |  Example CPU  |  x86_64");
    }

    #[test]
    fn host_summary_skips_empty_fields() {
        let host = HostInfo {
            os: "Linux 6.8".to_string(),
            processor: String::new(),
            arch: "x86_64".to_string(),
        };
        assert_eq!(host.summary(), "Linux 6.8  |  x86_64");
        assert_eq!(HostInfo::default().summary(), "");
    }
}
