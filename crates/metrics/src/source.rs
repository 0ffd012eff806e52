use std::path::{Path, PathBuf};
use sysinfo::{Disks, Networks, System};
use vitals_core::{HostInfo, MetricSample, MonitorError, Result};

/// Anything that can produce a point-in-time [`MetricSample`].
///
/// The OS-backed implementation is [`SysinfoSource`]; tests substitute
/// scripted implementations.
pub trait MetricsSource {
    fn sample(&mut self) -> Result<MetricSample>;
}

/// OS-backed source reading through `sysinfo`.
///
/// The refresh-to-refresh window doubles as the sampling interval for the
/// instantaneous CPU percentage, so `sample()` is expected to be called on
/// the fixed refresh period and nowhere else.
pub struct SysinfoSource {
    sys:      System,
    disks:    Disks,
    networks: Networks,
    mount:    PathBuf,
}

impl SysinfoSource {
    /// Build a source whose disk readout tracks `mount`.
    ///
    /// Fails when `mount` is not a mounted filesystem, so a bad path
    /// surfaces at startup rather than on the first sampling cycle.
    pub fn new(mount: impl AsRef<Path>) -> Result<Self> {
        let mut sys = System::new_all();
        sys.refresh_cpu_usage(); // baseline for the first usage delta
        let disks    = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        let mount    = mount.as_ref().to_path_buf();

        if !disks.iter().any(|d| d.mount_point() == mount) {
            return Err(MonitorError::Config(format!(
                "'{}' is not a mounted filesystem",
                mount.display()
            )));
        }

        Ok(Self {
            sys,
            disks,
            networks,
            mount,
        })
    }

    /// Static host identity for the dashboard header.
    #[must_use]
    pub fn host_info(&self) -> HostInfo {
        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{name} {version}"),
            (Some(name), None) => name,
            _ => String::new(),
        };
        let processor = self
            .sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .unwrap_or_default();

        HostInfo {
            os,
            processor,
            arch: System::cpu_arch(),
        }
    }
}

impl MetricsSource for SysinfoSource {
    fn sample(&mut self) -> Result<MetricSample> {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);

        let cpu_percent = f64::from(self.sys.global_cpu_usage());

        let total_memory = self.sys.total_memory();
        let memory_percent = if total_memory == 0 {
            0.0
        } else {
            self.sys.used_memory() as f64 / total_memory as f64 * 100.0
        };

        let disk_percent = self
            .disks
            .iter()
            .find(|d| d.mount_point() == self.mount)
            .map(|d| {
                let total = d.total_space();
                if total == 0 {
                    0.0
                } else {
                    (total - d.available_space()) as f64 / total as f64 * 100.0
                }
            })
            .ok_or_else(|| {
                MonitorError::Source(format!(
                    "mount '{}' is no longer available",
                    self.mount.display()
                ))
            })?;

        // Since-boot totals summed over all interfaces (cumulative, not a rate).
        let bytes_sent: u64 = self.networks.iter().map(|(_, d)| d.total_transmitted()).sum();
        let bytes_received: u64 = self.networks.iter().map(|(_, d)| d.total_received()).sum();

        Ok(MetricSample {
            cpu_percent,
            memory_percent,
            disk_percent,
            bytes_sent,
            bytes_received,
        })
    }
}
