use crate::store::MetricsStore;

/// CPU alert threshold (percent).
pub const CPU_ALERT_PERCENT: f64 = 90.0;
/// Memory alert threshold (percent).
pub const MEMORY_ALERT_PERCENT: f64 = 85.0;
/// Disk alert threshold (percent).
pub const DISK_ALERT_PERCENT: f64 = 80.0;

/// An active threshold breach, carrying the offending reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alert {
    HighCpu(f64),
    HighMemory(f64),
    HighDisk(f64),
}

impl Alert {
    /// Banner text shown by the presentation layer.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::HighCpu(pct)    => format!("High CPU Usage: {pct:.1}%"),
            Self::HighMemory(pct) => format!("High Memory Usage: {pct:.1}%"),
            Self::HighDisk(pct)   => format!("High Disk Usage: {pct:.1}%"),
        }
    }
}

/// Evaluate the alert thresholds against the newest readings.
///
/// Strict priority, first match wins: CPU, then memory, then disk.  A
/// simultaneous CPU + memory breach therefore only ever reports CPU.
/// Returns `None` before the first update and whenever nothing breaches,
/// which clears any active alert.
#[must_use]
pub fn check_thresholds<S>(store: &MetricsStore<S>) -> Option<Alert> {
    let cpu = store.latest_cpu()?;
    let memory = store.latest_mem()?;
    let disk = store.disk_usage();

    if cpu > CPU_ALERT_PERCENT {
        Some(Alert::HighCpu(cpu))
    } else if memory > MEMORY_ALERT_PERCENT {
        Some(Alert::HighMemory(memory))
    } else if disk > DISK_ALERT_PERCENT {
        Some(Alert::HighDisk(disk))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pct, ScriptedSource};
    use crate::MetricsStore;
    use vitals_core::MetricSample;

    fn store_after_one(sample: MetricSample) -> MetricsStore<ScriptedSource> {
        let mut store = MetricsStore::new(ScriptedSource::new([sample]), 10).unwrap();
        store.update().unwrap();
        store
    }

    #[test]
    fn no_alert_before_first_update() {
        let store = MetricsStore::new(ScriptedSource::new([]), 10).unwrap();
        assert_eq!(check_thresholds(&store), None);
    }

    #[test]
    fn cpu_wins_over_memory_and_disk() {
        let store = store_after_one(pct(95.0, 90.0, 90.0));
        let alert = check_thresholds(&store).unwrap();
        assert_eq!(alert, Alert::HighCpu(95.0));
        let label = alert.label();
        assert!(label.contains("CPU"));
        assert!(!label.contains("Memory"));
        assert!(!label.contains("Disk"));
    }

    #[test]
    fn memory_wins_over_disk_when_cpu_is_quiet() {
        // CPU sits exactly on its threshold, which does not breach.
        let store = store_after_one(pct(90.0, 90.0, 90.0));
        assert_eq!(check_thresholds(&store), Some(Alert::HighMemory(90.0)));
    }

    #[test]
    fn disk_alert_when_only_disk_breaches() {
        let store = store_after_one(pct(10.0, 10.0, 85.5));
        let alert = check_thresholds(&store).unwrap();
        assert_eq!(alert, Alert::HighDisk(85.5));
        assert_eq!(alert.label(), "High Disk Usage: 85.5%");
    }

    #[test]
    fn quiet_system_clears_any_alert() {
        let store = store_after_one(pct(10.0, 10.0, 10.0));
        assert_eq!(check_thresholds(&store), None);
    }

    #[test]
    fn thresholds_are_exclusive_bounds() {
        // Exactly at every threshold: nothing breaches.
        let store = store_after_one(pct(90.0, 85.0, 80.0));
        assert_eq!(check_thresholds(&store), None);
    }

    #[test]
    fn evaluation_reads_only_the_newest_sample() {
        let mut store = MetricsStore::new(
            ScriptedSource::new([pct(95.0, 0.0, 0.0), pct(10.0, 10.0, 10.0)]),
            10,
        )
        .unwrap();
        store.update().unwrap();
        assert!(matches!(check_thresholds(&store), Some(Alert::HighCpu(_))));

        store.update().unwrap();
        assert_eq!(check_thresholds(&store), None);
    }
}
