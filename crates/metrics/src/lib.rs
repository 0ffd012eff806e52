pub mod alert;
pub mod source;
pub mod store;

pub use alert::{check_thresholds, Alert};
pub use source::{MetricsSource, SysinfoSource};
pub use store::MetricsStore;

#[cfg(test)]
pub(crate) mod testing {
    use crate::source::MetricsSource;
    use std::collections::VecDeque;
    use vitals_core::{MetricSample, MonitorError, Result};

    /// Source that replays a scripted list of samples, then errors.
    pub struct ScriptedSource {
        samples: VecDeque<MetricSample>,
    }

    impl ScriptedSource {
        pub fn new(samples: impl IntoIterator<Item = MetricSample>) -> Self {
            Self {
                samples: samples.into_iter().collect(),
            }
        }
    }

    impl MetricsSource for ScriptedSource {
        fn sample(&mut self) -> Result<MetricSample> {
            self.samples
                .pop_front()
                .ok_or_else(|| MonitorError::Source("script exhausted".into()))
        }
    }

    /// Sample with the given percentages and zero network counters.
    pub fn pct(cpu: f64, mem: f64, disk: f64) -> MetricSample {
        MetricSample {
            cpu_percent: cpu,
            memory_percent: mem,
            disk_percent: disk,
            bytes_sent: 0,
            bytes_received: 0,
        }
    }
}
