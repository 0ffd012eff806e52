use crate::source::MetricsSource;
use std::collections::VecDeque;
use vitals_core::{MetricsSnapshot, MonitorError, NetworkIo, Result};

/// Bytes per megabyte (1024²) for the network counter conversion.
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Rolling/point metric state fed by a [`MetricsSource`].
///
/// CPU and memory keep a bounded FIFO history of the last `capacity`
/// samples, updated in lockstep; disk and network keep only the latest
/// value.  Exactly one writer (the refresh cycle) mutates this through
/// [`update`](Self::update); the presentation layer only ever sees owned
/// snapshots.
#[derive(Debug)]
pub struct MetricsStore<S> {
    source:      S,
    capacity:    usize,
    cpu_history: VecDeque<f64>,
    mem_history: VecDeque<f64>,
    disk_usage:  f64,
    net_io:      NetworkIo,
}

impl<S: MetricsSource> MetricsStore<S> {
    /// Create a store with a fixed history capacity.
    ///
    /// `capacity` is immutable for the lifetime of the store; zero is
    /// rejected here rather than producing a store that can never hold a
    /// sample.
    pub fn new(source: S, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MonitorError::Config(
                "history capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            source,
            capacity,
            cpu_history: VecDeque::with_capacity(capacity),
            mem_history: VecDeque::with_capacity(capacity),
            disk_usage:  0.0,
            net_io:      NetworkIo::default(),
        })
    }

    /// Run one sampling cycle: take a fresh sample and fold it in.
    ///
    /// After a successful return all four fields reflect the same sampling
    /// instant.  On failure the error propagates untouched and no field is
    /// modified, so readers keep seeing the previous coherent state.
    pub fn update(&mut self) -> Result<()> {
        let sample = self.source.sample()?;
        tracing::trace!(?sample, "sampled");

        push_bounded(&mut self.cpu_history, sample.cpu_percent, self.capacity);
        push_bounded(&mut self.mem_history, sample.memory_percent, self.capacity);
        self.disk_usage = sample.disk_percent;
        self.net_io = NetworkIo {
            sent_mb:     sample.bytes_sent as f64 / BYTES_PER_MB,
            received_mb: sample.bytes_received as f64 / BYTES_PER_MB,
        };

        Ok(())
    }
}

impl<S> MetricsStore<S> {
    /// Chronological CPU history, oldest first.  Owned — later updates never
    /// retroactively affect a vector already handed out.
    #[must_use]
    pub fn cpu_history(&self) -> Vec<f64> {
        self.cpu_history.iter().copied().collect()
    }

    /// Chronological memory history, oldest first.  Same length as the CPU
    /// history at all times.
    #[must_use]
    pub fn mem_history(&self) -> Vec<f64> {
        self.mem_history.iter().copied().collect()
    }

    /// Newest CPU reading, `None` before the first update.
    #[must_use]
    pub fn latest_cpu(&self) -> Option<f64> {
        self.cpu_history.back().copied()
    }

    /// Newest memory reading, `None` before the first update.
    #[must_use]
    pub fn latest_mem(&self) -> Option<f64> {
        self.mem_history.back().copied()
    }

    /// Last-observed disk utilization percent (0.0 before the first update).
    #[must_use]
    pub fn disk_usage(&self) -> f64 {
        self.disk_usage
    }

    /// Last-observed cumulative network totals in MB.
    #[must_use]
    pub fn network_io(&self) -> NetworkIo {
        self.net_io
    }

    /// Maximum number of samples each history retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All read views in one coherent value for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cpu_history: self.cpu_history(),
            mem_history: self.mem_history(),
            disk_usage:  self.disk_usage,
            net_io:      self.net_io,
        }
    }
}

/// Push a sample, evicting the oldest once `capacity` is reached.
fn push_bounded(history: &mut VecDeque<f64>, value: f64, capacity: usize) {
    if history.len() == capacity {
        history.pop_front();
    }
    history.push_back(value);
}
