pub mod alert;
pub mod charts;
pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;

pub use alert::AlertBanner;
pub use charts::{HistoryChart, UsagePie};
pub use cpu::CpuReadout;
pub use disk::DiskReadout;
pub use host::HostReadout;
pub use memory::MemoryReadout;
pub use network::NetworkReadout;
