use iced::{widget::text, Element};
use vitals_core::{event::Message, state::MetricsSnapshot};
use vitals_theme::Palette;

/// Displays the last-observed utilization of the configured mount.
#[derive(Debug, Default)]
pub struct DiskReadout;

impl DiskReadout {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        snapshot: &'a MetricsSnapshot,
        palette: &'a Palette,
    ) -> Element<'a, Message> {
        text(format!("DISK {:.1}%", snapshot.disk_usage))
            .size(16)
            .color(palette.disk_used.to_iced())
            .into()
    }
}
