use iced::{widget::text, Element};
use vitals_core::{event::Message, state::MetricsSnapshot};
use vitals_theme::Palette;

/// Displays the newest CPU reading as a percentage.
#[derive(Debug, Default)]
pub struct CpuReadout;

impl CpuReadout {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        snapshot: &'a MetricsSnapshot,
        palette: &'a Palette,
    ) -> Element<'a, Message> {
        let label = match snapshot.latest_cpu() {
            Some(pct) => format!("CPU {pct:.1}%"),
            None      => "CPU --".to_string(),
        };
        text(label).size(16).color(palette.cpu_series.to_iced()).into()
    }
}
