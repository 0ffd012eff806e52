use iced::{widget::text, Element};
use vitals_core::{event::Message, state::MetricsSnapshot};
use vitals_theme::Palette;

/// Displays the newest memory reading as a percentage.
#[derive(Debug, Default)]
pub struct MemoryReadout;

impl MemoryReadout {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        snapshot: &'a MetricsSnapshot,
        palette: &'a Palette,
    ) -> Element<'a, Message> {
        let label = match snapshot.latest_mem() {
            Some(pct) => format!("MEM {pct:.1}%"),
            None      => "MEM --".to_string(),
        };
        text(label).size(16).color(palette.mem_series.to_iced()).into()
    }
}
