use iced::{widget::text, Element};
use vitals_core::{event::Message, state::HostInfo};
use vitals_theme::Palette;

/// Static host identity line under the dashboard title — OS, processor,
/// architecture.
#[derive(Debug, Default)]
pub struct HostReadout;

impl HostReadout {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, host: &'a HostInfo, palette: &'a Palette) -> Element<'a, Message> {
        text(host.summary())
            .size(12)
            .color(palette.muted.to_iced())
            .into()
    }
}
