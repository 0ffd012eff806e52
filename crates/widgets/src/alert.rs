use iced::{widget::text, Element};
use vitals_core::event::Message;
use vitals_metrics::Alert;
use vitals_theme::Palette;

/// Banner for the active threshold alert.
///
/// Renders empty text when no alert is active so the layout row keeps its
/// height and the readouts below do not jump.
#[derive(Debug, Default)]
pub struct AlertBanner;

impl AlertBanner {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        alert: Option<&'a Alert>,
        palette: &'a Palette,
    ) -> Element<'a, Message> {
        match alert {
            Some(alert) => text(alert.label())
                .size(16)
                .color(palette.alert.to_iced())
                .into(),
            None => text("").size(16).into(),
        }
    }
}
