use iced::{widget::text, Element};
use vitals_core::{event::Message, state::MetricsSnapshot};
use vitals_theme::Palette;

/// Displays cumulative since-boot network transfer in MB.
///
/// These are running totals, not rates — they only ever grow.
#[derive(Debug, Default)]
pub struct NetworkReadout;

impl NetworkReadout {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        snapshot: &'a MetricsSnapshot,
        palette: &'a Palette,
    ) -> Element<'a, Message> {
        let io = snapshot.net_io;
        text(format!(
            "NET ↑ {} MB  ↓ {} MB",
            format_mb(io.sent_mb),
            format_mb(io.received_mb)
        ))
        .size(16)
        .color(palette.foreground.to_iced())
        .into()
    }
}

/// One decimal place for small totals, none once values get large.
fn format_mb(mb: f64) -> String {
    if mb >= 1000.0 {
        format!("{mb:.0}")
    } else {
        format!("{mb:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_totals_keep_a_decimal() {
        assert_eq!(format_mb(2.0), "2.0");
        assert_eq!(format_mb(999.94), "999.9");
    }

    #[test]
    fn large_totals_drop_decimals() {
        assert_eq!(format_mb(1234.5), "1235");
    }
}
