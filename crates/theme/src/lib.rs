pub mod colors;
pub mod palette;

pub use colors::Color;
pub use palette::Palette;

/// Active UI theme.
///
/// An explicit enum, never derived from displayed text or widget labels —
/// every style lookup is keyed off this value through [`Theme::palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other variant — used by the toggle button.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark  => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Style table for this theme.
    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark  => &palette::DARK,
            Self::Light => &palette::LIGHT,
        }
    }

    /// Matching built-in Iced theme, which drives default widget styling
    /// (buttons, scrollbars) that the palette does not cover.
    #[must_use]
    pub fn to_iced(self) -> iced::Theme {
        match self {
            Self::Dark  => iced::Theme::Dark,
            Self::Light => iced::Theme::Light,
        }
    }

    /// Human-readable name, shown on the toggle button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark  => "Dark",
            Self::Light => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn palettes_differ_per_variant() {
        assert_ne!(
            Theme::Dark.palette().background,
            Theme::Light.palette().background
        );
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
