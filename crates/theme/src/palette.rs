use crate::colors::Color;

/// Enum-keyed style table — one constant per [`Theme`](crate::Theme) variant.
///
/// The presentation layer looks everything up here; nothing reads widget
/// text back to decide how to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Window background.
    pub background: Color,
    /// Card / chart surface behind readouts.
    pub surface: Color,
    /// Primary text.
    pub foreground: Color,
    /// Secondary text (units, timestamps).
    pub muted: Color,
    /// Accent (heading, theme toggle).
    pub accent: Color,
    /// Alert banner text.
    pub alert: Color,
    /// CPU history trace.
    pub cpu_series: Color,
    /// Memory history trace.
    pub mem_series: Color,
    /// Pie slice: used disk space.
    pub disk_used: Color,
    /// Pie slice: free disk space.
    pub disk_free: Color,
    /// Chart grid lines.
    pub grid: Color,
}

/// Catppuccin Mocha.
pub const DARK: Palette = Palette {
    background: Color::rgb(0.118, 0.118, 0.180), // #1e1e2e
    surface:    Color::rgb(0.157, 0.157, 0.235), // #28283c
    foreground: Color::rgb(0.804, 0.839, 0.957), // #cdd6f4
    muted:      Color::rgb(0.576, 0.600, 0.733), // #9399bb
    accent:     Color::rgb(0.796, 0.651, 0.969), // #cba6f7
    alert:      Color::rgb(0.953, 0.545, 0.659), // #f38ba8
    cpu_series: Color::rgb(0.537, 0.706, 0.980), // #89b4fa
    mem_series: Color::rgb(0.651, 0.890, 0.631), // #a6e3a1
    disk_used:  Color::rgb(0.980, 0.702, 0.529), // #fab387
    disk_free:  Color::rgb(0.271, 0.278, 0.353), // #45475a
    grid:       Color::rgb(0.271, 0.278, 0.353), // #45475a
};

/// Catppuccin Latte.
pub const LIGHT: Palette = Palette {
    background: Color::rgb(0.937, 0.945, 0.961), // #eff1f5
    surface:    Color::rgb(0.863, 0.878, 0.918), // #dce0ea
    foreground: Color::rgb(0.298, 0.310, 0.412), // #4c4f69
    muted:      Color::rgb(0.486, 0.502, 0.588), // #7c7f96
    accent:     Color::rgb(0.533, 0.373, 0.937), // #885fef
    alert:      Color::rgb(0.824, 0.059, 0.224), // #d20f39
    cpu_series: Color::rgb(0.118, 0.400, 0.961), // #1e66f5
    mem_series: Color::rgb(0.251, 0.627, 0.169), // #40a02b
    disk_used:  Color::rgb(0.996, 0.392, 0.043), // #fe640b
    disk_free:  Color::rgb(0.737, 0.753, 0.800), // #bcc0cc
    grid:       Color::rgb(0.737, 0.753, 0.800), // #bcc0cc
};
