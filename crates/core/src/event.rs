/// All messages (events) that can flow through the application event loop.
///
/// Sources:
/// - Refresh timer subscription → `Tick`
/// - Theme toggle button        → `ThemeToggled`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Fixed-period refresh timer fired — run one sampling cycle.
    Tick,
    /// User clicked the theme toggle — flip Dark ⇄ Light.
    ThemeToggled,
}
