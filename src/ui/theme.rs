use ratatui::style::Color;

/// Unified color theme for the application chrome. Swatches and the preview
/// page use the user's own colors instead.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Border of the focused panel
    pub fn focused() -> Color {
        Color::LightGreen
    }

    /// Status messages
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Section titles
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
