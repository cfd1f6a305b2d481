use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color as TuiColor, Style},
    widgets::{Block, BorderType, Borders},
};

use super::theme::Theme;
use crate::color::Color;

pub fn to_tui_color(color: Color) -> TuiColor {
    let (r, g, b) = color.to_channels();
    TuiColor::Rgb(r, g, b)
}

/// Background `color` with black or white text on top, whichever reads better.
pub fn swatch_style(color: Color) -> Style {
    Style::default()
        .bg(to_tui_color(color))
        .fg(to_tui_color(color.contrasting_text()))
}

pub fn panel<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let border = if focused { Theme::focused() } else { Theme::secondary() };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border))
        .title(title)
}

/// Returns a rect of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
