use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};

use super::helpers::{panel, to_tui_color};
use crate::types::PageStyle;

const MENU_ITEMS: [&str; 4] = ["Home", "About", "Services", "Contact"];

const BODY_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.";

/// Draws the sample page styled by the palette: header, side menu and body.
pub fn render_preview(frame: &mut Frame, area: Rect, style: PageStyle) {
    let block = panel(" Preview ", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(10)])
        .split(rows[1]);

    render_header(frame, rows[0], style);
    render_menu(frame, columns[0], style);
    render_body(frame, columns[1], style);
}

fn render_header(frame: &mut Frame, area: Rect, style: PageStyle) {
    let header = Paragraph::new(Text::from(vec![
        Line::from(""),
        Line::from("My Website").style(Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .bg(to_tui_color(style.header_background))
            .fg(to_tui_color(style.header_text)),
    );
    frame.render_widget(header, area);
}

fn render_menu(frame: &mut Frame, area: Rect, style: PageStyle) {
    // Only the menu background is a palette role; text just has to stay legible.
    let text_color = style.menu_background.contrasting_text();
    let mut lines = vec![Line::from("")];
    lines.extend(MENU_ITEMS.iter().map(|item| Line::from(format!(" {item}"))));
    let menu = Paragraph::new(Text::from(lines)).style(
        Style::default()
            .bg(to_tui_color(style.menu_background))
            .fg(to_tui_color(text_color)),
    );
    frame.render_widget(menu, area);
}

fn render_body(frame: &mut Frame, area: Rect, style: PageStyle) {
    let lines = vec![
        Line::from(""),
        Line::from(" Welcome").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!(" {BODY_TEXT}")),
    ];
    let body = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .style(
            Style::default()
                .bg(to_tui_color(style.body_background))
                .fg(to_tui_color(style.body_text)),
        );
    frame.render_widget(body, area);
}
