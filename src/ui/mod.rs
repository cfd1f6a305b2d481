mod grid;
mod help;
mod helpers;
mod palette;
mod preview;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView, Focus};
use helpers::{centered_rect, panel};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "palette designer",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(54), Constraint::Min(30)])
        .split(layout[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(15), Constraint::Min(7)])
        .split(columns[0]);

    let grid = Paragraph::new(grid::build_grid_text(app))
        .block(panel(" Colors ", app.focus == Focus::Grid));
    frame.render_widget(grid, left[0]);

    let palette = Paragraph::new(palette::build_palette_text(app))
        .block(panel(" Palette ", app.focus == Focus::Palette));
    frame.render_widget(palette, left[1]);

    preview::render_preview(frame, columns[1], app.page_style());

    let footer = Paragraph::new(Text::from(footer_lines(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if app.view == AppView::Help {
        render_help_popup(frame);
    }
}

fn footer_lines(app: &App) -> Vec<Line<'_>> {
    let status = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default()
                .fg(Theme::warn())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            format!("{} of 2 selected", app.selection.len()),
            Style::default().fg(Theme::dim()),
        )),
    };
    let keys = match app.focus {
        Focus::Grid => "arrows: Move  space: Select  g: Gradient  r: Random  R: Reset  a: Add  Tab: Palette  ?: Help  q: Quit",
        Focus::Palette => "Up/Down: Slot  m: Move/Swap  x: Clear  X: Reset palette  Tab: Grid  ?: Help  q: Quit",
    };
    vec![
        status,
        Line::from(Span::styled(keys, Style::default().fg(Theme::dim()))),
    ]
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(help::build_help_text())
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Help "),
        );
    frame.render_widget(popup, area);
}
