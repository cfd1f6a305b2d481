use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::swatch_style;
use super::theme::Theme;
use crate::app::{App, Focus};
use crate::types::SlotRole;

pub fn build_palette_text(app: &App) -> Text<'static> {
    let focused = app.focus == Focus::Palette;

    let lines = SlotRole::ALL
        .iter()
        .zip(app.palette.slots())
        .enumerate()
        .map(|(index, (role, slot))| {
            let selected = focused && index == app.slot_cursor;
            let moving = app.moving_slot == Some(index);
            let marker_style = if selected {
                Style::default()
                    .fg(Theme::selection_marker())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };

            let (swatch, value) = match slot {
                Some(color) => (
                    Span::styled("        ", swatch_style(*color)),
                    Span::styled(
                        format!(" {color} "),
                        Style::default().fg(Theme::text()).add_modifier(Modifier::BOLD),
                    ),
                ),
                None => (
                    Span::styled("░░░░░░░░", Style::default().fg(Theme::dim())),
                    Span::styled(" empty   ", Style::default().fg(Theme::dim())),
                ),
            };

            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(format!("{}. ", index + 1), Style::default().fg(Theme::dim())),
                swatch,
                value,
                Span::styled(role.label(), Style::default().fg(Theme::highlight())),
            ];
            if moving {
                spans.push(Span::styled(
                    "  (moving)",
                    Style::default()
                        .fg(Theme::warn())
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
