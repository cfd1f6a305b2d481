use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::swatch_style;
use super::theme::Theme;
use crate::app::{App, Focus};
use crate::types::GRID_COLUMNS;

const SWATCH_WIDTH: usize = 11;

/// Builds the 4x3 swatch grid. Each swatch is three rows tall; the middle
/// row carries the cursor, the hex value and the selection order.
pub fn build_grid_text(app: &App) -> Text<'static> {
    let focused = app.focus == Focus::Grid;
    let mut lines = Vec::new();

    for (row_index, row) in app.grid.colors().chunks(GRID_COLUMNS).enumerate() {
        let mut top = Vec::new();
        let mut middle = Vec::new();
        let mut bottom = Vec::new();

        for (col_index, color) in row.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col_index;
            let cursor = focused && index == app.grid_cursor;
            let order = app
                .selection
                .indices()
                .iter()
                .position(|i| *i == index)
                .map(|pos| char::from(b'1' + pos as u8))
                .unwrap_or(' ');

            let mut style = swatch_style(*color);
            if cursor {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let label = format!(
                "{}{}{}",
                if cursor { '>' } else { ' ' },
                color,
                order
            );

            top.push(Span::raw(" "));
            top.push(Span::styled(" ".repeat(SWATCH_WIDTH), swatch_style(*color)));
            middle.push(Span::raw(" "));
            middle.push(Span::styled(
                format!("{label:^width$}", width = SWATCH_WIDTH),
                style,
            ));
            bottom.push(Span::raw(" "));
            bottom.push(Span::styled(
                selection_bar(app.selection.contains(index)),
                swatch_style(*color),
            ));
        }

        lines.push(Line::from(top));
        lines.push(Line::from(middle));
        lines.push(Line::from(bottom));
        lines.push(Line::from(""));
    }

    let selected = app
        .selection
        .indices()
        .iter()
        .filter_map(|index| app.grid.get(*index))
        .map(|color| color.to_string())
        .collect::<Vec<_>>();
    let summary = if selected.is_empty() {
        "Selected: none".to_string()
    } else {
        format!("Selected: {}", selected.join(" -> "))
    };
    lines.push(Line::from(Span::styled(
        summary,
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}

fn selection_bar(selected: bool) -> String {
    if selected {
        format!("{:^width$}", "▀▀▀▀▀", width = SWATCH_WIDTH)
    } else {
        " ".repeat(SWATCH_WIDTH)
    }
}
