use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "Tab: Switch focus (grid / palette)",
        "g: Gradient between the 2 selected colors",
        "r: Randomize grid",
        "R: Reset grid",
        "a: Add selection to palette",
        "X: Reset palette",
        "esc: Cancel move / clear message",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Grid"));
    lines.extend(section_lines(&[
        "Arrows or h/j/k/l: Move cursor",
        "space: Select/deselect (up to 2)",
        "Enter: Add selection to palette",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        "Up/Down: Move between slots",
        "m, space or Enter: Pick up slot, again on another slot to swap",
        "x or Delete: Clear slot",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Slots"));
    lines.extend(section_lines(&[
        "1 Header background  2 Header text  3 Menu background",
        "4 Body background    5 Body text",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
