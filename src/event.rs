use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
///
/// A key release (reported on some platforms) yields `None`; a poll timeout
/// yields a `Tick`.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(AppEvent::KeyPress(key.code))
            }
            // Redraw happens on the next loop iteration anyway.
            Event::Resize(..) => Some(AppEvent::Tick),
            _ => None,
        });
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop until the app stops.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal, tick_rate: Duration) -> Result<()> {
    tracing::info!(?tick_rate, "event loop started");
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    tracing::info!("event loop finished");
    Ok(())
}
