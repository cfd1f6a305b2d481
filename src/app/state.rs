use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::types::{
    ColorGrid, GRID_COLUMNS, GRID_SIZE, PALETTE_SIZE, PageStyle, Palette, RoleDefaults, Selection,
    SlotRole, Toggle,
};

use super::{AppEvent, AppView, Focus, STATUS_TICKS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub focus: Focus,
    pub grid: ColorGrid,
    seed: ColorGrid,
    pub selection: Selection,
    pub palette: Palette,
    defaults: RoleDefaults,
    pub grid_cursor: usize,
    pub slot_cursor: usize,
    /// Slot picked up by a move, waiting for a drop target.
    pub moving_slot: Option<usize>,
    pub status: Option<String>,
    status_age: u32,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            running: true,
            view: AppView::Designer,
            focus: Focus::Grid,
            grid: config.seed.clone(),
            seed: config.seed.clone(),
            selection: Selection::default(),
            palette: Palette::default(),
            defaults: config.defaults.clone(),
            grid_cursor: 0,
            slot_cursor: 0,
            moving_slot: None,
            status: None,
            status_age: 0,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                if self.status.is_some() {
                    self.status_age += 1;
                    if self.status_age >= STATUS_TICKS {
                        self.clear_status();
                    }
                }
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    /// Colors for the preview page, falling back per role for empty slots.
    pub fn page_style(&self) -> PageStyle {
        PageStyle::resolve(&self.palette, &self.defaults)
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Designer,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Esc => {
                if self.moving_slot.take().is_some() {
                    self.set_status("Move cancelled.");
                } else {
                    self.clear_status();
                }
            }
            KeyCode::Char('g') => self.generate_gradient(),
            KeyCode::Char('r') => self.randomize(),
            KeyCode::Char('R') => self.reset_grid(),
            KeyCode::Char('a') => self.add_to_palette(),
            KeyCode::Char('X') => self.reset_palette(),
            _ => match self.focus {
                Focus::Grid => self.handle_grid_key(key),
                Focus::Palette => self.handle_palette_key(key),
            },
        }
    }

    fn handle_grid_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Char('h') => self.move_grid_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_grid_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_grid_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_grid_cursor(0, 1),
            KeyCode::Char(' ') => self.toggle_selection(),
            KeyCode::Enter => self.add_to_palette(),
            _ => {}
        }
    }

    fn handle_palette_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.select_prev_slot()
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.select_next_slot()
            }
            KeyCode::Char('m') | KeyCode::Char(' ') | KeyCode::Enter => self.move_slot(),
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => self.clear_slot(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Grid => Focus::Palette,
            Focus::Palette => Focus::Grid,
        };
        self.moving_slot = None;
    }

    fn move_grid_cursor(&mut self, dx: isize, dy: isize) {
        let rows = GRID_SIZE / GRID_COLUMNS;
        let col = (self.grid_cursor % GRID_COLUMNS) as isize + dx;
        let row = (self.grid_cursor / GRID_COLUMNS) as isize + dy;
        if (0..GRID_COLUMNS as isize).contains(&col) && (0..rows as isize).contains(&row) {
            self.grid_cursor = row as usize * GRID_COLUMNS + col as usize;
        }
    }

    fn toggle_selection(&mut self) {
        match self.selection.toggle(self.grid_cursor) {
            Toggle::Selected | Toggle::Deselected => self.clear_status(),
            Toggle::Full => self.set_status("Only 2 colors can be selected at a time."),
        }
    }

    fn generate_gradient(&mut self) {
        let Some((a, b)) = self.selection.pair() else {
            self.set_status("Please select exactly 2 colors.");
            return;
        };
        let (Some(from), Some(to)) = (self.grid.get(a), self.grid.get(b)) else {
            return;
        };
        match ColorGrid::gradient(from, to) {
            Ok(grid) => {
                info!(%from, %to, "grid replaced by gradient");
                self.replace_grid(grid);
            }
            Err(err) => {
                warn!(%err, "gradient failed");
                self.set_status(format!("Failed to generate gradient: {err}"));
            }
        }
    }

    fn randomize(&mut self) {
        info!("grid randomized");
        self.replace_grid(ColorGrid::random());
    }

    fn reset_grid(&mut self) {
        info!("grid reset to seed");
        self.replace_grid(self.seed.clone());
    }

    fn replace_grid(&mut self, grid: ColorGrid) {
        self.grid = grid;
        self.selection.clear();
        self.clear_status();
    }

    fn add_to_palette(&mut self) {
        if self.selection.is_empty() {
            self.set_status("Please select at least one color to add to the palette.");
            return;
        }
        if self.palette.is_full() {
            self.set_status("Palette is full. Clear some boxes or reset the palette.");
            return;
        }
        let colors = self
            .selection
            .indices()
            .iter()
            .filter_map(|index| self.grid.get(*index))
            .collect::<Vec<_>>();
        let placed = self.palette.fill_empty(colors);
        debug!(placed, selected = self.selection.len(), "added selection to palette");
        if placed != self.selection.len() {
            self.set_status("Palette is full. Clear some boxes or reset the palette.");
        } else {
            self.clear_status();
        }
    }

    fn select_prev_slot(&mut self) {
        if self.slot_cursor == 0 {
            self.slot_cursor = PALETTE_SIZE - 1;
        } else {
            self.slot_cursor -= 1;
        }
    }

    fn select_next_slot(&mut self) {
        self.slot_cursor = (self.slot_cursor + 1) % PALETTE_SIZE;
    }

    /// First press picks up the slot under the cursor, the second swaps it
    /// with the slot under the cursor at that time.
    fn move_slot(&mut self) {
        match self.moving_slot.take() {
            None => {
                self.moving_slot = Some(self.slot_cursor);
                let role = SlotRole::ALL[self.slot_cursor];
                self.set_status(format!("Moving {}. Pick a target slot.", role.label()));
            }
            Some(from) if from == self.slot_cursor => self.clear_status(),
            Some(from) => {
                self.palette.swap(from, self.slot_cursor);
                debug!(from, to = self.slot_cursor, "swapped palette slots");
                self.clear_status();
            }
        }
    }

    fn clear_slot(&mut self) {
        self.palette.clear(self.slot_cursor);
        if self.moving_slot == Some(self.slot_cursor) {
            self.moving_slot = None;
        }
    }

    fn reset_palette(&mut self) {
        info!("palette reset");
        self.palette.reset();
        self.moving_slot = None;
        self.clear_status();
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_age = 0;
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_age = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.update(AppEvent::KeyPress(*key));
        }
    }

    fn hex(value: &str) -> Color {
        value.parse().unwrap()
    }

    #[test]
    fn starts_on_seed_grid_with_empty_palette() {
        let app = app();
        assert_eq!(app.grid, ColorGrid::seed());
        assert!(app.selection.is_empty());
        assert_eq!(app.palette, Palette::default());
        assert_eq!(app.page_style().header_background, hex("#336699"));
    }

    #[test]
    fn grid_cursor_stays_inside_grid() {
        let mut app = app();
        press(&mut app, &[KeyCode::Left, KeyCode::Up]);
        assert_eq!(app.grid_cursor, 0);
        press(&mut app, &[KeyCode::Right, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.grid_cursor, 9);
        press(&mut app, &[KeyCode::Char('l'), KeyCode::Char('l'), KeyCode::Char('l')]);
        assert_eq!(app.grid_cursor, 11);
        press(&mut app, &[KeyCode::Char('k')]);
        assert_eq!(app.grid_cursor, 7);
    }

    #[test]
    fn selecting_a_third_color_is_refused() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char(' '),
                KeyCode::Right,
                KeyCode::Char(' '),
                KeyCode::Right,
                KeyCode::Char(' '),
            ],
        );
        assert_eq!(app.selection.indices(), &[0, 1]);
        assert!(app.status.is_some());

        press(&mut app, &[KeyCode::Left, KeyCode::Char(' ')]);
        assert_eq!(app.selection.indices(), &[0]);
    }

    #[test]
    fn gradient_needs_exactly_two_colors() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('g')]);
        assert_eq!(app.status.as_deref(), Some("Please select exactly 2 colors."));
        assert_eq!(app.grid, ColorGrid::seed());
    }

    #[test]
    fn gradient_replaces_grid_and_clears_selection() {
        let mut app = app();
        // red at 0, blue at 8
        press(
            &mut app,
            &[
                KeyCode::Char(' '),
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Char('g'),
            ],
        );
        assert!(app.selection.is_empty());
        assert_eq!(app.grid.colors()[0], hex("#FF0000"));
        assert_eq!(app.grid.colors()[GRID_SIZE - 1], hex("#0000FF"));
        assert_eq!(app.status, None);
    }

    #[test]
    fn gradient_follows_selection_order() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Char(' '),
                KeyCode::Char('g'),
            ],
        );
        assert_eq!(app.grid.colors()[0], hex("#0000FF"));
        assert_eq!(app.grid.colors()[GRID_SIZE - 1], hex("#FF0000"));
    }

    #[test]
    fn randomize_and_reset_clear_selection() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('r')]);
        assert!(app.selection.is_empty());

        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('R')]);
        assert!(app.selection.is_empty());
        assert_eq!(app.grid, ColorGrid::seed());
    }

    #[test]
    fn add_to_palette_fills_empty_slots_in_order() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('a')]);
        assert_eq!(
            app.status.as_deref(),
            Some("Please select at least one color to add to the palette.")
        );

        press(
            &mut app,
            &[KeyCode::Right, KeyCode::Char(' '), KeyCode::Right, KeyCode::Char(' '), KeyCode::Enter],
        );
        assert_eq!(app.palette.get(SlotRole::HeaderBackground), Some(hex("#FF7F00")));
        assert_eq!(app.palette.get(SlotRole::HeaderText), Some(hex("#FFFF00")));
        assert_eq!(app.status, None);
        assert_eq!(app.page_style().header_text, hex("#FFFF00"));
        assert_eq!(app.page_style().menu_background, hex("#999999"));
    }

    #[test]
    fn full_palette_reports_leftovers() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Right, KeyCode::Char(' ')]);
        press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('a')]);
        assert_eq!(app.status, None);
        press(&mut app, &[KeyCode::Char('a')]);
        assert_eq!(
            app.status.as_deref(),
            Some("Palette is full. Clear some boxes or reset the palette.")
        );
        assert!(app.palette.is_full());

        press(&mut app, &[KeyCode::Char('X')]);
        assert_eq!(app.palette, Palette::default());
    }

    #[test]
    fn move_swaps_two_slots() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('a'), KeyCode::Tab]);
        assert_eq!(app.focus, Focus::Palette);

        press(&mut app, &[KeyCode::Char('m')]);
        assert_eq!(app.moving_slot, Some(0));
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char('m')]);
        assert_eq!(app.moving_slot, None);
        assert_eq!(app.palette.get(SlotRole::HeaderBackground), None);
        assert_eq!(app.palette.get(SlotRole::MenuBackground), Some(hex("#FF0000")));
    }

    #[test]
    fn move_can_be_cancelled() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('a'), KeyCode::Tab]);
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Esc, KeyCode::Enter]);
        assert_eq!(app.moving_slot, Some(1));
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.moving_slot, None);
        assert_eq!(app.palette.get(SlotRole::HeaderBackground), Some(hex("#FF0000")));
    }

    #[test]
    fn clear_slot_empties_only_that_slot() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Right, KeyCode::Char(' ')]);
        press(&mut app, &[KeyCode::Char('a'), KeyCode::Tab, KeyCode::Up, KeyCode::Up]);
        assert_eq!(app.slot_cursor, 3);
        press(&mut app, &[KeyCode::Char('k'), KeyCode::Char('k'), KeyCode::Char('x')]);
        assert_eq!(app.palette.get(SlotRole::HeaderText), None);
        assert_eq!(app.palette.get(SlotRole::HeaderBackground), Some(hex("#FF0000")));
    }

    #[test]
    fn status_expires_after_ticks() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('g')]);
        for _ in 0..STATUS_TICKS - 1 {
            app.update(AppEvent::Tick);
        }
        assert!(app.status.is_some());
        app.update(AppEvent::Tick);
        assert_eq!(app.status, None);
    }

    #[test]
    fn help_view_swallows_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('?'), KeyCode::Char('r')]);
        assert_eq!(app.view, AppView::Help);
        assert_eq!(app.grid, ColorGrid::seed());
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert_eq!(app.view, AppView::Designer);
        assert!(!app.running);
    }
}
