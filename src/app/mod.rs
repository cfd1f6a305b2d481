mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Designer,
    Help,
}

/// Which panel receives cursor keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Palette,
}

/// Ticks a status message stays on screen before it is cleared.
pub const STATUS_TICKS: u32 = 16;
