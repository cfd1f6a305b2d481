use thiserror::Error;

use crate::color::{self, Color};
use crate::gradient::{self, GradientError};

pub const GRID_SIZE: usize = 12;
pub const GRID_COLUMNS: usize = 4;
pub const PALETTE_SIZE: usize = 5;

pub const SEED_COLORS: [Color; GRID_SIZE] = [
    Color::from_rgb24(0xFF0000),
    Color::from_rgb24(0xFF7F00),
    Color::from_rgb24(0xFFFF00),
    Color::from_rgb24(0x7FFF00),
    Color::from_rgb24(0x00FF00),
    Color::from_rgb24(0x00FF7F),
    Color::from_rgb24(0x00FFFF),
    Color::from_rgb24(0x007FFF),
    Color::from_rgb24(0x0000FF),
    Color::from_rgb24(0x7F00FF),
    Color::from_rgb24(0xFF00FF),
    Color::from_rgb24(0xFF007F),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("a color grid holds exactly 12 colors, got {0}")]
    WrongSize(usize),
    #[error(transparent)]
    Gradient(#[from] GradientError),
}

/// The 12 swatches currently offered for selection.
///
/// A grid is only ever replaced as a whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid([Color; GRID_SIZE]);

impl ColorGrid {
    pub fn seed() -> Self {
        ColorGrid(SEED_COLORS)
    }

    pub fn from_colors(colors: Vec<Color>) -> Result<Self, GridError> {
        let len = colors.len();
        colors
            .try_into()
            .map(ColorGrid)
            .map_err(|_| GridError::WrongSize(len))
    }

    pub fn gradient(from: Color, to: Color) -> Result<Self, GridError> {
        Self::from_colors(gradient::generate_gradient(from, to, GRID_SIZE)?)
    }

    pub fn random() -> Self {
        ColorGrid(std::array::from_fn(|_| color::random_color()))
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    pub fn colors(&self) -> &[Color; GRID_SIZE] {
        &self.0
    }
}

/// Grid indices the user has highlighted, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    Full,
}

impl Selection {
    pub const CAPACITY: usize = 2;

    pub fn toggle(&mut self, index: usize) -> Toggle {
        if let Some(pos) = self.indices.iter().position(|i| *i == index) {
            self.indices.remove(pos);
            Toggle::Deselected
        } else if self.indices.len() < Self::CAPACITY {
            self.indices.push(index);
            Toggle::Selected
        } else {
            Toggle::Full
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Both picks, in selection order, when exactly two are selected.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.indices.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// What each palette slot paints on the preview page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    HeaderBackground,
    HeaderText,
    MenuBackground,
    BodyBackground,
    BodyText,
}

impl SlotRole {
    pub const ALL: [SlotRole; PALETTE_SIZE] = [
        SlotRole::HeaderBackground,
        SlotRole::HeaderText,
        SlotRole::MenuBackground,
        SlotRole::BodyBackground,
        SlotRole::BodyText,
    ];

    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            SlotRole::HeaderBackground => "Header background",
            SlotRole::HeaderText => "Header text",
            SlotRole::MenuBackground => "Menu background",
            SlotRole::BodyBackground => "Body background",
            SlotRole::BodyText => "Body text",
        }
    }
}

/// Five fixed slots; `None` is an empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    slots: [Option<Color>; PALETTE_SIZE],
}

impl Palette {
    pub fn slots(&self) -> &[Option<Color>; PALETTE_SIZE] {
        &self.slots
    }

    pub fn get(&self, role: SlotRole) -> Option<Color> {
        self.slots[role.slot()]
    }

    /// Places colors into empty slots in slot order. Returns how many fit.
    pub fn fill_empty(&mut self, colors: impl IntoIterator<Item = Color>) -> usize {
        let mut placed = 0;
        for color in colors {
            let Some(entry) = self.slots.iter_mut().find(|slot| slot.is_none()) else {
                break;
            };
            *entry = Some(color);
            placed += 1;
        }
        placed
    }

    pub fn clear(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = None;
        }
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        if a < PALETTE_SIZE && b < PALETTE_SIZE {
            self.slots.swap(a, b);
        }
    }

    pub fn reset(&mut self) {
        self.slots = [None; PALETTE_SIZE];
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

/// Preview colors used when a palette slot is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleDefaults {
    pub header_background: Color,
    pub header_text: Color,
    pub menu_background: Color,
    pub body_background: Color,
    pub body_text: Color,
}

impl Default for RoleDefaults {
    fn default() -> Self {
        Self {
            header_background: Color::from_rgb24(0x336699),
            header_text: Color::WHITE,
            menu_background: Color::from_rgb24(0x999999),
            body_background: Color::WHITE,
            body_text: Color::BLACK,
        }
    }
}

impl RoleDefaults {
    pub fn get(&self, role: SlotRole) -> Color {
        match role {
            SlotRole::HeaderBackground => self.header_background,
            SlotRole::HeaderText => self.header_text,
            SlotRole::MenuBackground => self.menu_background,
            SlotRole::BodyBackground => self.body_background,
            SlotRole::BodyText => self.body_text,
        }
    }
}

/// Resolved colors for the sample page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageStyle {
    pub header_background: Color,
    pub header_text: Color,
    pub menu_background: Color,
    pub body_background: Color,
    pub body_text: Color,
}

impl PageStyle {
    pub fn resolve(palette: &Palette, defaults: &RoleDefaults) -> Self {
        let pick = |role| palette.get(role).unwrap_or_else(|| defaults.get(role));
        Self {
            header_background: pick(SlotRole::HeaderBackground),
            header_text: pick(SlotRole::HeaderText),
            menu_background: pick(SlotRole::MenuBackground),
            body_background: pick(SlotRole::BodyBackground),
            body_text: pick(SlotRole::BodyText),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(value: &str) -> Color {
        value.parse().unwrap()
    }

    #[test]
    fn seed_grid_matches_the_color_wheel() {
        let grid = ColorGrid::seed();
        assert_eq!(grid.get(0), Some(hex("#FF0000")));
        assert_eq!(grid.get(7), Some(hex("#007FFF")));
        assert_eq!(grid.get(11), Some(hex("#FF007F")));
        assert_eq!(grid.get(12), None);
    }

    #[test]
    fn grid_rejects_wrong_size() {
        assert_eq!(
            ColorGrid::from_colors(vec![Color::BLACK; 3]),
            Err(GridError::WrongSize(3))
        );
        assert!(ColorGrid::from_colors(vec![Color::BLACK; GRID_SIZE]).is_ok());
    }

    #[test]
    fn gradient_grid_spans_both_colors() {
        let grid = ColorGrid::gradient(hex("#FF0000"), hex("#0000FF")).unwrap();
        assert_eq!(grid.colors()[0], hex("#FF0000"));
        assert_eq!(grid.colors()[GRID_SIZE - 1], hex("#0000FF"));
    }

    #[test]
    fn selection_holds_at_most_two() {
        let mut selection = Selection::default();
        assert_eq!(selection.toggle(3), Toggle::Selected);
        assert_eq!(selection.toggle(5), Toggle::Selected);
        assert_eq!(selection.toggle(7), Toggle::Full);
        assert_eq!(selection.indices(), &[3, 5]);
        assert_eq!(selection.pair(), Some((3, 5)));

        assert_eq!(selection.toggle(3), Toggle::Deselected);
        assert_eq!(selection.pair(), None);
        assert_eq!(selection.toggle(7), Toggle::Selected);
        assert_eq!(selection.pair(), Some((5, 7)));

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn fill_empty_uses_slot_order_and_stops_when_full() {
        let mut palette = Palette::default();
        palette.fill_empty([hex("#000000"), hex("#111111")]);
        palette.clear(0);
        let placed = palette.fill_empty([hex("#AAAAAA"), hex("#BBBBBB")]);
        assert_eq!(placed, 2);
        assert_eq!(
            palette.slots(),
            &[
                Some(hex("#AAAAAA")),
                Some(hex("#111111")),
                Some(hex("#BBBBBB")),
                None,
                None
            ]
        );

        let placed = palette.fill_empty([Color::BLACK, Color::WHITE, Color::BLACK]);
        assert_eq!(placed, 2);
        assert!(palette.is_full());
    }

    #[test]
    fn swap_clear_and_reset() {
        let mut palette = Palette::default();
        palette.fill_empty([Color::BLACK]);
        palette.swap(0, 4);
        assert_eq!(palette.get(SlotRole::HeaderBackground), None);
        assert_eq!(palette.get(SlotRole::BodyText), Some(Color::BLACK));
        palette.fill_empty([Color::WHITE]);

        palette.swap(0, 9);
        assert_eq!(palette.get(SlotRole::HeaderBackground), Some(Color::WHITE));

        palette.clear(4);
        assert_eq!(palette.get(SlotRole::BodyText), None);

        palette.reset();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn page_style_falls_back_per_role() {
        let mut palette = Palette::default();
        palette.fill_empty([Color::BLACK, Color::BLACK, hex("#FF00FF")]);
        palette.clear(0);
        palette.clear(1);
        let style = PageStyle::resolve(&palette, &RoleDefaults::default());
        assert_eq!(style.header_background, hex("#336699"));
        assert_eq!(style.header_text, Color::WHITE);
        assert_eq!(style.menu_background, hex("#FF00FF"));
        assert_eq!(style.body_background, Color::WHITE);
        assert_eq!(style.body_text, Color::BLACK);
    }
}
