/// Color value type, hex parsing and random colors.
use std::fmt;
use std::str::FromStr;

use rand::RngExt;
use thiserror::Error;

/// Largest value a 24-bit color can hold.
const MAX_RGB: u32 = 0xFF_FFFF;

/// A 24-bit RGB color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingMarker(String),
    #[error("expected 6 hex digits after '#', found {0}")]
    BadLength(usize),
    #[error("invalid hex digits in color {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const BLACK: Color = Color(0x00_0000);
    pub const WHITE: Color = Color(0xFF_FFFF);

    /// Builds a color from its packed 24-bit value. Bits above 24 are dropped.
    pub const fn from_rgb24(value: u32) -> Self {
        Color(value & MAX_RGB)
    }

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn to_channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// Parses exactly `#RRGGBB`, case-insensitive. Surrounding whitespace is rejected.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let Some(hex) = value.strip_prefix('#') else {
            return Err(ColorError::MissingMarker(value.to_string()));
        };
        let digits = hex.chars().count();
        if digits != 6 {
            return Err(ColorError::BadLength(digits));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(value.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|_| ColorError::BadDigit(value.to_string()))
    }

    /// Rec. 601 luma, used to pick readable label text on a swatch.
    pub fn luma(self) -> u8 {
        let (r, g, b) = self.to_channels();
        let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        (weighted / 1000) as u8
    }

    /// Black or white, whichever reads better on top of `self`.
    pub fn contrasting_text(self) -> Color {
        if self.luma() > 140 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

/// Generate a random color anywhere in the 24-bit range.
pub fn random_color() -> Color {
    let mut rng = rand::rng();
    Color(rng.random_range(0..=MAX_RGB))
}

pub fn random_colors(count: usize) -> Vec<Color> {
    (0..count).map(|_| random_color()).collect()
}
