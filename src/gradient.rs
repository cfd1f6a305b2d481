/// Linear RGB gradients between two colors.
use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradientError {
    #[error("a gradient needs at least 2 steps, got {0}")]
    TooFewSteps(usize),
}

/// Interpolates one channel at `t` in `[0, 1]`.
///
/// Halves round up (`floor(x + 0.5)`), so the midpoint of 0 and 255 is 128
/// in either direction.
pub fn interpolate_channel(start: u8, end: u8, t: f64) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);
    let value = (start + (end - start) * t + 0.5).floor();
    value.clamp(0.0, 255.0) as u8
}

/// Returns `steps` colors evenly spaced from `from` to `to`, both included.
pub fn generate_gradient(from: Color, to: Color, steps: usize) -> Result<Vec<Color>, GradientError> {
    if steps < 2 {
        return Err(GradientError::TooFewSteps(steps));
    }
    let (r1, g1, b1) = from.to_channels();
    let (r2, g2, b2) = to.to_channels();
    let last = (steps - 1) as f64;

    let gradient = (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            Color::from_channels(
                interpolate_channel(r1, r2, t),
                interpolate_channel(g1, g2, t),
                interpolate_channel(b1, b2, t),
            )
        })
        .collect();
    Ok(gradient)
}
