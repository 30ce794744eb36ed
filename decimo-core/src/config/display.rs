//! LED matrix constants

use crate::render::{Color, Intensity};

/// Matrix width in pixels
pub const MATRIX_WIDTH: usize = 5;

/// Matrix height in pixels
pub const MATRIX_HEIGHT: usize = 5;

/// Pixels per frame
pub const NUM_PIXELS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Global brightness applied to every lit pixel (0.3)
pub const BRIGHTNESS: Intensity = Intensity::from_permille(300);

/// Colour used to draw the digit (cyan)
pub const DIGIT_COLOR: Color = Color::new(Intensity::ZERO, Intensity::FULL, Intensity::FULL);
