//! Pixel colour encoding
//!
//! Intensities are unsigned 1.15 fixed point so that both 0.0 and 1.0 are
//! exact and no floating point runs on the render path. A channel value is
//!
//! ```text
//! component = (255 * brightness * channel * mask) >> 30
//! ```
//!
//! which truncates the same way an `(x * 255) as u8` cast does.

use decimo_hal::PixelWord;
use fixed::types::U1F15;

/// Normalised intensity in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(U1F15);

impl Intensity {
    const ONE_BITS: u16 = 1 << 15;

    /// Fully off
    pub const ZERO: Self = Self(U1F15::from_bits(0));

    /// Fully on
    pub const FULL: Self = Self(U1F15::from_bits(Self::ONE_BITS));

    /// Build from thousandths, saturating at 1.0
    ///
    /// The conversion truncates, so `from_permille(300)` is just under 0.3.
    pub const fn from_permille(permille: u16) -> Self {
        let permille = if permille > 1000 { 1000 } else { permille };
        let bits = (permille as u32 * Self::ONE_BITS as u32) / 1000;
        Self(U1F15::from_bits(bits as u16))
    }

    const fn bits(self) -> u64 {
        self.0.to_bits() as u64
    }
}

/// Normalised RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: Intensity,
    pub g: Intensity,
    pub b: Intensity,
}

impl Color {
    pub const WHITE: Self = Self::new(Intensity::FULL, Intensity::FULL, Intensity::FULL);

    pub const fn new(r: Intensity, g: Intensity, b: Intensity) -> Self {
        Self { r, g, b }
    }
}

/// Scale one channel to 0-255
fn component(channel: Intensity, brightness: Intensity, mask_bit: u8) -> u8 {
    if mask_bit == 0 {
        return 0;
    }
    let scaled = (255 * brightness.bits() * channel.bits()) >> 30;
    scaled.min(255) as u8
}

/// Encode one pixel for the sink
///
/// `mask_bit` is the font bit for this pixel; `0` forces the pixel off.
/// Byte layout is green, red, blue from the top, low byte zero.
pub fn encode(color: Color, brightness: Intensity, mask_bit: u8) -> PixelWord {
    let r = component(color.r, brightness, mask_bit) as u32;
    let g = component(color.g, brightness, mask_bit) as u32;
    let b = component(color.b, brightness, mask_bit) as u32;
    (g << 24) | (r << 16) | (b << 8)
}
