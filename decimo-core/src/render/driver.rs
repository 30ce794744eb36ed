//! Change-triggered frame emission
//!
//! The matrix holds its last frame, so a frame is only sent when the
//! digit differs from the one last drawn.

use decimo_hal::PixelSink;

use super::color::{encode, Color, Intensity};
use super::font::pattern_for;
use crate::config::{BRIGHTNESS, DIGIT_COLOR};

/// Render driver
///
/// Owns `last_displayed`, which is private to the main loop.
#[derive(Debug, Clone)]
pub struct RenderDriver {
    color: Color,
    brightness: Intensity,
    last_displayed: Option<u8>,
}

impl Default for RenderDriver {
    fn default() -> Self {
        Self::new(DIGIT_COLOR, BRIGHTNESS)
    }
}

impl RenderDriver {
    /// Create a driver that has not drawn anything yet
    pub const fn new(color: Color, brightness: Intensity) -> Self {
        Self {
            color,
            brightness,
            last_displayed: None,
        }
    }

    /// Digit currently on the matrix, if any
    pub fn last_displayed(&self) -> Option<u8> {
        self.last_displayed
    }

    /// Push a full frame if `digit` changed since the last frame
    ///
    /// Returns `true` if a frame was sent. Digits outside 0-9 send nothing
    /// and leave the matrix as it was.
    pub fn tick<P: PixelSink>(&mut self, digit: u8, sink: &mut P) -> bool {
        if self.last_displayed == Some(digit) {
            return false;
        }

        let Ok(pattern) = pattern_for(digit) else {
            return false;
        };

        for &bit in pattern.iter() {
            sink.push(encode(self.color, self.brightness, bit));
        }
        self.last_displayed = Some(digit);
        true
    }
}
