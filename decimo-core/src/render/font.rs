//! 5×5 digit font
//!
//! One row-major mask per digit, stored in the order the matrix is wired.
//! Some glyphs look mirrored on paper; the table is the visual contract
//! with the board and must not be "fixed".

use crate::config::NUM_PIXELS;
use crate::state::InvalidDigit;

/// On/off mask for one frame, row-major, `1` = lit
pub type Pattern = [u8; NUM_PIXELS];

#[rustfmt::skip]
static DIGIT_PATTERNS: [Pattern; 10] = [
    // 0
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 1
    [0, 1, 1, 1, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 1, 1, 0, 0,
     0, 0, 1, 0, 0],
    // 2
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 3
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     0, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 4
    [0, 1, 0, 0, 0,
     0, 0, 0, 1, 0,
     0, 1, 1, 1, 1,
     1, 0, 0, 1, 0,
     0, 1, 0, 0, 1],
    // 5
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1],
    // 6
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1],
    // 7
    [0, 0, 0, 1, 0,
     0, 0, 1, 0, 0,
     0, 1, 0, 0, 0,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 8
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
    // 9
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1],
];

/// Look up the mask for a digit
///
/// Fails with [`InvalidDigit`] for anything outside 0-9.
pub fn pattern_for(digit: u8) -> Result<&'static Pattern, InvalidDigit> {
    DIGIT_PATTERNS
        .get(digit as usize)
        .ok_or(InvalidDigit(digit))
}
