//! The displayed digit

use core::fmt;

/// Digit outside 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDigit(pub u8);

impl fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid digit {}", self.0)
    }
}

/// A decimal digit, always in 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(9);

    pub const fn new(value: u8) -> Result<Self, InvalidDigit> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InvalidDigit(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit, 9 wraps to 0
    pub const fn increment(self) -> Self {
        Self((self.0 + 1) % 10)
    }

    /// Previous digit, 0 wraps to 9
    pub const fn decrement(self) -> Self {
        Self((self.0 + 9) % 10)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}
