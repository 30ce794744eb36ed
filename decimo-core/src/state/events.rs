//! Button identities and accepted presses

use core::fmt;

use super::digit::Digit;

/// The two counter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Counts up
    A,
    /// Counts down
    B,
}

impl ButtonId {
    /// Index into per-button arrays
    pub const fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ButtonId::A => "A",
            ButtonId::B => "B",
        }
    }
}

/// A press that passed the debounce gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    /// Which button
    pub button: ButtonId,
    /// Digit after applying the press
    pub digit: Digit,
    /// Total accepted presses of this button since boot
    pub count: u32,
}

impl fmt::Display for Press {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Button {} pressed! Count: {}", self.button.name(), self.count)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Press {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Button {=str} pressed! Count: {=u32}", self.button.name(), self.count)
    }
}
