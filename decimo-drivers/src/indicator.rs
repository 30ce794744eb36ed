//! GPIO indicator outputs
//!
//! Maps indicator channels onto a bank of output pins. Channel `n` drives
//! `pins[n]`. The bank can be wired active-high or active-low.

use decimo_core::traits::{Channel, IndicatorDriver};
use decimo_hal::OutputPin;

/// Bank of indicator LEDs on GPIO pins
pub struct PinIndicators<P, const N: usize> {
    pins: [P; N],
    /// If true, LED on = pin LOW
    inverted: bool,
}

impl<P: OutputPin, const N: usize> PinIndicators<P, N> {
    /// Create a bank and switch every LED off
    ///
    /// # Arguments
    /// - `pins`: One pin per channel, in channel order
    /// - `inverted`: If true, an LED is lit while its pin is LOW
    pub fn new(pins: [P; N], inverted: bool) -> Self {
        let mut bank = Self { pins, inverted };
        bank.all_off();
        bank
    }

    /// Create a bank with active-high outputs
    pub fn new_active_high(pins: [P; N]) -> Self {
        Self::new(pins, false)
    }

    /// Switch every LED off
    fn all_off(&mut self) {
        for pin in self.pins.iter_mut() {
            pin.set_state(self.inverted);
        }
    }
}

impl<P: OutputPin, const N: usize> IndicatorDriver for PinIndicators<P, N> {
    fn set_output(&mut self, channel: Channel, level: bool) {
        // Channels the board does not wire are ignored
        if let Some(pin) = self.pins.get_mut(channel.index()) {
            pin.set_state(level != self.inverted);
        }
    }
}
