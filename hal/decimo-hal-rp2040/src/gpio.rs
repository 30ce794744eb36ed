//! GPIO pins for the indicator LEDs and buttons

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;

/// Indicator LED output
///
/// Wraps an embassy-rp `Output` so it can implement
/// [`decimo_hal::OutputPin`]. Writes go through the SIO set/clear
/// registers and are single-cycle.
pub struct LedPin<'d>(Output<'d>);

impl<'d> LedPin<'d> {
    /// Claim `pin` as an output, initially low
    pub fn new<P: Pin>(pin: Peri<'d, P>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl decimo_hal::OutputPin for LedPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Configure a button input
///
/// Buttons short the pin to ground, so the internal pull-up is enabled
/// and a press reads as a falling edge.
pub fn button_input<'d, P: Pin>(pin: Peri<'d, P>) -> Input<'d> {
    Input::new(pin, Pull::Up)
}
