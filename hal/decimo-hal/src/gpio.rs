//! GPIO pin abstractions
//!
//! Provides the digital output pin trait implemented by chip-specific HALs.
//! Button inputs use `embedded_hal_async::digital::Wait` directly.

/// Digital output pin
///
/// Implementations handle the register writes for the specific chip.
/// A single write must be atomic with respect to interrupts; on the RP2040
/// the SIO set/clear registers guarantee this.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}
