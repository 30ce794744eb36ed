//! RP2040-specific HAL for the decimo firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `decimo-hal` traits:
//!
//! - GPIO outputs for the indicator LEDs, pulled-up button inputs
//! - PIO-based WS2812 pixel output (implements `decimo_hal::PixelSink`)
//! - PIO clock divider math

#![no_std]

pub mod gpio;
pub mod pio;
pub mod ws2812;

pub use gpio::{button_input, LedPin};
pub use pio::ClockError;
pub use ws2812::PioPixelSink;
