//! Board pin map
//!
//! BitDogLab-style RP2040 board: tri-colour LED on 13/11/12, buttons on
//! 5 and 6 (to ground), WS2812 5x5 matrix data on 7. The single-LED
//! variant uses the red pin as its status LED.

use embassy_rp::peripherals::{PIN_11, PIN_12, PIN_13, PIN_5, PIN_6, PIN_7, PIO0};
use embassy_rp::{Peri, Peripherals};

pub const LED_RED_GPIO: u8 = 13;
#[cfg_attr(feature = "single-indicator", allow(dead_code))]
pub const LED_GREEN_GPIO: u8 = 11;
#[cfg_attr(feature = "single-indicator", allow(dead_code))]
pub const LED_BLUE_GPIO: u8 = 12;
pub const BUTTON_A_GPIO: u8 = 5;
pub const BUTTON_B_GPIO: u8 = 6;
pub const MATRIX_GPIO: u8 = 7;

/// Peripherals used by the firmware, split out of [`Peripherals`]
pub struct Board {
    pub led_red: Peri<'static, PIN_13>,
    #[cfg_attr(feature = "single-indicator", allow(dead_code))]
    pub led_green: Peri<'static, PIN_11>,
    #[cfg_attr(feature = "single-indicator", allow(dead_code))]
    pub led_blue: Peri<'static, PIN_12>,
    pub button_a: Peri<'static, PIN_5>,
    pub button_b: Peri<'static, PIN_6>,
    pub matrix: Peri<'static, PIN_7>,
    pub pio: Peri<'static, PIO0>,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        Self {
            led_red: p.PIN_13,
            led_green: p.PIN_11,
            led_blue: p.PIN_12,
            button_a: p.PIN_5,
            button_b: p.PIN_6,
            matrix: p.PIN_7,
            pio: p.PIO0,
        }
    }
}
