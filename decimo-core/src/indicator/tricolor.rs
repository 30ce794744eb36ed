//! Tri-colour status LED
//!
//! Red blinks at 5 Hz until the first press. Button A then selects green,
//! button B selects blue, both blinking at 3 Hz. Red and green/blue run on
//! separate lanes with their own timers.

use super::IndicatorScheme;
use crate::config::{RED_BLINK_PERIOD_MS, RGB_BLINK_PERIOD_MS};
use crate::state::ButtonId;
use crate::traits::{Channel, IndicatorDriver};

pub const RED: Channel = Channel(0);
pub const GREEN: Channel = Channel(1);
pub const BLUE: Channel = Channel(2);

const RED_LANE: usize = 0;
const RGB_LANE: usize = 1;

/// Tri-colour indicator modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TriColorMode {
    /// No press yet, red blinks
    Red = 0,
    /// Last press was A, green blinks
    Green = 1,
    /// Last press was B, blue blinks
    Blue = 2,
}

/// RGB LED on three GPIO lines
pub struct TriColor;

impl IndicatorScheme for TriColor {
    type Mode = TriColorMode;

    const INITIAL_RAW: u8 = TriColorMode::Red as u8;
    const CHANNELS: &'static [Channel] = &[RED, GREEN, BLUE];
    const BLINK_PERIODS_MS: &'static [u32] = &[RED_BLINK_PERIOD_MS, RGB_BLINK_PERIOD_MS];

    fn mode_for(button: ButtonId) -> TriColorMode {
        match button {
            ButtonId::A => TriColorMode::Green,
            ButtonId::B => TriColorMode::Blue,
        }
    }

    fn encode(mode: TriColorMode) -> u8 {
        mode as u8
    }

    fn decode(raw: u8) -> TriColorMode {
        match raw {
            1 => TriColorMode::Green,
            2 => TriColorMode::Blue,
            _ => TriColorMode::Red,
        }
    }

    fn apply_press<D: IndicatorDriver>(mode: TriColorMode, driver: &mut D) {
        // Channel select: switch off everything the new mode does not
        // blink. The blinking channel keeps its phase.
        driver.set_output(RED, false);
        match mode {
            TriColorMode::Red => {
                driver.set_output(GREEN, false);
                driver.set_output(BLUE, false);
            }
            TriColorMode::Green => driver.set_output(BLUE, false),
            TriColorMode::Blue => driver.set_output(GREEN, false),
        }
    }

    fn blink_channels(mode: TriColorMode, lane: usize) -> &'static [Channel] {
        match (mode, lane) {
            (TriColorMode::Red, RED_LANE) => &[RED],
            (TriColorMode::Green, RGB_LANE) => &[GREEN],
            (TriColorMode::Blue, RGB_LANE) => &[BLUE],
            _ => &[],
        }
    }
}
