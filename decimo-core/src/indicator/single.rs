//! Single status LED
//!
//! Dark until the first press. Any accepted press turns it on at once and
//! it then blinks at 5 Hz. Both buttons map to the same mode.

use super::IndicatorScheme;
use crate::config::STATUS_BLINK_PERIOD_MS;
use crate::state::ButtonId;
use crate::traits::{Channel, IndicatorDriver};

pub const STATUS: Channel = Channel(0);

/// Single-LED indicator modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SingleLedMode {
    Idle = 0,
    Active = 1,
}

/// One status LED on one GPIO line
pub struct SingleLed;

impl IndicatorScheme for SingleLed {
    type Mode = SingleLedMode;

    const INITIAL_RAW: u8 = SingleLedMode::Idle as u8;
    const CHANNELS: &'static [Channel] = &[STATUS];
    const BLINK_PERIODS_MS: &'static [u32] = &[STATUS_BLINK_PERIOD_MS];

    fn mode_for(_button: ButtonId) -> SingleLedMode {
        SingleLedMode::Active
    }

    fn encode(mode: SingleLedMode) -> u8 {
        mode as u8
    }

    fn decode(raw: u8) -> SingleLedMode {
        match raw {
            1 => SingleLedMode::Active,
            _ => SingleLedMode::Idle,
        }
    }

    fn apply_press<D: IndicatorDriver>(mode: SingleLedMode, driver: &mut D) {
        driver.set_output(STATUS, mode == SingleLedMode::Active);
    }

    fn blink_channels(mode: SingleLedMode, lane: usize) -> &'static [Channel] {
        match (mode, lane) {
            (SingleLedMode::Active, 0) => &[STATUS],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastLevel(Option<bool>);

    impl IndicatorDriver for LastLevel {
        fn set_output(&mut self, channel: Channel, level: bool) {
            assert_eq!(channel, STATUS);
            self.0 = Some(level);
        }
    }

    #[test]
    fn test_both_buttons_activate() {
        assert_eq!(SingleLed::mode_for(ButtonId::A), SingleLedMode::Active);
        assert_eq!(SingleLed::mode_for(ButtonId::B), SingleLedMode::Active);
    }

    #[test]
    fn test_press_is_steady_on() {
        let mut led = LastLevel(None);
        SingleLed::apply_press(SingleLedMode::Active, &mut led);
        assert_eq!(led.0, Some(true));
    }

    #[test]
    fn test_idle_does_not_blink() {
        assert!(SingleLed::blink_channels(SingleLedMode::Idle, 0).is_empty());
        assert_eq!(SingleLed::blink_channels(SingleLedMode::Active, 0), &[STATUS]);
        assert_eq!(SingleLed::initial(), SingleLedMode::Idle);
    }
}
