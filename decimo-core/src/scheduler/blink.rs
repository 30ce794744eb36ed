//! Indicator blinking
//!
//! Each blink lane of the scheme has its own period and last-toggle
//! timestamp, so lanes drift independently. The on/off phase is shared:
//! whichever lane fires flips it.
//!
//! The mode is read before the pins are written, so a press can land in
//! between and leave a channel lit that the new mode never blinks. Every
//! time a lane fires, channels the current mode does not blink are driven
//! off again.

use core::marker::PhantomData;

use crate::indicator::{IndicatorScheme, MAX_BLINK_LANES};
use crate::traits::{Channel, IndicatorDriver};

/// Non-blocking blink scheduler
#[derive(Debug)]
pub struct BlinkScheduler<S: IndicatorScheme> {
    last_toggle_ms: [u32; MAX_BLINK_LANES],
    phase: bool,
    _scheme: PhantomData<S>,
}

impl<S: IndicatorScheme> Default for BlinkScheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IndicatorScheme> BlinkScheduler<S> {
    /// Lanes start anchored at t = 0 with the LED phase off
    pub const fn new() -> Self {
        Self {
            last_toggle_ms: [0; MAX_BLINK_LANES],
            phase: false,
            _scheme: PhantomData,
        }
    }

    /// Current shared phase (`true` = lit)
    pub fn phase(&self) -> bool {
        self.phase
    }

    /// Toggle any lane whose period has elapsed
    ///
    /// Returns `true` if at least one output was driven.
    pub fn tick<D: IndicatorDriver>(&mut self, now_ms: u32, mode: S::Mode, driver: &mut D) -> bool {
        let mut toggled = false;

        for (lane, &period_ms) in S::BLINK_PERIODS_MS
            .iter()
            .enumerate()
            .take(MAX_BLINK_LANES)
        {
            let channels = S::blink_channels(mode, lane);
            if channels.is_empty() {
                continue;
            }
            if now_ms.wrapping_sub(self.last_toggle_ms[lane]) < period_ms {
                continue;
            }

            self.phase = !self.phase;
            for &channel in channels {
                driver.set_output(channel, self.phase);
            }
            self.last_toggle_ms[lane] = now_ms;
            toggled = true;
        }

        if toggled {
            for &channel in S::CHANNELS {
                if !Self::blinks(mode, channel) {
                    driver.set_output(channel, false);
                }
            }
        }

        toggled
    }

    /// Whether any lane blinks `channel` in `mode`
    fn blinks(mode: S::Mode, channel: Channel) -> bool {
        (0..S::BLINK_PERIODS_MS.len().min(MAX_BLINK_LANES))
            .any(|lane| S::blink_channels(mode, lane).contains(&channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::tricolor::{BLUE, GREEN, RED};
    use crate::indicator::{SingleLed, SingleLedMode, TriColor, TriColorMode};
    use crate::input::InputCapture;
    use crate::state::{ButtonId, SharedState};

    /// Tracks current level and number of level changes per channel
    struct RecordingIndicators {
        levels: [bool; 3],
        toggles: [u32; 3],
    }

    impl RecordingIndicators {
        fn new() -> Self {
            Self {
                levels: [false; 3],
                toggles: [0; 3],
            }
        }
    }

    impl IndicatorDriver for RecordingIndicators {
        fn set_output(&mut self, channel: Channel, level: bool) {
            if self.levels[channel.index()] != level {
                self.toggles[channel.index()] += 1;
            }
            self.levels[channel.index()] = level;
        }
    }

    /// Lets a button press land just before the first pin write
    struct PressBeforeWrite<'a> {
        state: &'a SharedState<TriColor>,
        press_at_ms: Option<u32>,
        leds: RecordingIndicators,
    }

    impl IndicatorDriver for PressBeforeWrite<'_> {
        fn set_output(&mut self, channel: Channel, level: bool) {
            if let Some(now_ms) = self.press_at_ms.take() {
                let state = self.state;
                InputCapture::new(state)
                    .on_edge(ButtonId::A, now_ms, &mut self.leds)
                    .unwrap();
            }
            self.leds.set_output(channel, level);
        }
    }

    fn run<S: IndicatorScheme>(
        blink: &mut BlinkScheduler<S>,
        mode: S::Mode,
        leds: &mut RecordingIndicators,
        from_ms: u32,
        to_ms: u32,
    ) {
        let mut t = from_ms;
        while t <= to_ms {
            blink.tick(t, mode, leds);
            t += 10;
        }
    }

    #[test]
    fn test_red_blinks_every_200ms() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();

        assert!(!blink.tick(190, TriColorMode::Red, &mut leds));
        assert!(blink.tick(200, TriColorMode::Red, &mut leds));
        assert!(leds.levels[RED.index()]);
        assert!(!blink.tick(390, TriColorMode::Red, &mut leds));
        assert!(blink.tick(400, TriColorMode::Red, &mut leds));
        assert!(!leds.levels[RED.index()]);
    }

    #[test]
    fn test_red_rate_over_one_second() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();

        run(&mut blink, TriColorMode::Red, &mut leds, 0, 1000);
        assert_eq!(leds.toggles, [5, 0, 0]);
    }

    #[test]
    fn test_green_rate_over_one_second() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();

        // 10 ms ticks land on 340, 680 and 1020
        run(&mut blink, TriColorMode::Green, &mut leds, 0, 1020);
        assert_eq!(leds.toggles, [0, 3, 0]);
        assert_eq!(leds.levels[GREEN.index()], blink.phase());
    }

    #[test]
    fn test_blue_only_in_blue_mode() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();

        run(&mut blink, TriColorMode::Blue, &mut leds, 0, 700);
        assert_eq!(leds.toggles[GREEN.index()], 0);
        assert_eq!(leds.toggles[BLUE.index()], 2);
    }

    #[test]
    fn test_lanes_keep_their_own_timers() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();

        // Red lane fires at 200 and 400
        run(&mut blink, TriColorMode::Red, &mut leds, 0, 450);
        // The green lane was never used, so it is still anchored at 0
        assert!(blink.tick(460, TriColorMode::Green, &mut leds));
        assert_eq!(leds.toggles[GREEN.index()], 1);
        // And now waits a full 333 ms
        assert!(!blink.tick(790, TriColorMode::Green, &mut leds));
        assert!(blink.tick(793, TriColorMode::Green, &mut leds));
    }

    #[test]
    fn test_single_led_idle_is_dark() {
        let mut blink = BlinkScheduler::<SingleLed>::new();
        let mut leds = RecordingIndicators::new();

        run(&mut blink, SingleLedMode::Idle, &mut leds, 0, 1000);
        assert_eq!(leds.toggles, [0, 0, 0]);

        run(&mut blink, SingleLedMode::Active, &mut leds, 1010, 2000);
        // 1010, 1210, 1410, 1610, 1810
        assert_eq!(leds.toggles[0], 5);
    }

    #[test]
    fn test_press_between_mode_read_and_write() {
        let state: SharedState<TriColor> = SharedState::new();
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut driver = PressBeforeWrite {
            state: &state,
            press_at_ms: Some(1000),
            leds: RecordingIndicators::new(),
        };

        // Mode is read as Red, then A is pressed before red is driven on
        let mode = state.mode();
        assert!(blink.tick(1000, mode, &mut driver));
        assert_eq!(state.mode(), TriColorMode::Green);
        assert!(driver.leds.levels[RED.index()]);

        let mut t = 1010;
        while t <= 5000 {
            blink.tick(t, state.mode(), &mut driver);
            t += 10;
        }
        assert!(!driver.leds.levels[RED.index()]);
        assert!(!driver.leds.levels[BLUE.index()]);
        assert!(driver.leds.toggles[GREEN.index()] > 0);
    }

    #[test]
    fn test_idle_channels_forced_off_when_lane_fires() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();
        leds.levels = [true, true, false];

        assert!(blink.tick(340, TriColorMode::Blue, &mut leds));
        assert_eq!(leds.levels, [false, false, true]);
    }

    #[test]
    fn test_timer_wrap() {
        let mut blink = BlinkScheduler::<TriColor>::new();
        let mut leds = RecordingIndicators::new();

        assert!(blink.tick(u32::MAX - 50, TriColorMode::Red, &mut leds));
        assert!(!blink.tick(100, TriColorMode::Red, &mut leds));
        assert!(blink.tick(150, TriColorMode::Red, &mut leds));
    }
}
