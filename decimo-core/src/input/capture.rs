//! Debounced edge capture
//!
//! [`InputCapture::on_edge`] is called from interrupt context for every
//! falling edge on either button. It is the only code that writes
//! [`SharedState`].
//!
//! The debounce gate is global: after an accepted press, edges from
//! *both* buttons are dropped for [`DEBOUNCE_WINDOW_MS`]. Dropped edges
//! are not queued.

use core::fmt;

use crate::config::DEBOUNCE_WINDOW_MS;
use crate::indicator::IndicatorScheme;
use crate::state::{ButtonId, Digit, Press, SharedState};
use crate::traits::IndicatorDriver;

/// Edge arrived inside the debounce window and was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpuriousEdge {
    /// Milliseconds since the last accepted edge
    pub since_last_ms: u32,
}

impl fmt::Display for SpuriousEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge {} ms after last press", self.since_last_ms)
    }
}

/// Interrupt-side writer of the shared state
pub struct InputCapture<'a, S: IndicatorScheme> {
    state: &'a SharedState<S>,
}

impl<'a, S: IndicatorScheme> InputCapture<'a, S> {
    pub const fn new(state: &'a SharedState<S>) -> Self {
        Self { state }
    }

    /// Handle one falling edge
    ///
    /// Bounded time, no allocation, no blocking. On acceptance the digit,
    /// mode and press count are updated and the indicator is driven to
    /// its post-press level before returning.
    pub fn on_edge<D: IndicatorDriver>(
        &self,
        button: ButtonId,
        now_ms: u32,
        indicators: &mut D,
    ) -> Result<Press, SpuriousEdge> {
        let since_last_ms = now_ms.wrapping_sub(self.state.last_event_ms());
        if since_last_ms < DEBOUNCE_WINDOW_MS {
            return Err(SpuriousEdge { since_last_ms });
        }
        self.state.set_last_event_ms(now_ms);

        // Only this function stores the digit, always from a valid Digit
        let current = Digit::new(self.state.digit()).unwrap_or(Digit::ZERO);
        let digit = match button {
            ButtonId::A => current.increment(),
            ButtonId::B => current.decrement(),
        };
        self.state.set_digit(digit);

        let mode = S::mode_for(button);
        self.state.set_mode(mode);
        let count = self.state.bump_press_count(button);

        S::apply_press(mode, indicators);

        Ok(Press {
            button,
            digit,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::{SingleLed, SingleLedMode, TriColor, TriColorMode};
    use crate::state::PressCounts;
    use crate::traits::Channel;
    use proptest::prelude::*;

    /// Indicator driver that only counts writes
    struct CountingIndicators {
        writes: usize,
        last: Option<(Channel, bool)>,
    }

    impl CountingIndicators {
        fn new() -> Self {
            Self {
                writes: 0,
                last: None,
            }
        }
    }

    impl IndicatorDriver for CountingIndicators {
        fn set_output(&mut self, channel: Channel, level: bool) {
            self.writes += 1;
            self.last = Some((channel, level));
        }
    }

    // Start well past the boot-time window
    const T0: u32 = 1_000;

    #[test]
    fn test_nine_presses_reach_nine_then_wrap() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        for i in 0..9 {
            let press = capture.on_edge(ButtonId::A, T0 + i * 60, &mut leds).unwrap();
            assert_eq!(press.digit.value(), (i + 1) as u8);
        }
        assert_eq!(state.digit(), 9);

        let press = capture.on_edge(ButtonId::A, T0 + 9 * 60, &mut leds).unwrap();
        assert_eq!(press.digit, Digit::ZERO);
        assert_eq!(press.count, 10);
        assert_eq!(state.digit(), 0);
    }

    #[test]
    fn test_b_from_zero_wraps_to_nine() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        let press = capture.on_edge(ButtonId::B, T0, &mut leds).unwrap();
        assert_eq!(press.digit, Digit::MAX);
        assert_eq!(state.digit(), 9);
        assert_eq!(state.mode(), TriColorMode::Blue);
        assert_eq!(state.press_counts(), PressCounts { a: 0, b: 1 });
    }

    #[test]
    fn test_bounce_inside_window_is_dropped() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        assert!(capture.on_edge(ButtonId::A, T0, &mut leds).is_ok());
        let writes = leds.writes;
        assert_eq!(
            capture.on_edge(ButtonId::A, T0 + 10, &mut leds),
            Err(SpuriousEdge { since_last_ms: 10 })
        );

        assert_eq!(state.digit(), 1);
        assert_eq!(state.press_count(ButtonId::A), 1);
        assert_eq!(state.last_event_ms(), T0);
        assert_eq!(leds.writes, writes);
    }

    #[test]
    fn test_presses_outside_window_both_apply() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        assert!(capture.on_edge(ButtonId::A, T0, &mut leds).is_ok());
        assert!(capture.on_edge(ButtonId::A, T0 + 60, &mut leds).is_ok());
        assert_eq!(state.digit(), 2);
        assert_eq!(state.press_count(ButtonId::A), 2);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        capture.on_edge(ButtonId::A, T0, &mut leds).unwrap();
        assert!(capture.on_edge(ButtonId::A, T0 + 49, &mut leds).is_err());
        assert!(capture.on_edge(ButtonId::A, T0 + 50, &mut leds).is_ok());
    }

    #[test]
    fn test_gate_is_shared_across_buttons() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        capture.on_edge(ButtonId::A, T0, &mut leds).unwrap();
        assert!(capture.on_edge(ButtonId::B, T0 + 10, &mut leds).is_err());

        assert_eq!(state.digit(), 1);
        assert_eq!(state.mode(), TriColorMode::Green);
        assert_eq!(state.press_counts(), PressCounts { a: 1, b: 0 });
    }

    #[test]
    fn test_edges_right_after_boot_are_dropped() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        assert!(capture.on_edge(ButtonId::A, 20, &mut leds).is_err());
        assert!(capture.on_edge(ButtonId::A, 50, &mut leds).is_ok());
    }

    #[test]
    fn test_timer_wrap() {
        let state: SharedState<TriColor> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        capture.on_edge(ButtonId::A, u32::MAX - 20, &mut leds).unwrap();
        // 30 ms later across the wrap
        assert!(capture.on_edge(ButtonId::A, 9, &mut leds).is_err());
        // 60 ms later across the wrap
        assert!(capture.on_edge(ButtonId::A, 39, &mut leds).is_ok());
    }

    #[test]
    fn test_single_led_press_turns_on() {
        let state: SharedState<SingleLed> = SharedState::new();
        let capture = InputCapture::new(&state);
        let mut leds = CountingIndicators::new();

        capture.on_edge(ButtonId::B, T0, &mut leds).unwrap();
        assert_eq!(state.mode(), SingleLedMode::Active);
        assert_eq!(leds.last, Some((Channel(0), true)));
    }

    proptest! {
        #[test]
        fn prop_digit_tracks_net_presses(presses in proptest::collection::vec(any::<bool>(), 0..64)) {
            let state: SharedState<TriColor> = SharedState::new();
            let capture = InputCapture::new(&state);
            let mut leds = CountingIndicators::new();

            let mut net: i32 = 0;
            for (i, &is_a) in presses.iter().enumerate() {
                let button = if is_a { ButtonId::A } else { ButtonId::B };
                capture.on_edge(button, T0 + i as u32 * DEBOUNCE_WINDOW_MS, &mut leds).unwrap();
                net += if is_a { 1 } else { -1 };
            }

            prop_assert_eq!(state.digit() as i32, net.rem_euclid(10));
            let a = presses.iter().filter(|&&p| p).count() as u32;
            prop_assert_eq!(state.press_counts(), PressCounts { a, b: presses.len() as u32 - a });
        }

        #[test]
        fn prop_bounces_never_count(gaps in proptest::collection::vec(0u32..DEBOUNCE_WINDOW_MS, 1..16)) {
            let state: SharedState<TriColor> = SharedState::new();
            let capture = InputCapture::new(&state);
            let mut leds = CountingIndicators::new();

            capture.on_edge(ButtonId::A, T0, &mut leds).unwrap();
            // Every bounce is measured from the accepted edge, not the previous bounce
            let mut t = T0;
            for gap in gaps {
                t = (T0 + gap).max(t);
                prop_assert!(capture.on_edge(ButtonId::B, t, &mut leds).is_err());
            }
            prop_assert_eq!(state.digit(), 1);
        }
    }
}
