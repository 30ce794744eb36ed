//! Press-rate telemetry
//!
//! Once per window, reports how many presses each button received since
//! the previous report. The window is anchored on its own timestamp and
//! does not line up with the blink lanes.

use core::fmt;

use crate::config::RATE_WINDOW_MS;
use crate::state::PressCounts;

/// Presses seen in one reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateReport {
    /// Presses per window (per second with the default window)
    pub presses: PressCounts,
}

impl fmt::Display for RateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Presses per second -> A: {}, B: {}",
            self.presses.a, self.presses.b
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RateReport {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Presses per second -> A: {=u32}, B: {=u32}",
            self.presses.a,
            self.presses.b
        )
    }
}

/// Windowed press counter
#[derive(Debug, Clone)]
pub struct RateReporter {
    window_ms: u32,
    anchor_ms: u32,
    snapshot: PressCounts,
}

impl Default for RateReporter {
    fn default() -> Self {
        Self::new(RATE_WINDOW_MS)
    }
}

impl RateReporter {
    /// Reporter anchored at t = 0 with zero counts
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            anchor_ms: 0,
            snapshot: PressCounts { a: 0, b: 0 },
        }
    }

    /// Emit a report if the window has elapsed
    ///
    /// `counts` are the running totals from shared state. The next window
    /// is anchored at `now_ms`, not at the previous anchor plus the window.
    pub fn tick(&mut self, now_ms: u32, counts: PressCounts) -> Option<RateReport> {
        if now_ms.wrapping_sub(self.anchor_ms) < self.window_ms {
            return None;
        }

        let report = RateReport {
            presses: counts.since(&self.snapshot),
        };
        self.snapshot = counts;
        self.anchor_ms = now_ms;
        Some(report)
    }
}
