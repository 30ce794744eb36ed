//! State shared between input capture and the main loop
//!
//! Every field is its own word-sized atomic. Input capture (interrupt
//! priority) is the only writer; the main loop only reads. No reader ever
//! needs two fields to agree with each other, so there are no multi-field
//! critical sections and no locks.
//!
//! The target is single-core, so `Relaxed` ordering is sufficient: a
//! preempting writer finishes before the reader resumes.

use core::marker::PhantomData;

use portable_atomic::{AtomicU32, AtomicU8, Ordering};

use super::digit::Digit;
use super::events::ButtonId;
use crate::indicator::IndicatorScheme;

/// Snapshot of the per-button press counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressCounts {
    pub a: u32,
    pub b: u32,
}

impl PressCounts {
    /// Presses since `earlier`, tolerating counter wrap
    pub fn since(&self, earlier: &PressCounts) -> PressCounts {
        PressCounts {
            a: self.a.wrapping_sub(earlier.a),
            b: self.b.wrapping_sub(earlier.b),
        }
    }
}

/// Process-wide application state
///
/// Lives in a `static` for the lifetime of the firmware. The indicator
/// mode is stored in its raw `u8` encoding and decoded through `S`.
pub struct SharedState<S: IndicatorScheme> {
    digit: AtomicU8,
    mode: AtomicU8,
    last_event_ms: AtomicU32,
    press_counts: [AtomicU32; 2],
    _scheme: PhantomData<S>,
}

impl<S: IndicatorScheme> Default for SharedState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IndicatorScheme> SharedState<S> {
    /// Power-on state: digit 0, scheme's initial mode, no presses
    pub const fn new() -> Self {
        Self {
            digit: AtomicU8::new(0),
            mode: AtomicU8::new(S::INITIAL_RAW),
            last_event_ms: AtomicU32::new(0),
            press_counts: [AtomicU32::new(0), AtomicU32::new(0)],
            _scheme: PhantomData,
        }
    }

    /// Raw digit as stored
    ///
    /// Only input capture writes this and it only stores valid digits.
    pub fn digit(&self) -> u8 {
        self.digit.load(Ordering::Relaxed)
    }

    /// Current indicator mode
    pub fn mode(&self) -> S::Mode {
        S::decode(self.mode.load(Ordering::Relaxed))
    }

    /// Timestamp of the last accepted edge
    pub fn last_event_ms(&self) -> u32 {
        self.last_event_ms.load(Ordering::Relaxed)
    }

    /// Accepted presses of one button since boot
    pub fn press_count(&self, button: ButtonId) -> u32 {
        self.press_counts[button.index()].load(Ordering::Relaxed)
    }

    /// Both counters, each read atomically on its own
    pub fn press_counts(&self) -> PressCounts {
        PressCounts {
            a: self.press_count(ButtonId::A),
            b: self.press_count(ButtonId::B),
        }
    }

    pub(crate) fn set_last_event_ms(&self, now_ms: u32) {
        self.last_event_ms.store(now_ms, Ordering::Relaxed);
    }

    pub(crate) fn set_digit(&self, digit: Digit) {
        self.digit.store(digit.value(), Ordering::Relaxed);
    }

    pub(crate) fn set_mode(&self, mode: S::Mode) {
        self.mode.store(S::encode(mode), Ordering::Relaxed);
    }

    /// Increment a press counter, returning the new count
    ///
    /// Plain load/store is enough with a single writer and avoids needing
    /// CAS on thumbv6m.
    pub(crate) fn bump_press_count(&self, button: ButtonId) -> u32 {
        let counter = &self.press_counts[button.index()];
        let count = counter.load(Ordering::Relaxed).wrapping_add(1);
        counter.store(count, Ordering::Relaxed);
        count
    }
}
