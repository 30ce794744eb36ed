//! Indicator schemes
//!
//! A board has either a tri-colour LED or a single status LED. Both are
//! expressed as an [`IndicatorScheme`], chosen at build time, so input
//! capture and the blink scheduler are written once.

pub mod single;
pub mod tricolor;

use core::fmt::Debug;

use crate::state::ButtonId;
use crate::traits::{Channel, IndicatorDriver};

pub use single::{SingleLed, SingleLedMode};
pub use tricolor::{TriColor, TriColorMode};

/// Maximum number of independent blink lanes a scheme may declare
pub const MAX_BLINK_LANES: usize = 2;

/// How the status indicator reflects the last button pressed
///
/// The mode is stored in shared state as a raw `u8`, so a scheme must
/// round-trip its modes through [`encode`](Self::encode) and
/// [`decode`](Self::decode). Unknown raw values decode to the initial
/// mode.
pub trait IndicatorScheme {
    /// Indicator modes
    type Mode: Copy + Eq + Debug;

    /// Raw encoding of the power-on mode
    const INITIAL_RAW: u8;

    /// Every channel the scheme drives
    const CHANNELS: &'static [Channel];

    /// Period of each blink lane, at most [`MAX_BLINK_LANES`]
    const BLINK_PERIODS_MS: &'static [u32];

    /// Mode entered when `button` is pressed
    fn mode_for(button: ButtonId) -> Self::Mode;

    fn encode(mode: Self::Mode) -> u8;

    fn decode(raw: u8) -> Self::Mode;

    /// Drive the immediate post-press level for `mode`
    ///
    /// Runs in interrupt context: a handful of pin writes, nothing more.
    fn apply_press<D: IndicatorDriver>(mode: Self::Mode, driver: &mut D);

    /// Channels toggled by `lane` while in `mode`
    ///
    /// An empty slice means the lane is idle in this mode.
    fn blink_channels(mode: Self::Mode, lane: usize) -> &'static [Channel];

    /// Power-on mode
    fn initial() -> Self::Mode {
        Self::decode(Self::INITIAL_RAW)
    }
}
