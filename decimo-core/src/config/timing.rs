//! Timing constants
//!
//! All times are milliseconds since boot, carried as `u32` and compared
//! with wrapping arithmetic.

/// Minimum spacing between two accepted button edges
///
/// The gate is global: an accepted press on either button blocks edges
/// from both buttons for this long.
pub const DEBOUNCE_WINDOW_MS: u32 = 50;

/// Red channel blink period (5 toggles per second)
pub const RED_BLINK_PERIOD_MS: u32 = 200;

/// Green/blue channel blink period (3 toggles per second)
pub const RGB_BLINK_PERIOD_MS: u32 = 333;

/// Single status LED blink period
pub const STATUS_BLINK_PERIOD_MS: u32 = 200;

/// Main loop tick interval
pub const TICK_INTERVAL_MS: u32 = 10;

/// Press-rate reporting window
pub const RATE_WINDOW_MS: u32 = 1000;
