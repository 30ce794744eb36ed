//! PIO clock math for WS2812 output
//!
//! The WS2812 program spends a fixed number of PIO cycles on every bit,
//! so the bit rate is set entirely by the state machine clock divider:
//!
//! ```text
//! divider = SYS_CLK / (bit_rate * cycles_per_bit)
//! ```
//!
//! The divider is 16.8 fixed point. At the default 125 MHz system clock,
//! 800 kbit/s at 10 cycles per bit gives 15.625.

use fixed::types::U24F8;

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 data rate
pub const WS2812_BIT_RATE_HZ: u32 = 800_000;

/// PIO cycles per WS2812 bit
///
/// 3 cycles low lead-in, 2 cycles high, then 5 cycles carrying the bit.
pub const WS2812_CYCLES_PER_BIT: u32 = 10;

/// Largest integer part the divider register accepts
const MAX_DIVIDER_INT: u64 = 0xFFFF;

/// Requested bit rate cannot be produced by the clock divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Bit rate or cycles per bit is zero
    ZeroRate,
    /// Bit rate is faster than the system clock allows (divider < 1)
    TooFast,
    /// Bit rate is slower than the largest divider allows
    TooSlow,
}

/// Calculate the clock divider for a target bit rate
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(
    sys_clk_hz: u32,
    bit_rate_hz: u32,
    cycles_per_bit: u32,
) -> Result<(u16, u8), ClockError> {
    let pio_hz = bit_rate_hz as u64 * cycles_per_bit as u64;
    if pio_hz == 0 {
        return Err(ClockError::ZeroRate);
    }

    // Multiply by 256 first for 8 fractional bits
    let divider_x256 = (sys_clk_hz as u64 * 256) / pio_hz;
    let int_part = divider_x256 / 256;
    let frac_part = divider_x256 % 256;

    if int_part == 0 {
        return Err(ClockError::TooFast);
    }
    if int_part > MAX_DIVIDER_INT {
        return Err(ClockError::TooSlow);
    }

    Ok((int_part as u16, frac_part as u8))
}

/// Clock divider for WS2812 output at the default system clock
pub fn ws2812_clock_divider() -> Result<U24F8, ClockError> {
    let (int_div, frac_div) =
        calc_clock_divider(SYS_CLK_HZ, WS2812_BIT_RATE_HZ, WS2812_CYCLES_PER_BIT)?;

    // Integer in upper 24 bits, fractional in lower 8 bits
    let divider_bits = ((int_div as u32) << 8) | (frac_div as u32);
    Ok(U24F8::from_bits(divider_bits))
}
