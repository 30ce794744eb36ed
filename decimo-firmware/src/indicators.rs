//! Indicator LEDs shared by both executors
//!
//! Input capture drives the post-press level from the interrupt executor
//! while the main loop blinks from thread mode. Each `set_output` takes
//! the lock for a single pin write.

use core::cell::RefCell;

use decimo_core::traits::{Channel, IndicatorDriver};
use decimo_drivers::PinIndicators;
use decimo_hal_rp2040::LedPin;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

#[cfg(not(feature = "single-indicator"))]
pub type Scheme = decimo_core::indicator::TriColor;
#[cfg(not(feature = "single-indicator"))]
pub const NUM_CHANNELS: usize = 3;

#[cfg(feature = "single-indicator")]
pub type Scheme = decimo_core::indicator::SingleLed;
#[cfg(feature = "single-indicator")]
pub const NUM_CHANNELS: usize = 1;

#[cfg(not(any(feature = "rgb-indicator", feature = "single-indicator")))]
compile_error!("enable either the `rgb-indicator` or the `single-indicator` feature");

pub type Bank = PinIndicators<LedPin<'static>, NUM_CHANNELS>;

static INDICATORS: Mutex<CriticalSectionRawMutex, RefCell<Option<Bank>>> =
    Mutex::new(RefCell::new(None));

/// Hand the LED bank over to the shared slot
pub fn install(bank: Bank) {
    INDICATORS.lock(|cell| {
        cell.replace(Some(bank));
    });
}

/// Handle to the shared LED bank
///
/// Writes before [`install`] are dropped.
#[derive(Clone, Copy)]
pub struct SharedIndicators;

impl IndicatorDriver for SharedIndicators {
    fn set_output(&mut self, channel: Channel, level: bool) {
        INDICATORS.lock(|cell| {
            if let Some(bank) = cell.borrow_mut().as_mut() {
                bank.set_output(channel, level);
            }
        });
    }
}
