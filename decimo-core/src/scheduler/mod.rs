//! Time-sliced main loop work
//!
//! Everything here is polled from the main loop with the current time and
//! does O(1) work per call. Nothing sleeps.

pub mod blink;
pub mod rate;

pub use blink::BlinkScheduler;
pub use rate::{RateReport, RateReporter};
