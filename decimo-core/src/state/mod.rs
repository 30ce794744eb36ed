//! Counter and mode state
//!
//! `SharedState` is the one place where interrupt-context input capture
//! and the main loop meet. Input capture is its only writer.

pub mod digit;
pub mod events;
pub mod shared;

pub use digit::{Digit, InvalidDigit};
pub use events::{ButtonId, Press};
pub use shared::{PressCounts, SharedState};
