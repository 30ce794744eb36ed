//! Board-agnostic core logic for the decimo button counter
//!
//! Everything here runs on the host as well as on the target:
//!
//! - Digit state and the lock-free state shared between input capture
//!   and the main loop
//! - Debounced input capture
//! - Digit font, pixel encoding and change-triggered rendering
//! - Indicator schemes (tri-colour or single status LED) and blink lanes
//! - Press-rate telemetry
//! - The main loop controller tying the above together
//!
//! Hardware is reached only through the traits in [`traits`] and the
//! pixel sink from `decimo-hal`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod indicator;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use controller::{Controller, TickOutcome};
