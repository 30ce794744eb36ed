//! Button input capture
//!
//! Turns raw falling edges into accepted presses.

pub mod capture;

pub use capture::{InputCapture, SpuriousEdge};
