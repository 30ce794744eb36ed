//! Digit rendering
//!
//! Turns the current digit into a 25-word frame for the pixel sink:
//! font lookup, per-pixel colour encoding and change-triggered emission.

pub mod color;
pub mod driver;
pub mod font;

pub use color::{encode, Color, Intensity};
pub use driver::RenderDriver;
pub use font::{pattern_for, Pattern};
