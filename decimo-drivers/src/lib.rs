//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in decimo-core,
//! written against the `decimo-hal` and `embedded-hal-async` pin traits
//! so they run on any chip and on the host:
//!
//! - Indicator channels over GPIO outputs (active-high or active-low)
//! - Falling-edge capture across the two buttons

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod indicator;

pub use button::next_edge;
pub use indicator::PinIndicators;
