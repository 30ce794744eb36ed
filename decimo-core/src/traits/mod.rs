//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod indicator;

pub use decimo_hal::PixelSink;
pub use indicator::{Channel, IndicatorDriver};
