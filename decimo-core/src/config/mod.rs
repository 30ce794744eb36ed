//! Compile-time configuration
//!
//! Every tunable of the firmware lives here. There is no runtime
//! configuration: change a constant and rebuild.

pub mod display;
pub mod timing;

pub use display::*;
pub use timing::*;
