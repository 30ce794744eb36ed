//! Decimo Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that chip-specific HALs
//! implement. The core logic and drivers only ever see these traits, which
//! keeps them testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (decimo-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  decimo-core / decimo-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  decimo-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  decimo-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs
//! - [`pixel::PixelSink`] - Serial addressable-LED transport

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pixel;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use pixel::{PixelSink, PixelWord};
