//! Embassy async tasks
//!
//! The input task runs on the interrupt executor, the main loop on the
//! thread executor. They share state only through `APP_STATE` and the
//! indicator bank.

pub mod input;
pub mod main_loop;

pub use input::input_task;
pub use main_loop::main_loop_task;

use embassy_time::Instant;

/// Milliseconds since boot, wrapping at `u32::MAX`
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
