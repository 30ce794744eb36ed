//! State shared between input capture and the main loop
//!
//! Written only by the input task, read only by the main loop task.

use decimo_core::state::SharedState;

use crate::indicators::Scheme;

pub static APP_STATE: SharedState<Scheme> = SharedState::new();
