//! Input capture task
//!
//! Waits for falling edges on both buttons and feeds them to input
//! capture. Runs on the high-priority interrupt executor, so an accepted
//! press is applied even while the main loop is mid-tick.

use defmt::*;
use embassy_rp::gpio::Input;

use decimo_core::input::InputCapture;
use decimo_drivers::next_edge;

use super::now_ms;
use crate::indicators::SharedIndicators;
use crate::state::APP_STATE;

#[embassy_executor::task]
pub async fn input_task(mut button_a: Input<'static>, mut button_b: Input<'static>) {
    info!("Input task started");

    let capture = InputCapture::new(&APP_STATE);
    let mut indicators = SharedIndicators;

    loop {
        let button = match next_edge(&mut button_a, &mut button_b).await {
            Ok(button) => button,
            Err(never) => match never {},
        };

        // Edges inside the debounce window are dropped silently
        if let Ok(press) = capture.on_edge(button, now_ms(), &mut indicators) {
            info!("{}", press);
        }
    }
}
