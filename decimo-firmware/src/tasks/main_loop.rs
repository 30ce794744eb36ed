//! Main loop task
//!
//! Fixed 10 ms tick: redraw the matrix on digit change, blink the status
//! indicator, log the press rate once per second.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_time::{Duration, Ticker};

use decimo_core::config::TICK_INTERVAL_MS;
use decimo_core::Controller;
use decimo_hal_rp2040::PioPixelSink;

use super::now_ms;
use crate::indicators::{Scheme, SharedIndicators};
use crate::state::APP_STATE;

#[embassy_executor::task]
pub async fn main_loop_task(mut matrix: PioPixelSink<'static, PIO0, 0>) {
    info!("Main loop task started");

    let mut controller: Controller<Scheme> = Controller::default();
    let mut indicators = SharedIndicators;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        let outcome = controller.tick(now_ms(), &APP_STATE, &mut matrix, &mut indicators);

        if let Some(digit) = outcome.rendered {
            debug!("Rendered digit {}", digit);
        }
        if let Some(report) = outcome.report {
            info!("{}", report);
        }

        ticker.next().await;
    }
}
