//! Decimo - Button Counter Firmware
//!
//! Main firmware binary for RP2040-based boards. Button A counts up,
//! button B counts down, the digit is shown on a 5x5 WS2812 matrix and
//! the status LED blinks to show which button was pressed last.
//!
//! Named after the Latin "decimus" (tenth) - the counter only ever
//! walks the ten digits 0-9.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use {defmt_rtt as _, panic_probe as _};

use decimo_drivers::PinIndicators;
use decimo_hal_rp2040::{button_input, LedPin, PioPixelSink};

mod board;
mod indicators;
mod state;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Executor for input capture, preempts the thread-mode main loop
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Decimo firmware starting...");

    // Initialize RP2040 peripherals
    let board = board::Board::new(embassy_rp::init(Default::default()));
    info!("Peripherals initialized");

    // Indicator LEDs, all off until the first blink or press
    #[cfg(not(feature = "single-indicator"))]
    {
        indicators::install(PinIndicators::new_active_high([
            LedPin::new(board.led_red),
            LedPin::new(board.led_green),
            LedPin::new(board.led_blue),
        ]));
        info!(
            "RGB indicator initialized: R GPIO{}, G GPIO{}, B GPIO{}",
            board::LED_RED_GPIO,
            board::LED_GREEN_GPIO,
            board::LED_BLUE_GPIO
        );
    }
    #[cfg(feature = "single-indicator")]
    {
        indicators::install(PinIndicators::new_active_high([LedPin::new(board.led_red)]));
        info!("Status LED initialized on GPIO{}", board::LED_RED_GPIO);
    }

    // WS2812 matrix on PIO0 SM0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(board.pio, Irqs);
    let matrix = PioPixelSink::new(&mut common, sm0, board.matrix).unwrap();
    info!("Matrix initialized on GPIO{}", board::MATRIX_GPIO);

    // Buttons to ground with pull-ups
    let button_a = button_input(board.button_a);
    let button_b = button_input(board.button_b);
    info!(
        "Buttons initialized: A on GPIO{}, B on GPIO{}",
        board::BUTTON_A_GPIO,
        board::BUTTON_B_GPIO
    );

    // Input capture on the high-priority executor
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner_high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner_high
        .spawn(tasks::input_task(button_a, button_b))
        .unwrap();

    // Main loop on the thread executor
    spawner.spawn(tasks::main_loop_task(matrix)).unwrap();

    info!("All tasks spawned, firmware running");

    // Keeps the PIO common block alive; nothing else to do here
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
