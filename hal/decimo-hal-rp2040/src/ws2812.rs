//! PIO-based WS2812 pixel output
//!
//! Drives a WS2812 chain from one PIO state machine. Each word pushed to
//! the TX FIFO carries one pixel in its top 24 bits (green, red, blue);
//! the state machine shifts them out MSB first with autopull.

use decimo_hal::{PixelSink, PixelWord};
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;

use crate::pio::{ws2812_clock_divider, ClockError};

/// WS2812 chain on a PIO state machine
pub struct PioPixelSink<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioPixelSink<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin wired to the chain's data input
    pub fn new<P: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, P>,
    ) -> Result<Self, ClockError> {
        // Each bit: 3 cycles low, 2 cycles high, then 5 cycles at the bit
        // value. The line is held low between words.
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]",
            "    jmp !x do_zero  side 1 [1]",
            "do_one:",
            "    jmp bitloop     side 1 [4]",
            "do_zero:",
            "    nop             side 0 [4]",
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let out_pin = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);
        cfg.clock_divider = ws2812_clock_divider()?;
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Ok(Self { sm })
    }
}

impl<PIO: Instance, const SM: usize> PixelSink for PioPixelSink<'_, PIO, SM> {
    fn push(&mut self, word: PixelWord) {
        // The joined FIFO is 8 deep; a 25-pixel frame drains in ~750 us
        while !self.sm.tx().try_push(word) {}
    }
}
