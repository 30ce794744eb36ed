//! Main loop controller
//!
//! One [`Controller::tick`] per main loop iteration: redraw the digit if
//! it changed, advance the blink lanes, then check the rate window. The
//! controller only reads shared state; all writes come from input
//! capture.

use decimo_hal::PixelSink;

use crate::indicator::IndicatorScheme;
use crate::render::RenderDriver;
use crate::scheduler::{BlinkScheduler, RateReport, RateReporter};
use crate::state::SharedState;
use crate::traits::IndicatorDriver;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Digit drawn this tick, if a frame was sent
    pub rendered: Option<u8>,
    /// At least one indicator output toggled
    pub blinked: bool,
    /// Rate report for the window that just closed
    pub report: Option<RateReport>,
}

/// Main-loop side of the firmware
pub struct Controller<S: IndicatorScheme> {
    render: RenderDriver,
    blink: BlinkScheduler<S>,
    rate: RateReporter,
}

impl<S: IndicatorScheme> Default for Controller<S> {
    fn default() -> Self {
        Self::new(RenderDriver::default(), RateReporter::default())
    }
}

impl<S: IndicatorScheme> Controller<S> {
    pub fn new(render: RenderDriver, rate: RateReporter) -> Self {
        Self {
            render,
            blink: BlinkScheduler::new(),
            rate,
        }
    }

    pub fn render(&self) -> &RenderDriver {
        &self.render
    }

    /// Run one main loop iteration
    pub fn tick<P, D>(
        &mut self,
        now_ms: u32,
        state: &SharedState<S>,
        sink: &mut P,
        indicators: &mut D,
    ) -> TickOutcome
    where
        P: PixelSink,
        D: IndicatorDriver,
    {
        let digit = state.digit();
        let rendered = self.render.tick(digit, sink).then_some(digit);
        let blinked = self.blink.tick(now_ms, state.mode(), indicators);
        let report = self.rate.tick(now_ms, state.press_counts());

        TickOutcome {
            rendered,
            blinked,
            report,
        }
    }
}
