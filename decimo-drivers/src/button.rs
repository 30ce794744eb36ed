//! Button edge capture
//!
//! Buttons are wired to ground with pull-ups, so a press is a falling
//! edge. Debouncing is not done here; every edge is handed to input
//! capture, which applies the debounce gate.

use decimo_core::state::ButtonId;
use embassy_futures::select::{select, Either};
use embedded_hal_async::digital::Wait;

/// Wait for the next falling edge on either button
///
/// If both edges are pending, button A is reported first and B's edge is
/// picked up by the next call.
pub async fn next_edge<A, B, E>(a: &mut A, b: &mut B) -> Result<ButtonId, E>
where
    A: Wait<Error = E>,
    B: Wait<Error = E>,
{
    match select(a.wait_for_falling_edge(), b.wait_for_falling_edge()).await {
        Either::First(result) => result.map(|()| ButtonId::A),
        Either::Second(result) => result.map(|()| ButtonId::B),
    }
}
