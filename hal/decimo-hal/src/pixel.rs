//! Addressable LED transport
//!
//! WS2812-style LEDs take one colour word per pixel, shifted out MSB
//! first. The sink owns the physical timing; callers only hand it words
//! in frame order.

/// One packed pixel colour
///
/// Layout is `G << 24 | R << 16 | B << 8`, low byte unused. The transport
/// shifts out the top 24 bits, which is the GRB order WS2812 expects.
pub type PixelWord = u32;

/// Serial pixel transport
pub trait PixelSink {
    /// Queue one pixel word for transmission
    ///
    /// May block briefly while the hardware transmit queue drains, but
    /// always completes in bounded time.
    fn push(&mut self, word: PixelWord);
}
