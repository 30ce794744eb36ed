//! Status indicator outputs

/// One indicator output line
///
/// Channels are plain indices into the driver's pin bank; each
/// [`IndicatorScheme`](crate::indicator::IndicatorScheme) names the ones
/// it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(pub u8);

impl Channel {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Trait for indicator output control
///
/// Called from both interrupt context (immediate post-press level) and
/// the main loop (blinking), so every call must be a single bounded
/// write. `level` is logical: `true` means lit.
pub trait IndicatorDriver {
    /// Drive one channel
    fn set_output(&mut self, channel: Channel, level: bool);
}

impl<T: IndicatorDriver + ?Sized> IndicatorDriver for &mut T {
    fn set_output(&mut self, channel: Channel, level: bool) {
        (**self).set_output(channel, level);
    }
}
