//! Value to frequency mapping
//!
//! Linear interpolation from the permutation's value range onto an audible
//! band. Integer arithmetic truncates, matching `int()` on the float formula.

use crate::config::ToneConfig;

/// Lower end of the tone band in Hz
pub const MIN_FREQUENCY: u32 = 2000;

/// Upper end of the tone band in Hz
pub const MAX_FREQUENCY: u32 = 8000;

/// Maps permutation values onto tone frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneMapper {
    min_value: u32,
    max_value: u32,
    min_frequency: u32,
    max_frequency: u32,
}

impl ToneMapper {
    /// Mapper for values `1..=max_value` onto the default 2000..8000 Hz band
    pub fn new(max_value: u32) -> Self {
        Self::with_band(1, max_value, MIN_FREQUENCY, MAX_FREQUENCY)
    }

    /// Mapper for values `1..=max_value` using the configured band
    pub fn from_config(max_value: u32, config: &ToneConfig) -> Self {
        Self::with_band(1, max_value, config.min_frequency, config.max_frequency)
    }

    pub fn with_band(min_value: u32, max_value: u32, min_frequency: u32, max_frequency: u32) -> Self {
        debug_assert!(max_value > min_value, "tone range must span at least two values");
        debug_assert!(max_frequency >= min_frequency);
        Self {
            min_value,
            max_value,
            min_frequency,
            max_frequency,
        }
    }

    /// Frequency in Hz for `value`
    ///
    /// Values outside the range are clamped to it.
    pub fn frequency(&self, value: u32) -> u32 {
        let value = value.clamp(self.min_value, self.max_value);
        let span = u64::from(self.max_value - self.min_value).max(1);
        let band = u64::from(self.max_frequency - self.min_frequency);
        let offset = u64::from(value - self.min_value);
        self.min_frequency + (band * offset / span) as u32
    }
}
