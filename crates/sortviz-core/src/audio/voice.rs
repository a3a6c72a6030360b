//! Sine burst generator with a linear fade envelope

use std::f32::consts::TAU;

/// Fade length at each end of a burst, in milliseconds
const FADE_MS: u32 = 2;

/// Plays one tone at a time; a new tone replaces the current one
#[derive(Debug, Clone)]
pub struct ToneVoice {
    sample_rate: u32,
    phase: f32,
    phase_inc: f32,
    remaining: u32,
    total: u32,
    fade_len: u32,
    volume: f32,
}

impl ToneVoice {
    pub fn new(sample_rate: u32, volume: f32) -> Self {
        Self {
            sample_rate: sample_rate.max(1),
            phase: 0.0,
            phase_inc: 0.0,
            remaining: 0,
            total: 0,
            fade_len: (sample_rate * FADE_MS / 1000).max(1),
            volume,
        }
    }

    /// Start a burst of `frequency` Hz lasting `duration_ms`
    pub fn trigger(&mut self, frequency: u32, duration_ms: u32) {
        let samples = (u64::from(self.sample_rate) * u64::from(duration_ms) / 1000) as u32;
        self.phase_inc = frequency as f32 / self.sample_rate as f32;
        self.total = samples;
        self.remaining = samples;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Next mono sample in -volume..=volume
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        if self.remaining == 0 {
            return 0.0;
        }
        let elapsed = self.total - self.remaining;
        let fade_in = (elapsed as f32 / self.fade_len as f32).min(1.0);
        let fade_out = (self.remaining as f32 / self.fade_len as f32).min(1.0);
        let sample = (self.phase * TAU).sin() * self.volume * fade_in.min(fade_out);

        self.phase = (self.phase + self.phase_inc).fract();
        self.remaining -= 1;
        sample
    }
}
