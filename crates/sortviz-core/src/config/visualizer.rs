//! Visualizer configuration
//!
//! Stored as YAML; every section falls back to defaults field by field.

use serde::{Deserialize, Serialize};

use crate::tone::{MAX_FREQUENCY, MIN_FREQUENCY};
use crate::types::{DEFAULT_ELEMENT_COUNT, MAX_ELEMENT_COUNT, MIN_ELEMENT_COUNT};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Number of elements N in the permutation `1..=N`
    pub element_count: usize,
    pub tone: ToneConfig,
    pub pacing: PacingConfig,
    pub audio: AudioSettings,
    pub display: DisplayConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            element_count: DEFAULT_ELEMENT_COUNT,
            tone: ToneConfig::default(),
            pacing: PacingConfig::default(),
            audio: AudioSettings::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl VisualizerConfig {
    /// Clamp values to ranges the engines and the tone mapper accept
    pub fn validate(&mut self) {
        self.element_count = self.element_count.clamp(MIN_ELEMENT_COUNT, MAX_ELEMENT_COUNT);

        self.tone.min_frequency = self.tone.min_frequency.clamp(20, 20_000);
        self.tone.max_frequency = self.tone.max_frequency.clamp(20, 20_000);
        if self.tone.max_frequency <= self.tone.min_frequency {
            self.tone.max_frequency = (self.tone.min_frequency + 1).min(20_001);
        }
        self.tone.duration_ms = self.tone.duration_ms.clamp(1, 1000);

        self.audio.volume = self.audio.volume.clamp(0.0, 1.0);
        self.display.width = self.display.width.max(100.0);
        self.display.height = self.display.height.max(100.0);
    }

    /// Same settings with every delay set to zero (headless runs, tests)
    pub fn without_pacing(mut self) -> Self {
        self.pacing = PacingConfig {
            step_delay_ms: 0,
            final_delay_ms: 0,
        };
        self
    }
}

/// Tone band and length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Frequency for the smallest value in Hz
    pub min_frequency: u32,
    /// Frequency for the largest value in Hz
    pub max_frequency: u32,
    /// Length of each tone in milliseconds
    pub duration_ms: u64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            min_frequency: MIN_FREQUENCY,
            max_frequency: MAX_FREQUENCY,
            duration_ms: 20,
        }
    }
}

/// Pacing delays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Delay after each algorithm step in milliseconds
    pub step_delay_ms: u64,
    /// Delay after each final sweep step in milliseconds
    pub final_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 50,
            final_delay_ms: 20,
        }
    }
}

/// Tone output device settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Open an output device at all
    pub enabled: bool,
    /// Output device name (None = system default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Linear gain of the generated tones (0.0 - 1.0)
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            device: None,
            volume: 0.2,
        }
    }
}

/// Canvas size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}
