//! The observable boundary between the engines and the outside world
//!
//! Engines call [`StepEmitter::emit`] after every meaningful operation. The
//! emitter renders the current permutation through the [`StepSink`], plays
//! the mapped tone if one was requested, then blocks for the pacing delay.
//! That delay is the only point where a run yields; a stop recorded during it
//! is observed at the engine's next safe point.

use std::time::Duration;

use crate::array::{ArrayModel, Counters};
use crate::config::VisualizerConfig;
use crate::tone::ToneMapper;
use crate::types::Algorithm;

/// Most indices any engine highlights in a single step
pub const MAX_HIGHLIGHTS: usize = 3;

/// Which bars a step marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Nothing highlighted (idle frames, end of run)
    #[default]
    None,
    /// Up to three explicit indices under comparison or being written
    Indices {
        slots: [usize; MAX_HIGHLIGHTS],
        len: usize,
    },
    /// Every index `0..=n` (final sweep)
    Through(usize),
}

impl Highlight {
    /// Highlight the given indices (at most three)
    pub fn indices(indices: &[usize]) -> Self {
        debug_assert!(indices.len() <= MAX_HIGHLIGHTS);
        let len = indices.len().min(MAX_HIGHLIGHTS);
        let mut slots = [0; MAX_HIGHLIGHTS];
        slots[..len].copy_from_slice(&indices[..len]);
        Highlight::Indices { slots, len }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Highlight::None => false,
            Highlight::Indices { slots, len } => slots[..*len].contains(&index),
            Highlight::Through(last) => index <= *last,
        }
    }

    /// Explicit indices, empty for `None` and `Through`
    pub fn as_slice(&self) -> &[usize] {
        match self {
            Highlight::Indices { slots, len } => &slots[..*len],
            _ => &[],
        }
    }
}

/// A tone request handed to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency: u32,
    pub duration: Duration,
}

/// One step as seen by the renderer; borrowed, never stored
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub values: &'a [u32],
    pub highlight: Highlight,
    pub counters: Counters,
}

impl Frame<'_> {
    /// Owned copy for sinks that ship frames across threads
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values.to_vec(),
            highlight: self.highlight,
            counters: self.counters,
        }
    }
}

/// Owned frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<u32>,
    pub highlight: Highlight,
    pub counters: Counters,
}

impl Snapshot {
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// External collaborators: rendering surface and audio device
pub trait StepSink {
    /// Draw the permutation. Must return promptly.
    fn render(&mut self, frame: &Frame<'_>);

    /// Play a tone. Fire-and-forget; errors are discarded by the emitter.
    fn play_tone(&mut self, tone: Tone) -> anyhow::Result<()>;

    /// The "Algorithm:" label changed (`None` after stop/reset)
    fn algorithm_changed(&mut self, _algorithm: Option<Algorithm>) {}
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn render(&mut self, frame: &Frame<'_>) {
        (**self).render(frame)
    }

    fn play_tone(&mut self, tone: Tone) -> anyhow::Result<()> {
        (**self).play_tone(tone)
    }

    fn algorithm_changed(&mut self, algorithm: Option<Algorithm>) {
        (**self).algorithm_changed(algorithm)
    }
}

/// Pacing preset for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Algorithm steps
    Normal,
    /// Final sweep steps (shorter)
    Final,
    /// No delay (idle re-renders)
    Immediate,
}

/// Renders, sounds and paces steps
pub struct StepEmitter<S> {
    sink: S,
    mapper: ToneMapper,
    tone_duration: Duration,
    step_delay: Duration,
    final_delay: Duration,
    steps: u64,
}

impl<S: StepSink> StepEmitter<S> {
    /// Emitter for a permutation of `1..=max_value`
    pub fn new(sink: S, max_value: u32, config: &VisualizerConfig) -> Self {
        Self {
            sink,
            mapper: ToneMapper::from_config(max_value, &config.tone),
            tone_duration: Duration::from_millis(config.tone.duration_ms),
            step_delay: Duration::from_millis(config.pacing.step_delay_ms),
            final_delay: Duration::from_millis(config.pacing.final_delay_ms),
            steps: 0,
        }
    }

    /// Emit one step: render, optionally sound `tone_value`, then wait
    pub fn emit(&mut self, array: &ArrayModel, highlight: Highlight, tone_value: Option<u32>, pace: Pace) {
        self.steps += 1;
        self.sink.render(&Frame {
            values: array.values(),
            highlight,
            counters: array.counters(),
        });

        if let Some(value) = tone_value {
            let tone = Tone {
                frequency: self.mapper.frequency(value),
                duration: self.tone_duration,
            };
            if let Err(e) = self.sink.play_tone(tone) {
                log::trace!("Tone {} Hz dropped: {}", tone.frequency, e);
            }
        }

        let delay = match pace {
            Pace::Normal => self.step_delay,
            Pace::Final => self.final_delay,
            Pace::Immediate => Duration::ZERO,
        };
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    /// Re-render with no highlights, no tone and no delay
    pub fn render_idle(&mut self, array: &ArrayModel) {
        self.sink.render(&Frame {
            values: array.values(),
            highlight: Highlight::None,
            counters: array.counters(),
        });
    }

    pub fn announce(&mut self, algorithm: Option<Algorithm>) {
        self.sink.algorithm_changed(algorithm);
    }

    /// Pick up new tone and pacing settings
    pub fn configure(&mut self, max_value: u32, config: &VisualizerConfig) {
        self.mapper = ToneMapper::from_config(max_value, &config.tone);
        self.tone_duration = Duration::from_millis(config.tone.duration_ms);
        self.step_delay = Duration::from_millis(config.pacing.step_delay_ms);
        self.final_delay = Duration::from_millis(config.pacing.final_delay_ms);
    }

    /// Steps emitted so far (idle renders excluded)
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{quiet_config, RecordingSink};

    #[test]
    fn test_highlight_indices() {
        let highlight = Highlight::indices(&[4, 1, 9]);
        assert!(highlight.contains(4));
        assert!(highlight.contains(9));
        assert!(!highlight.contains(0));
        assert_eq!(highlight.as_slice(), &[4, 1, 9]);
    }

    #[test]
    fn test_highlight_through_is_cumulative() {
        let highlight = Highlight::Through(2);
        assert!(highlight.contains(0));
        assert!(highlight.contains(2));
        assert!(!highlight.contains(3));
        assert!(highlight.as_slice().is_empty());
        assert!(!Highlight::None.contains(0));
    }

    #[test]
    fn test_emit_renders_then_sounds() {
        let array = ArrayModel::from_values(vec![1, 3, 2]).unwrap();
        let mut emitter = StepEmitter::new(RecordingSink::default(), 3, &quiet_config());

        emitter.emit(&array, Highlight::indices(&[1, 2]), Some(3), Pace::Normal);
        emitter.emit(&array, Highlight::indices(&[0]), None, Pace::Normal);

        let sink = emitter.sink();
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0].values, vec![1, 3, 2]);
        assert_eq!(sink.frames[0].highlight.as_slice(), &[1, 2]);
        assert_eq!(sink.tones.len(), 1);
        assert_eq!(sink.tones[0].frequency, 8000);
        assert_eq!(sink.tones[0].duration, Duration::from_millis(20));
        assert_eq!(emitter.steps(), 2);
    }

    #[test]
    fn test_tone_failure_is_swallowed() {
        let array = ArrayModel::sorted(4).unwrap();
        let sink = RecordingSink {
            fail_tones: true,
            ..Default::default()
        };
        let mut emitter = StepEmitter::new(sink, 4, &quiet_config());

        emitter.emit(&array, Highlight::indices(&[0, 1]), Some(1), Pace::Normal);
        emitter.emit(&array, Highlight::indices(&[2, 3]), Some(4), Pace::Final);

        assert_eq!(emitter.sink().frames.len(), 2);
        assert!(emitter.sink().tones.is_empty());
    }

    #[test]
    fn test_render_idle_clears_highlight() {
        let array = ArrayModel::sorted(4).unwrap();
        let mut emitter = StepEmitter::new(RecordingSink::default(), 4, &quiet_config());
        emitter.render_idle(&array);
        assert_eq!(emitter.sink().frames[0].highlight, Highlight::None);
        assert_eq!(emitter.steps(), 0);
    }
}
