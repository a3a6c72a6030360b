//! Shared helpers for engine and controller tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::array::ArrayModel;
use crate::config::VisualizerConfig;
use crate::engine::{RunContext, StopToken};
use crate::step::{Frame, Snapshot, StepEmitter, StepSink, Tone};
use crate::types::Algorithm;

/// Default config with every delay zeroed
pub fn quiet_config() -> VisualizerConfig {
    VisualizerConfig::default().without_pacing()
}

pub fn shuffled(len: usize, seed: u64) -> ArrayModel {
    let mut rng = StdRng::seed_from_u64(seed);
    ArrayModel::shuffled(len, &mut rng).unwrap()
}

/// Sink that keeps every frame, tone and label change
///
/// With `stop_after` set, it requests a stop on the token once that many
/// frames have been rendered, the way a UI would during the pacing delay.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Snapshot>,
    pub tones: Vec<Tone>,
    pub labels: Vec<Option<Algorithm>>,
    pub fail_tones: bool,
    pub stop_after: Option<(usize, StopToken)>,
}

impl RecordingSink {
    pub fn stopping_after(frames: usize, token: &StopToken) -> Self {
        Self {
            stop_after: Some((frames, token.clone())),
            ..Default::default()
        }
    }
}

impl StepSink for RecordingSink {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames.push(frame.to_snapshot());
        if let Some((limit, token)) = &self.stop_after {
            if self.frames.len() == *limit {
                token.request_stop();
            }
        }
    }

    fn play_tone(&mut self, tone: Tone) -> anyhow::Result<()> {
        if self.fail_tones {
            anyhow::bail!("no audio device");
        }
        self.tones.push(tone);
        Ok(())
    }

    fn algorithm_changed(&mut self, algorithm: Option<Algorithm>) {
        self.labels.push(algorithm);
    }
}

fn drive(algorithm: Algorithm, array: &mut ArrayModel, token: &StopToken, sink: RecordingSink) -> RecordingSink {
    let mut emitter = StepEmitter::new(sink, array.max_value(), &quiet_config());
    assert!(token.begin());
    let mut ctx = RunContext::new(array, &mut emitter, token);
    algorithm.run(&mut ctx);
    emitter.into_sink()
}

pub fn run_engine_recorded(algorithm: Algorithm, array: &mut ArrayModel) -> RecordingSink {
    drive(algorithm, array, &StopToken::new(), RecordingSink::default())
}

pub fn run_engine(algorithm: Algorithm, array: &mut ArrayModel) {
    run_engine_recorded(algorithm, array);
}

/// Run with a stop requested after `frames` rendered frames
pub fn run_engine_until(algorithm: Algorithm, array: &mut ArrayModel, frames: usize) -> RecordingSink {
    let token = StopToken::new();
    let sink = RecordingSink::stopping_after(frames, &token);
    drive(algorithm, array, &token, sink)
}
