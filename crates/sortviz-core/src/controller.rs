//! Run controller: the idle → running → (completed | stopped) state machine
//!
//! Exactly one engine runs at a time, synchronously on the caller's thread.
//! A stop is requested through a clone of the controller's [`StopToken`]
//! (typically from a UI thread during a pacing delay) and observed at the
//! engine's next safe point.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::array::{ArrayModel, Counters};
use crate::config::VisualizerConfig;
use crate::engine::{RunContext, StopToken};
use crate::error::SortvizResult;
use crate::step::{Highlight, Pace, StepEmitter, StepSink};
use crate::types::Algorithm;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running(Algorithm),
    Stopped,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running(_))
    }
}

/// How a call to [`RunController::start`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Sorted and the final sweep played to the end
    Completed,
    /// Interrupted during the sort or the final sweep
    Stopped,
    /// Rejected: unknown algorithm or a run already in progress
    Ignored,
}

/// Owns the permutation, the step emitter and the cancellation token
pub struct RunController<S> {
    array: ArrayModel,
    emitter: StepEmitter<S>,
    token: StopToken,
    state: RunState,
    config: VisualizerConfig,
    rng: StdRng,
}

impl<S: StepSink> RunController<S> {
    /// Controller over a freshly shuffled permutation of `1..=element_count`
    pub fn new(config: VisualizerConfig, sink: S) -> SortvizResult<Self> {
        Self::with_rng(config, sink, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) with a reproducible shuffle
    pub fn with_seed(config: VisualizerConfig, sink: S, seed: u64) -> SortvizResult<Self> {
        Self::with_rng(config, sink, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: VisualizerConfig, sink: S, mut rng: StdRng) -> SortvizResult<Self> {
        let array = ArrayModel::shuffled(config.element_count, &mut rng)?;
        Ok(Self::from_parts(array, config, sink, rng))
    }

    /// Controller over an explicit starting permutation
    pub fn with_array(array: ArrayModel, config: VisualizerConfig, sink: S) -> Self {
        Self::from_parts(array, config, sink, StdRng::from_entropy())
    }

    fn from_parts(array: ArrayModel, config: VisualizerConfig, sink: S, rng: StdRng) -> Self {
        let emitter = StepEmitter::new(sink, array.max_value(), &config);
        Self {
            array,
            emitter,
            token: StopToken::new(),
            state: RunState::Idle,
            config,
            rng,
        }
    }

    /// Run `algorithm` to completion (plus final sweep) or until stopped
    ///
    /// A start while a run is in progress is ignored, never queued.
    pub fn start(&mut self, algorithm: Algorithm) -> RunOutcome {
        if self.state.is_running() || !self.token.begin() {
            log::debug!("Ignoring start of {}: a run is already in progress", algorithm);
            return RunOutcome::Ignored;
        }
        self.run(algorithm)
    }

    /// Start a run that another thread reserved with [`StopToken::claim`]
    ///
    /// Ignored if the claim was cancelled by a stop before this call.
    pub fn start_claimed(&mut self, algorithm: Algorithm) -> RunOutcome {
        if self.state.is_running() || !self.token.begin_claimed() {
            log::debug!("Ignoring start of {}: cancelled before it began", algorithm);
            return RunOutcome::Ignored;
        }
        self.run(algorithm)
    }

    fn run(&mut self, algorithm: Algorithm) -> RunOutcome {
        log::info!("Starting {}", algorithm);
        self.state = RunState::Running(algorithm);
        self.emitter.announce(Some(algorithm));

        let mut ctx = RunContext::new(&mut self.array, &mut self.emitter, &self.token);
        algorithm.run(&mut ctx);

        if self.token.should_stop() {
            return self.finish_stopped();
        }

        log::info!(
            "{} finished: {} comparisons, {} swaps",
            algorithm,
            self.array.counters().comparisons,
            self.array.counters().swaps
        );

        if !self.final_sweep() {
            return self.finish_stopped();
        }

        self.token.finish();
        self.state = RunState::Idle;
        self.emitter.render_idle(&self.array);
        RunOutcome::Completed
    }

    /// Parse `id` and start it; unknown ids are a logged no-op
    pub fn start_by_id(&mut self, id: &str) -> RunOutcome {
        match id.parse::<Algorithm>() {
            Ok(algorithm) => self.start(algorithm),
            Err(e) => {
                log::warn!("Ignoring start request: {}", e);
                RunOutcome::Ignored
            }
        }
    }

    /// Ascending playback over the sorted permutation
    ///
    /// Returns `false` if a stop cut it short.
    fn final_sweep(&mut self) -> bool {
        for i in 0..self.array.len() {
            if self.token.should_stop() {
                return false;
            }
            let value = self.array.get(i);
            self.emitter
                .emit(&self.array, Highlight::Through(i), Some(value), Pace::Final);
        }
        true
    }

    fn finish_stopped(&mut self) -> RunOutcome {
        log::info!(
            "Run stopped after {} comparisons, {} swaps",
            self.array.counters().comparisons,
            self.array.counters().swaps
        );
        self.state = RunState::Stopped;
        self.emitter.announce(None);
        self.emitter.render_idle(&self.array);
        RunOutcome::Stopped
    }

    /// Ask the current run to stop
    ///
    /// Only has an effect while a run is in progress, which from the owning
    /// thread means from inside a sink callback; other threads use
    /// [`stop_token`](Self::stop_token). The run itself settles into
    /// `Stopped` when the engine unwinds. Returns whether anything changed.
    pub fn stop(&mut self) -> bool {
        self.token.request_stop()
    }

    /// Reshuffle, zero the counters and return to `Idle`
    pub fn reset(&mut self) {
        log::info!("Resetting {} elements", self.array.len());
        self.array.reset(&mut self.rng);
        self.token.clear();
        self.state = RunState::Idle;
        self.emitter.announce(None);
        self.emitter.render_idle(&self.array);
    }

    /// Replace the config and reset; a new element count reshuffles
    /// a permutation of the new size. Ignored while a run is in progress.
    pub fn apply_config(&mut self, mut config: VisualizerConfig) -> SortvizResult<()> {
        if self.state.is_running() {
            return Ok(());
        }
        config.validate();
        if config.element_count != self.array.len() {
            self.array = ArrayModel::shuffled(config.element_count, &mut self.rng)?;
        }
        self.emitter.configure(self.array.max_value(), &config);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Re-render the current permutation without highlights
    pub fn redraw(&mut self) {
        self.emitter.render_idle(&self.array);
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn array(&self) -> &ArrayModel {
        &self.array
    }

    pub fn counters(&self) -> Counters {
        self.array.counters()
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Clone of the cancellation token, for requesting stops from elsewhere
    pub fn stop_token(&self) -> StopToken {
        self.token.clone()
    }

    /// Steps emitted since construction (idle renders excluded)
    pub fn steps(&self) -> u64 {
        self.emitter.steps()
    }

    pub fn sink(&self) -> &S {
        self.emitter.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.emitter.sink_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{quiet_config, RecordingSink};

    fn controller(values: Vec<u32>) -> RunController<RecordingSink> {
        let array = ArrayModel::from_values(values).unwrap();
        RunController::with_array(array, quiet_config(), RecordingSink::default())
    }

    #[test]
    fn test_completed_run_plays_final_sweep() {
        let mut ctl = controller(vec![5, 4, 3, 2, 1]);
        assert_eq!(ctl.start(Algorithm::Bubble), RunOutcome::Completed);

        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.array().values(), &[1, 2, 3, 4, 5]);
        assert_eq!(ctl.counters(), Counters { comparisons: 10, swaps: 10 });

        let sink = ctl.sink();
        // 10 sort steps, 5 sweep steps, 1 closing idle render
        assert_eq!(sink.frames.len(), 16);
        let sweep = &sink.frames[10..15];
        for (i, frame) in sweep.iter().enumerate() {
            assert_eq!(frame.highlight, Highlight::Through(i));
        }
        assert_eq!(sink.frames[15].highlight, Highlight::None);

        // Sweep tones ascend over the sorted values
        let sweep_tones: Vec<u32> = sink.tones[10..].iter().map(|t| t.frequency).collect();
        assert_eq!(sweep_tones, vec![2000, 3500, 5000, 6500, 8000]);
        // Label stays on the finished algorithm
        assert_eq!(sink.labels, vec![Some(Algorithm::Bubble)]);
        assert!(!ctl.stop_token().is_running());
    }

    #[test]
    fn test_stop_mid_run_skips_sweep_and_freezes_array() {
        let array = ArrayModel::from_values(vec![5, 4, 3, 2, 1]).unwrap();
        let mut ctl = RunController::with_array(array, quiet_config(), RecordingSink::default());
        let token = ctl.stop_token();
        ctl.sink_mut().stop_after = Some((3, token.clone()));

        assert_eq!(ctl.start(Algorithm::Bubble), RunOutcome::Stopped);
        assert_eq!(ctl.state(), RunState::Stopped);
        assert!(!ctl.state().is_running());
        assert!(token.stop_requested());

        let sink = ctl.sink();
        // 3 steps, then one idle render; no sweep tones
        assert_eq!(sink.frames.len(), 4);
        assert_eq!(sink.tones.len(), 3);
        assert_eq!(sink.frames[3].highlight, Highlight::None);
        assert_eq!(sink.frames[3].values, sink.frames[2].values);
        assert_eq!(ctl.array().values(), &sink.frames[2].values[..]);
        assert_eq!(sink.labels, vec![Some(Algorithm::Bubble), None]);
    }

    #[test]
    fn test_stop_during_sweep() {
        let mut ctl = controller(vec![2, 1, 3, 4]);
        let token = ctl.stop_token();
        // Bubble over [2,1,3,4]: 3 + 2 + 1 = 6 sort steps, then the sweep
        ctl.sink_mut().stop_after = Some((8, token));

        assert_eq!(ctl.start(Algorithm::Bubble), RunOutcome::Stopped);
        assert_eq!(ctl.state(), RunState::Stopped);
        assert!(ctl.array().is_sorted());
        // Two sweep frames made it out before the stop was seen
        let sink = ctl.sink();
        assert_eq!(sink.frames.len(), 9);
        assert_eq!(sink.frames[7].highlight, Highlight::Through(1));
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut ctl = controller(vec![3, 1, 2]);
        // Another party holds the run
        assert!(ctl.stop_token().begin());
        assert_eq!(ctl.start(Algorithm::Heap), RunOutcome::Ignored);
        assert_eq!(ctl.array().values(), &[3, 1, 2]);
        assert!(ctl.sink().frames.is_empty());
        assert!(ctl.sink().labels.is_empty());
    }

    #[test]
    fn test_stop_only_signals_the_run() {
        let mut ctl = controller(vec![3, 1, 2]);
        // A run in flight as seen from a sink callback
        assert!(ctl.stop_token().begin());
        assert!(ctl.stop());

        // Settling (label, idle frame) is left to the unwinding run
        assert!(ctl.sink().frames.is_empty());
        assert!(ctl.sink().labels.is_empty());
        assert!(ctl.stop_token().stop_requested());
        assert!(!ctl.stop());
    }

    #[test]
    fn test_claimed_start_runs() {
        let mut ctl = controller(vec![3, 1, 2]);
        assert!(ctl.stop_token().claim());
        assert_eq!(ctl.start_claimed(Algorithm::Insertion), RunOutcome::Completed);
        assert!(ctl.array().is_sorted());
        assert!(!ctl.stop_token().is_pending());
    }

    #[test]
    fn test_cancelled_claim_is_ignored() {
        let mut ctl = controller(vec![3, 1, 2]);
        let ui = ctl.stop_token();
        assert!(ui.claim());
        assert!(ui.request_stop());

        assert_eq!(ctl.start_claimed(Algorithm::Bubble), RunOutcome::Ignored);
        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.array().values(), &[3, 1, 2]);
        assert!(ctl.sink().frames.is_empty());
        // Without a claim there is nothing to start
        assert_eq!(ctl.start_claimed(Algorithm::Bubble), RunOutcome::Ignored);
    }

    #[test]
    fn test_unknown_algorithm_is_ignored() {
        let mut ctl = controller(vec![3, 1, 2]);
        assert_eq!(ctl.start_by_id("bogo"), RunOutcome::Ignored);
        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.start_by_id("insertion"), RunOutcome::Completed);
        assert!(ctl.array().is_sorted());
    }

    #[test]
    fn test_stop_when_idle_is_a_no_op() {
        let mut ctl = controller(vec![3, 1, 2]);
        assert!(!ctl.stop());
        assert!(!ctl.stop());
        assert_eq!(ctl.state(), RunState::Idle);
        assert!(ctl.sink().frames.is_empty());

        assert!(!ctl.stop_token().request_stop());
        assert_eq!(ctl.start(Algorithm::Selection), RunOutcome::Completed);
    }

    #[test]
    fn test_stop_twice_changes_nothing_more() {
        let mut ctl = controller(vec![4, 3, 2, 1]);
        let token = ctl.stop_token();
        ctl.sink_mut().stop_after = Some((2, token.clone()));
        assert_eq!(ctl.start(Algorithm::Selection), RunOutcome::Stopped);

        let frames = ctl.sink().frames.len();
        let values = ctl.array().values().to_vec();
        assert!(!token.request_stop());
        assert!(!ctl.stop());
        assert_eq!(ctl.state(), RunState::Stopped);
        assert_eq!(ctl.sink().frames.len(), frames);
        assert_eq!(ctl.array().values(), &values[..]);
    }

    #[test]
    fn test_new_run_after_stop_clears_flag() {
        let mut ctl = controller(vec![4, 3, 2, 1]);
        let token = ctl.stop_token();
        ctl.sink_mut().stop_after = Some((1, token.clone()));
        assert_eq!(ctl.start(Algorithm::Merge), RunOutcome::Stopped);
        assert!(ctl.array().is_permutation());

        ctl.sink_mut().stop_after = None;
        assert_eq!(ctl.start(Algorithm::Merge), RunOutcome::Completed);
        assert!(!token.stop_requested());
        assert!(ctl.array().is_sorted());
    }

    #[test]
    fn test_reset_after_construction() {
        let config = quiet_config();
        let mut ctl = RunController::with_seed(config, RecordingSink::default(), 42).unwrap();
        ctl.reset();

        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.counters(), Counters::default());
        assert_eq!(ctl.array().len(), 50);
        assert!(ctl.array().is_permutation());
        assert_eq!(ctl.sink().frames.len(), 1);
        assert_eq!(ctl.sink().labels, vec![None]);
    }

    #[test]
    fn test_reset_zeroes_counters_after_run() {
        let mut ctl = controller(vec![4, 3, 2, 1]);
        ctl.start(Algorithm::Quick);
        assert!(ctl.counters().comparisons > 0);

        ctl.reset();
        assert_eq!(ctl.counters(), Counters::default());
        assert_eq!(ctl.state(), RunState::Idle);
        assert!(!ctl.stop_token().stop_requested());
    }

    #[test]
    fn test_counters_accumulate_without_reset() {
        let mut ctl = controller(vec![2, 1, 3]);
        ctl.start(Algorithm::Bubble);
        let first = ctl.counters();
        ctl.start(Algorithm::Bubble);
        let second = ctl.counters();
        assert_eq!(second.comparisons, first.comparisons * 2);
        assert_eq!(second.swaps, first.swaps);
    }

    #[test]
    fn test_tone_failures_do_not_change_the_run() {
        let mut silent = controller(vec![3, 5, 1, 4, 2]);
        silent.sink_mut().fail_tones = true;
        let mut loud = controller(vec![3, 5, 1, 4, 2]);

        assert_eq!(silent.start(Algorithm::Heap), RunOutcome::Completed);
        assert_eq!(loud.start(Algorithm::Heap), RunOutcome::Completed);
        assert_eq!(silent.counters(), loud.counters());
        assert_eq!(silent.sink().frames, loud.sink().frames);
        assert!(silent.sink().tones.is_empty());
    }

    #[test]
    fn test_apply_config_resizes() {
        let mut ctl = controller(vec![2, 1, 3]);
        let mut config = quiet_config();
        config.element_count = 8;
        ctl.apply_config(config).unwrap();

        assert_eq!(ctl.array().len(), 8);
        assert!(ctl.array().is_permutation());
        assert_eq!(ctl.config().element_count, 8);
        assert_eq!(ctl.start(Algorithm::Heap), RunOutcome::Completed);
        assert_eq!(ctl.sink().tones.last().unwrap().frequency, 8000);
    }
}
