//! Instrumented sorting engines
//!
//! Each engine is a plain function over a [`RunContext`]: it mutates the
//! [`ArrayModel`] through counted primitives and emits a step after every
//! operation the algorithm makes visible. Engines poll the [`StopToken`] at
//! loop-iteration granularity (before each inner-loop body and before each
//! outer iteration; recursive engines at function entry) and unwind as soon
//! as a stop is observed, leaving the permutation partially sorted.
//!
//! | Engine    | Renders on                              |
//! |-----------|-----------------------------------------|
//! | bubble    | every comparison                        |
//! | selection | every comparison, plus each swap        |
//! | insertion | every comparison, plus the key write    |
//! | quick     | qualifying swaps and pivot placement    |
//! | merge     | every write                             |
//! | heap      | swaps only                              |

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::array::ArrayModel;
use crate::step::{Highlight, Pace, StepEmitter, StepSink};
use crate::types::Algorithm;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

#[derive(Debug, Default)]
struct RunFlags {
    running: AtomicBool,
    stop: AtomicBool,
    /// A start was claimed by another thread and not yet begun
    pending: AtomicBool,
}

/// Cooperative cancellation token shared by the controller, the engines and
/// whatever drives user input
///
/// Cloning is cheap; all clones observe the same flags. The stop flag is
/// separate from the running bit so "finished" and "interrupted" stay
/// distinguishable after a run ends.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    flags: Arc<RunFlags>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a run as started and clear any stale stop request
    ///
    /// Returns `false` (and changes nothing) if a run is already in progress.
    pub(crate) fn begin(&self) -> bool {
        if self
            .flags
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.flags.stop.store(false, Ordering::Release);
        true
    }

    /// Reserve the next run from another thread before handing the start over
    ///
    /// Fails while a run is in progress or another start is already pending.
    /// Until the owner calls [`begin_claimed`](Self::begin_claimed), a
    /// [`request_stop`](Self::request_stop) cancels the claim.
    pub fn claim(&self) -> bool {
        if self.is_running() {
            return false;
        }
        self.flags
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Begin the run reserved by [`claim`](Self::claim)
    ///
    /// Returns `false` if the claim was cancelled (or never made). The running
    /// bit is raised before the claim is consumed, so a stop landing anywhere
    /// in between still cancels the run.
    pub(crate) fn begin_claimed(&self) -> bool {
        if !self.begin() {
            return false;
        }
        if self
            .flags
            .pending
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            self.flags.running.store(false, Ordering::Release);
            return false;
        }
        true
    }

    pub fn is_pending(&self) -> bool {
        self.flags.pending.load(Ordering::Acquire)
    }

    /// Clear the running bit after natural completion
    pub(crate) fn finish(&self) {
        self.flags.running.store(false, Ordering::Release);
    }

    /// Clear the stop and running flags (reset); a pending claim survives
    pub(crate) fn clear(&self) {
        self.flags.stop.store(false, Ordering::Release);
        self.flags.running.store(false, Ordering::Release);
    }

    /// Ask the current run to stop at its next safe point, and cancel any
    /// claimed start that has not begun
    ///
    /// Returns `true` if a run was in progress or pending. Idempotent: a
    /// second call, or a call while idle, changes nothing.
    pub fn request_stop(&self) -> bool {
        let cancelled = self.flags.pending.swap(false, Ordering::AcqRel);
        let stopped = self.stop_running();
        cancelled || stopped
    }

    fn stop_running(&self) -> bool {
        if self
            .flags
            .running
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.flags.stop.store(true, Ordering::Release);
        true
    }

    pub fn is_running(&self) -> bool {
        self.flags.running.load(Ordering::Acquire)
    }

    /// Whether the last run was interrupted by [`request_stop`](Self::request_stop)
    pub fn stop_requested(&self) -> bool {
        self.flags.stop.load(Ordering::Acquire)
    }

    /// Safe-point check used by the engines
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop_requested() || !self.is_running()
    }
}

/// Per-run context threaded through every engine call
pub struct RunContext<'a, S> {
    pub array: &'a mut ArrayModel,
    pub emitter: &'a mut StepEmitter<S>,
    pub token: &'a StopToken,
}

impl<'a, S: StepSink> RunContext<'a, S> {
    pub fn new(array: &'a mut ArrayModel, emitter: &'a mut StepEmitter<S>, token: &'a StopToken) -> Self {
        Self {
            array,
            emitter,
            token,
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.token.should_stop()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Emit a normally paced step highlighting `indices`, sounding the value
    /// now stored at `tone_at` if given
    pub fn step(&mut self, indices: &[usize], tone_at: Option<usize>) {
        let tone_value = tone_at.map(|index| self.array.get(index));
        self.emitter
            .emit(self.array, Highlight::indices(indices), tone_value, Pace::Normal);
    }
}

impl Algorithm {
    /// Run this algorithm's engine to completion or until a stop is observed
    pub fn run<S: StepSink>(self, ctx: &mut RunContext<'_, S>) {
        match self {
            Algorithm::Bubble => bubble_sort(ctx),
            Algorithm::Quick => quick_sort(ctx),
            Algorithm::Selection => selection_sort(ctx),
            Algorithm::Merge => merge_sort(ctx),
            Algorithm::Insertion => insertion_sort(ctx),
            Algorithm::Heap => heap_sort(ctx),
        }
    }
}
