//! Sortviz Core - Instrumented sorting engines for visualisation and audibilisation
//!
//! Every comparison and mutation performed by the engines is observable as a
//! discrete step: the engines drive a [`step::StepEmitter`], which hands frames
//! to an external [`step::StepSink`] (renderer + tone output) and paces the run.
//!
//! ```text
//! RunController ──start──► Algorithm engine ──mutates──► ArrayModel
//!       │                        │
//!       │ final sweep            │ emit(highlight, tone)
//!       ▼                        ▼
//!  StepEmitter ──render / play_tone──► StepSink (UI, audio, tests)
//! ```

pub mod array;
#[cfg(feature = "audio")]
pub mod audio;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod step;
pub mod tone;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use array::{ArrayModel, Counters};
pub use controller::{RunController, RunOutcome, RunState};
pub use engine::StopToken;
pub use error::{SortvizError, SortvizResult};
pub use step::{Frame, Highlight, Snapshot, StepEmitter, StepSink, Tone};
pub use tone::ToneMapper;
pub use types::*;
