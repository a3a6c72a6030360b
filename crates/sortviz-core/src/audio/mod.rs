//! Tone output through CPAL
//!
//! The run controller's thread pushes tone requests into a lock-free ring
//! buffer; the CPAL callback pops them and synthesises short sine bursts.
//!
//! ```text
//! ┌──────────────────┐   push()   ┌──────────────────┐   pop()   ┌────────────────────┐
//! │ StepEmitter      │──────────►│  Tone queue      │─────────►│ CPAL audio thread  │
//! │ (controller thr.)│           │ (lock-free SPSC) │          │ (owns ToneVoice)   │
//! └──────────────────┘           └──────────────────┘          └────────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use sortviz_core::audio::ToneOutput;
//!
//! let mut output = ToneOutput::start(&config.audio)?;
//! output.play(tone)?; // never blocks
//! ```

mod device;
mod error;
mod output;
mod voice;

pub use device::{find_output_device, output_device_names};
pub use error::{AudioError, AudioResult};
pub use output::{ToneOutput, TONE_QUEUE_CAPACITY};
pub use voice::ToneVoice;
