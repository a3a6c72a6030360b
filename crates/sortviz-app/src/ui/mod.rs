//! UI module for sortviz
//!
//! Built with iced. The window mirrors what the run controller thread
//! reports and forwards button presses back to it.

pub mod app;

pub use app::{Message, SortvizApp, ViewState};
