//! Shared UI widgets for sortviz
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: plain [`sortviz_core::Snapshot`] frames shipped from the run
//!   controller's thread
//! - **View functions**: take a snapshot, return `Element<Message>`
//! - **Canvas Programs**: custom bar rendering
//! - **Subscriptions**: bridge the controller's mpsc channel into iced

pub mod bars;
pub mod subscription;
pub mod theme;

pub use bars::{bar_chart, bar_geometry, BarChart, BarRect};
pub use subscription::channel_subscription;
pub use theme::{BACKGROUND_COLOR, BAR_COLOR, BAR_GAP, HIGHLIGHT_COLOR, TOP_MARGIN};
