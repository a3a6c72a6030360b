//! Shared theme constants for the bar chart

use iced::Color;

/// Canvas background
pub const BACKGROUND_COLOR: Color = Color::BLACK;

/// Bars not involved in the current step
pub const BAR_COLOR: Color = Color::WHITE;

/// Bars under comparison or being written
pub const HIGHLIGHT_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);

/// Horizontal gap between bars in pixels
pub const BAR_GAP: f32 = 2.0;

/// Headroom above the tallest bar in pixels
pub const TOP_MARGIN: f32 = 50.0;
