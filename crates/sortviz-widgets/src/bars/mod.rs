//! Bar chart of the permutation with highlighted bars

mod canvas;
mod view;

pub use canvas::{bar_geometry, BarChart, BarRect};
pub use view::bar_chart;
