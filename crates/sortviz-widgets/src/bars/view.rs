//! View function for the bar chart

use iced::widget::Canvas;
use iced::{Element, Length};
use sortviz_core::Snapshot;

use super::canvas::BarChart;

/// Create a bar chart element of the given size
pub fn bar_chart<'a, Message>(snapshot: &'a Snapshot, width: f32, height: f32) -> Element<'a, Message>
where
    Message: 'a,
{
    Canvas::new(BarChart { snapshot })
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}
