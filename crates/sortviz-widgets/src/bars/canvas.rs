//! Canvas Program for the bar chart

use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{mouse, Point, Rectangle, Size, Theme};
use sortviz_core::Snapshot;

use crate::theme::{BACKGROUND_COLOR, BAR_COLOR, BAR_GAP, HIGHLIGHT_COLOR, TOP_MARGIN};

/// One bar in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub highlighted: bool,
}

/// Lay out the snapshot's bars inside `bounds`
///
/// Bar `i` spans `[i * w, (i + 1) * w - gap]`; height is proportional to the
/// value, leaving `TOP_MARGIN` pixels above the tallest bar.
pub fn bar_geometry(snapshot: &Snapshot, bounds: Size) -> Vec<BarRect> {
    let count = snapshot.values.len();
    let max_value = snapshot.max_value();
    if count == 0 || max_value == 0 {
        return Vec::new();
    }

    let slot = bounds.width / count as f32;
    let usable = (bounds.height - TOP_MARGIN).max(0.0);

    snapshot
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height = value as f32 / max_value as f32 * usable;
            BarRect {
                x: i as f32 * slot,
                y: bounds.height - height,
                width: (slot - BAR_GAP).max(1.0),
                height,
                highlighted: snapshot.highlight.contains(i),
            }
        })
        .collect()
}

/// Canvas program drawing one snapshot
pub struct BarChart<'a> {
    pub snapshot: &'a Snapshot,
}

impl<'a, Message> Program<Message> for BarChart<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND_COLOR);

        for bar in bar_geometry(self.snapshot, bounds.size()) {
            let color = if bar.highlighted {
                HIGHLIGHT_COLOR
            } else {
                BAR_COLOR
            };
            frame.fill_rectangle(
                Point::new(bar.x, bar.y),
                Size::new(bar.width, bar.height),
                color,
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::Highlight;

    fn snapshot(values: Vec<u32>, highlight: Highlight) -> Snapshot {
        Snapshot {
            values,
            highlight,
            ..Default::default()
        }
    }

    #[test]
    fn test_layout_matches_canvas() {
        let bars = bar_geometry(
            &snapshot(vec![2, 4, 1, 3], Highlight::indices(&[1])),
            Size::new(800.0, 400.0),
        );
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[1].x, 200.0);
        assert_eq!(bars[1].width, 198.0);
        // Tallest bar leaves the top margin free
        assert_eq!(bars[1].height, 350.0);
        assert_eq!(bars[1].y, 50.0);
        assert_eq!(bars[2].height, 87.5);
        assert!(bars[1].highlighted);
        assert!(!bars[0].highlighted);
    }

    #[test]
    fn test_sweep_highlight_is_cumulative() {
        let bars = bar_geometry(
            &snapshot(vec![1, 2, 3], Highlight::Through(1)),
            Size::new(300.0, 200.0),
        );
        let marked: Vec<bool> = bars.iter().map(|b| b.highlighted).collect();
        assert_eq!(marked, vec![true, true, false]);
    }

    #[test]
    fn test_empty_snapshot_draws_nothing() {
        assert!(bar_geometry(&Snapshot::default(), Size::new(100.0, 100.0)).is_empty());
    }
}
