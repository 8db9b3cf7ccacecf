//! Pointer-to-cell mapping.
//!
//! The board is a 3x3 grid of equal cells, horizontally centered on the
//! screen and placed `top_margin` pixels from the top.

use crate::LayoutConfig;
use noughts_tictactoe::Position;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A pointer location in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f32,
    /// Vertical offset from the top edge.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Returns true if `point` lies inside or on the border.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Resolved cell geometry for one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    origin: Point,
    cell_width: f32,
    cell_height: f32,
}

impl BoardLayout {
    /// Computes the board origin from the configured geometry.
    #[instrument(skip(config))]
    pub fn new(config: &LayoutConfig) -> Self {
        let origin = Point::new(
            config.screen_width() / 2.0 - config.cell_width() * 1.5,
            *config.top_margin(),
        );
        trace!(?origin, "Board layout resolved");
        Self {
            origin,
            cell_width: *config.cell_width(),
            cell_height: *config.cell_height(),
        }
    }

    /// Top-left corner of the first cell.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Screen rectangle covered by `position`.
    pub fn cell_rect(&self, position: Position) -> Rect {
        Rect {
            x: self.origin.x + self.cell_width * position.col() as f32,
            y: self.origin.y + self.cell_height * position.row() as f32,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Finds the cell under `point`.
    ///
    /// Borders are shared between neighbours; a point on one resolves to
    /// the lower-indexed cell.
    #[instrument(skip(self))]
    pub fn hit_test(&self, point: Point) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.cell_rect(*pos).contains(point))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let layout = BoardLayout::default();
        assert_eq!(layout.origin(), Point::new(200.0, 60.0));
    }

    #[test]
    fn test_cell_rect_row_major() {
        let layout = BoardLayout::default();
        let rect = layout.cell_rect(Position::MiddleRight);
        assert_eq!(
            rect,
            Rect {
                x: 360.0,
                y: 150.0,
                width: 80.0,
                height: 90.0
            }
        );
    }

    #[test]
    fn test_hit_test_cell_interiors() {
        let layout = BoardLayout::default();
        for pos in Position::ALL {
            let rect = layout.cell_rect(pos);
            let center = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            assert_eq!(layout.hit_test(center), Some(pos));
        }
    }

    #[test]
    fn test_hit_test_shared_border_prefers_lower_index() {
        let layout = BoardLayout::default();
        // Vertical border between cells 0 and 1.
        assert_eq!(layout.hit_test(Point::new(280.0, 100.0)), Some(Position::TopLeft));
        // Corner shared by cells 4, 5, 7 and 8.
        assert_eq!(layout.hit_test(Point::new(360.0, 240.0)), Some(Position::Center));
    }

    #[test]
    fn test_hit_test_outside_board() {
        let layout = BoardLayout::default();
        assert_eq!(layout.hit_test(Point::new(199.0, 100.0)), None);
        assert_eq!(layout.hit_test(Point::new(300.0, 59.5)), None);
        assert_eq!(layout.hit_test(Point::new(441.0, 331.0)), None);
    }

    #[test]
    fn test_outer_edges_are_inclusive() {
        let layout = BoardLayout::default();
        assert_eq!(layout.hit_test(Point::new(200.0, 60.0)), Some(Position::TopLeft));
        assert_eq!(layout.hit_test(Point::new(440.0, 330.0)), Some(Position::BottomRight));
    }
}
