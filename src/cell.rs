//! Grid cell areas.

use cgmath::{Point2, Vector2};

/// A rectangular block of grid cells.
///
/// `x` is the column axis and `y` is the row axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellArea {
    /// Top left cell.
    pub origin: Point2<u32>,

    /// Number of columns and rows covered; never less than one on either axis.
    pub span: Vector2<u32>,
}

impl CellArea {
    /// Creates a new area. Spans below one are clamped to one.
    pub fn new(origin: Point2<u32>, span: Vector2<u32>) -> CellArea {
        CellArea {
            origin,
            span: Vector2::new(span.x.max(1), span.y.max(1)),
        }
    }

    /// A single cell.
    pub fn single(col: u32, row: u32) -> CellArea {
        CellArea::new(Point2::new(col, row), Vector2::new(1, 1))
    }

    /// An area between two inclusive corners, in any order.
    pub fn from_corners(col1: u32, row1: u32, col2: u32, row2: u32) -> CellArea {
        let (c1, c2) = (col1.min(col2), col1.max(col2));
        let (r1, r2) = (row1.min(row2), row1.max(row2));
        CellArea::new(Point2::new(c1, r1), Vector2::new(c2 - c1 + 1, r2 - r1 + 1))
    }

    pub fn col(&self) -> u32 {
        self.origin.x
    }

    pub fn row(&self) -> u32 {
        self.origin.y
    }

    pub fn col_span(&self) -> u32 {
        self.span.x
    }

    pub fn row_span(&self) -> u32 {
        self.span.y
    }

    /// Bottom right cell, inclusive.
    pub fn end(&self) -> Point2<u32> {
        self.origin + (self.span - Vector2::new(1, 1))
    }

    /// Returns true if the area covers more than one cell.
    pub fn is_spanning(&self) -> bool {
        self.span.x > 1 || self.span.y > 1
    }

    /// Returns true if the cell is inside the area.
    pub fn contains(&self, col: u32, row: u32) -> bool {
        let end = self.end();
        col >= self.origin.x && row >= self.origin.y && col <= end.x && row <= end.y
    }

    /// Returns true if the two areas share at least one cell.
    pub fn intersects(&self, other: CellArea) -> bool {
        let own_end = self.end();
        let other_end = other.end();

        self.origin.x <= other_end.x
            && self.origin.y <= other_end.y
            && other.origin.x <= own_end.x
            && other.origin.y <= own_end.y
    }
}

#[test]
fn test_spans_are_clamped() {
    let area = CellArea::new(Point2::new(2, 3), Vector2::new(0, 0));
    assert_eq!(area.span, Vector2::new(1, 1));
    assert_eq!(area.end(), Point2::new(2, 3));
    assert!(!area.is_spanning());
}

#[test]
fn test_corners_are_inclusive() {
    let area = CellArea::from_corners(3, 1, 1, 2);
    assert_eq!(area.origin, Point2::new(1, 1));
    assert_eq!(area.span, Vector2::new(3, 2));
    assert_eq!(area.end(), Point2::new(3, 2));
    assert!(area.contains(3, 2));
    assert!(!area.contains(4, 2));
}

#[test]
fn test_intersection() {
    let a = CellArea::from_corners(0, 0, 1, 1);
    assert!(a.intersects(CellArea::single(1, 1)));
    assert!(!a.intersects(CellArea::single(2, 0)));
    assert!(CellArea::single(2, 0).intersects(CellArea::from_corners(0, 0, 3, 0)));
}
