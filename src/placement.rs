//! Grid auto-placement.
//!
//! A child that names neither a row nor a column is placed automatically at the grid's cursor,
//! which then advances in row-major order, wrapping at the grid's column count. A child that
//! names either one is placed manually and leaves the cursor alone. Manual and automatic
//! placements are not checked against each other and may overlap.

use crate::cell::CellArea;
use crate::codec::read_int;
use crate::params;
use crate::tree::VisualTreeNode;
use cgmath::{Point2, Vector2};

/// The next cell an automatically placed child will occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlacementCursor {
    pub row: u32,
    pub col: u32,
}

impl PlacementCursor {
    pub fn new(row: u32, col: u32) -> PlacementCursor {
        PlacementCursor { row, col }
    }

    /// Loads the cursor of a grid node.
    ///
    /// Nodes that have never auto-placed a child are seeded from their cursor parameters, if any;
    /// absent or negative values count as zero.
    pub fn load(node: &VisualTreeNode) -> PlacementCursor {
        if let Some(cursor) = node.placement_cursor() {
            return cursor;
        }
        let row = read_int(params::GRID_CURRENT_ROW, node, -1).max(0) as u32;
        let col = read_int(params::GRID_CURRENT_COL, node, -1).max(0) as u32;
        PlacementCursor { row, col }
    }

    /// Stores the cursor on a grid node, mirroring it into the cursor parameters.
    pub(crate) fn store(self, node: &mut VisualTreeNode) {
        node.set_placement_cursor(self);
        node.set_additional_parameter(params::GRID_CURRENT_ROW, self.row.to_string());
        node.set_additional_parameter(params::GRID_CURRENT_COL, self.col.to_string());
    }

    /// Advances the cursor by `steps` cells, one at a time, wrapping to the next row whenever the
    /// column reaches `columns`.
    pub fn advance(self, steps: u32, columns: u32) -> PlacementCursor {
        let mut cursor = self;
        for _ in 0..steps {
            cursor.col += 1;
            if cursor.col >= columns {
                cursor.col = 0;
                cursor.row += 1;
            }
        }
        cursor
    }
}

/// Placement hints of a child, as given.
///
/// Negative row or column means "unspecified"; spans below one mean one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementRequest {
    pub row: i32,
    pub column: i32,
    pub row_span: i32,
    pub col_span: i32,
}

impl Default for PlacementRequest {
    fn default() -> PlacementRequest {
        PlacementRequest {
            row: -1,
            column: -1,
            row_span: -1,
            col_span: -1,
        }
    }
}

impl PlacementRequest {
    /// Reads the hints from a child node's parameters.
    pub fn read(node: &VisualTreeNode) -> PlacementRequest {
        PlacementRequest {
            row: read_int(params::GRID_ROW, node, -1),
            column: read_int(params::GRID_COLUMN, node, -1),
            row_span: read_int(params::GRID_ROW_SPAN, node, -1),
            col_span: read_int(params::GRID_COLUMN_SPAN, node, -1),
        }
    }

    /// Returns true if neither row nor column was given.
    pub fn is_automatic(&self) -> bool {
        self.row < 0 && self.column < 0
    }
}

/// A resolved placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub area: CellArea,
    /// The advanced cursor; `None` for manual placements, which don't touch it.
    pub next_cursor: Option<PlacementCursor>,
}

/// Resolves a request against the grid's cursor and column count.
pub fn place(request: PlacementRequest, cursor: PlacementCursor, columns: u32) -> Placement {
    let span = |s: i32| s.max(1) as u32;
    let row_span = span(request.row_span);
    let col_span = span(request.col_span);

    if request.is_automatic() {
        Placement {
            area: CellArea::new(
                Point2::new(cursor.col, cursor.row),
                Vector2::new(col_span, row_span),
            ),
            next_cursor: Some(cursor.advance(col_span, columns)),
        }
    } else {
        let row = request.row.max(0) as u32;
        let col = request.column.max(0) as u32;
        Placement {
            area: CellArea::new(Point2::new(col, row), Vector2::new(col_span, row_span)),
            next_cursor: None,
        }
    }
}

#[cfg(test)]
fn auto(col_span: i32) -> PlacementRequest {
    PlacementRequest {
        col_span,
        ..PlacementRequest::default()
    }
}

#[test]
fn test_automatic_placement_wraps_row_major() {
    for columns in 1..=4 {
        let mut cursor = PlacementCursor::default();
        let mut cells = Vec::new();
        for _ in 0..(columns * 3) {
            let placement = place(auto(-1), cursor, columns);
            cells.push((placement.area.col(), placement.area.row()));
            cursor = placement.next_cursor.expect("automatic placement should advance");
        }
        let expected: Vec<_> = (0..columns * 3)
            .map(|i| (i % columns, i / columns))
            .collect();
        assert_eq!(cells, expected, "wrap order for {} columns", columns);
    }
}

#[test]
fn test_spanning_advance_wraps_per_unit() {
    let placement = place(auto(3), PlacementCursor::new(0, 1), 2);
    assert_eq!(placement.area.origin, Point2::new(1, 0));
    assert_eq!(placement.area.span, Vector2::new(3, 1));
    // 1 -> wrap, 0 -> 1, 1 -> wrap
    assert_eq!(placement.next_cursor, Some(PlacementCursor::new(2, 0)));

    let placement = place(auto(2), PlacementCursor::new(0, 1), 4);
    assert_eq!(placement.area.end(), Point2::new(2, 0));
    assert_eq!(placement.next_cursor, Some(PlacementCursor::new(0, 3)));
}

#[test]
fn test_zero_span_counts_as_one() {
    let placement = place(auto(0), PlacementCursor::default(), 3);
    assert_eq!(placement.area.span, Vector2::new(1, 1));
    assert_eq!(placement.next_cursor, Some(PlacementCursor::new(0, 1)));
}

#[test]
fn test_manual_placement_ignores_cursor() {
    let request = PlacementRequest {
        row: 2,
        column: 1,
        ..PlacementRequest::default()
    };
    let placement = place(request, PlacementCursor::new(5, 5), 3);
    assert_eq!(placement.area, CellArea::single(1, 2));
    assert_eq!(placement.next_cursor, None);

    let request = PlacementRequest {
        row: 3,
        row_span: 2,
        col_span: 2,
        ..PlacementRequest::default()
    };
    let placement = place(request, PlacementCursor::default(), 3);
    assert_eq!(placement.area.origin, Point2::new(0, 3));
    assert_eq!(placement.area.end(), Point2::new(1, 4));
    assert_eq!(placement.next_cursor, None);
}
