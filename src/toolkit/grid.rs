use super::{Alignment, GridContainer};
use crate::cell::CellArea;
use crate::component::ComponentId;
use crate::error::ToolkitError;
use std::collections::{BTreeMap, HashMap};

/// A component placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub component: ComponentId,
    pub area: CellArea,
}

/// A grid layout.
///
/// Occupancy is not exclusive: placing a component over an occupied cell is allowed, and the most
/// recent placement wins for lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    columns: u32,
    rows: u32,
    cells: Vec<GridCell>,
    alignments: HashMap<ComponentId, Alignment>,
    row_expand_ratios: BTreeMap<u32, f32>,
    column_expand_ratios: BTreeMap<u32, f32>,
}

impl Default for GridLayout {
    fn default() -> GridLayout {
        GridLayout::new(1, 1)
    }
}

impl GridLayout {
    /// Creates an empty grid. Both dimensions are at least one.
    pub fn new(columns: u32, rows: u32) -> GridLayout {
        GridLayout {
            columns: columns.max(1),
            rows: rows.max(1),
            cells: Vec::new(),
            alignments: HashMap::new(),
            row_expand_ratios: BTreeMap::new(),
            column_expand_ratios: BTreeMap::new(),
        }
    }

    /// Placed components in insertion order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The area a component occupies.
    pub fn area_of(&self, component: ComponentId) -> Option<CellArea> {
        self.cells
            .iter()
            .find(|cell| cell.component == component)
            .map(|cell| cell.area)
    }

    /// The most recently placed component covering a cell.
    pub fn component_at(&self, col: u32, row: u32) -> Option<ComponentId> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.area.contains(col, row))
            .map(|cell| cell.component)
    }

    pub fn alignment_of(&self, component: ComponentId) -> Option<Alignment> {
        self.alignments.get(&component).copied()
    }

    /// Expand ratio of a row; zero if never set.
    pub fn row_expand_ratio(&self, row: u32) -> f32 {
        self.row_expand_ratios.get(&row).copied().unwrap_or(0.)
    }

    /// Expand ratio of a column; zero if never set.
    pub fn column_expand_ratio(&self, col: u32) -> f32 {
        self.column_expand_ratios.get(&col).copied().unwrap_or(0.)
    }

    fn place(&mut self, component: ComponentId, area: CellArea) -> Result<(), ToolkitError> {
        let end = area.end();
        if end.x >= self.columns || end.y >= self.rows {
            return Err(ToolkitError::OutOfBounds {
                col1: area.col(),
                row1: area.row(),
                col2: end.x,
                row2: end.y,
                columns: self.columns,
                rows: self.rows,
            });
        }

        // re-adding moves the component
        self.cells.retain(|cell| cell.component != component);
        self.cells.push(GridCell { component, area });
        Ok(())
    }
}

impl GridContainer for GridLayout {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn set_rows(&mut self, rows: u32) {
        self.rows = rows.max(1);
    }

    fn columns(&self) -> u32 {
        self.columns
    }

    fn set_columns(&mut self, columns: u32) {
        self.columns = columns.max(1);
    }

    fn add_component(
        &mut self,
        component: ComponentId,
        col: u32,
        row: u32,
    ) -> Result<(), ToolkitError> {
        self.place(component, CellArea::single(col, row))
    }

    fn add_component_spanning(
        &mut self,
        component: ComponentId,
        col1: u32,
        row1: u32,
        col2: u32,
        row2: u32,
    ) -> Result<(), ToolkitError> {
        self.place(component, CellArea::from_corners(col1, row1, col2, row2))
    }

    fn set_component_alignment(
        &mut self,
        component: ComponentId,
        alignment: Alignment,
    ) -> Result<(), ToolkitError> {
        if self.area_of(component).is_none() {
            return Err(ToolkitError::UnknownComponent(component));
        }
        self.alignments.insert(component, alignment);
        Ok(())
    }

    fn set_row_expand_ratio(&mut self, row: u32, ratio: f32) {
        self.row_expand_ratios.insert(row, ratio);
    }

    fn set_column_expand_ratio(&mut self, col: u32, ratio: f32) {
        self.column_expand_ratios.insert(col, ratio);
    }
}

#[test]
fn test_rejects_areas_outside_bounds() {
    let mut grid = GridLayout::new(2, 1);
    let id = ComponentId::new();
    let err = grid.add_component_spanning(id, 1, 0, 3, 0).unwrap_err();
    assert_eq!(
        err,
        ToolkitError::OutOfBounds {
            col1: 1,
            row1: 0,
            col2: 3,
            row2: 0,
            columns: 2,
            rows: 1,
        }
    );
    assert!(grid.cells().is_empty());
}

#[test]
fn test_overlapping_placements_are_allowed() {
    let mut grid = GridLayout::new(2, 2);
    let (a, b) = (ComponentId::new(), ComponentId::new());
    grid.add_component_spanning(a, 0, 0, 1, 1).unwrap();
    grid.add_component(b, 1, 1).unwrap();
    assert_eq!(grid.component_at(0, 0), Some(a));
    assert_eq!(grid.component_at(1, 1), Some(b));
    assert_eq!(grid.cells().len(), 2);
}

#[test]
fn test_alignment_requires_membership() {
    let mut grid = GridLayout::default();
    let id = ComponentId::new();
    assert_eq!(
        grid.set_component_alignment(id, Alignment::BottomRight),
        Err(ToolkitError::UnknownComponent(id))
    );
    grid.add_component(id, 0, 0).unwrap();
    grid.set_component_alignment(id, Alignment::BottomRight).unwrap();
    assert_eq!(grid.alignment_of(id), Some(Alignment::BottomRight));
}
