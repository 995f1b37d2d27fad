use super::{invalid_parent, ElementFactory};
use crate::codec::{parse_alignment, parse_expand_ratios};
use crate::component::{Component, ComponentKind};
use crate::error::FactoryError;
use crate::params;
use crate::placement::{place, PlacementCursor, PlacementRequest};
use crate::toolkit::GridContainer;
use crate::tree::{NodeId, VisualTree};

/// Places children on a grid layout, automatically or at explicit cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayoutFactory;

impl ElementFactory for GridLayoutFactory {
    fn class_name(&self) -> &'static str {
        ComponentKind::GridLayout.class_name()
    }

    fn add_component_to_parent(
        &self,
        tree: &mut VisualTree,
        parent: NodeId,
        child: NodeId,
    ) -> Result<(), FactoryError> {
        let child_node = tree.get(child)?;
        let component = child_node.component_id();
        let request = PlacementRequest::read(child_node);
        let alignment = parse_alignment(child_node.get_additional_parameter(params::ALIGNMENT, ""));

        let parent_node = tree.get_mut(parent)?;
        let columns = match parent_node.component() {
            Component::GridLayout(grid) => grid.columns(),
            other => return Err(invalid_parent(ComponentKind::GridLayout, other)),
        };

        let placement = place(request, PlacementCursor::load(parent_node), columns);
        if let Some(cursor) = placement.next_cursor {
            cursor.store(parent_node);
        }

        let row_ratios =
            parse_expand_ratios(parent_node.get_additional_parameter(params::ROW_EXPAND_RATIO, ""));
        let column_ratios = parse_expand_ratios(
            parent_node.get_additional_parameter(params::COLUMN_EXPAND_RATIO, ""),
        );

        let area = placement.area;
        let (col, row) = (area.col(), area.row());
        tracing::debug!(
            "placing {} at column {}, row {} ({}x{}) in grid {}",
            child,
            col,
            row,
            area.col_span(),
            area.row_span(),
            parent
        );

        let grid = match parent_node.component_mut() {
            Component::GridLayout(grid) => grid,
            other => return Err(invalid_parent(ComponentKind::GridLayout, other)),
        };

        if row >= grid.rows() {
            grid.set_rows(row + 1);
        }
        if col >= grid.columns() {
            grid.set_columns(col + 1);
        }

        if area.is_spanning() {
            let end = area.end();
            grid.add_component_spanning(component, col, row, end.x, end.y)?;
        } else {
            grid.add_component(component, col, row)?;
        }
        grid.set_component_alignment(component, alignment)?;

        if let Some(ratio) = row_ratios.get(row as usize) {
            grid.set_row_expand_ratio(row, *ratio);
        }
        if let Some(ratio) = column_ratios.get(col as usize) {
            grid.set_column_expand_ratio(col, *ratio);
        }

        Ok(())
    }
}

#[cfg(test)]
use crate::cell::CellArea;
#[cfg(test)]
use crate::toolkit::{Alignment, GridLayout, Label, TabSheet};

#[cfg(test)]
fn grid_of(tree: &VisualTree, id: NodeId) -> &GridLayout {
    match tree.get(id).unwrap().component() {
        Component::GridLayout(grid) => grid,
        other => panic!("expected a grid, got {:?}", other),
    }
}

#[cfg(test)]
fn add(tree: &mut VisualTree, grid: NodeId, hints: &[(&str, &str)]) -> NodeId {
    let child = tree.add_child(grid, Label::default()).unwrap();
    for (name, value) in hints {
        tree.set_parameter(child, *name, *value).unwrap();
    }
    GridLayoutFactory
        .add_component_to_parent(tree, grid, child)
        .unwrap();
    child
}

#[cfg(test)]
fn area(tree: &VisualTree, grid: NodeId, child: NodeId) -> CellArea {
    let component = tree.get(child).unwrap().component_id();
    grid_of(tree, grid).area_of(component).unwrap()
}

#[test]
fn test_auto_placement_fills_rows_and_grows() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(3, 1));

    let children: Vec<_> = (0..7).map(|_| add(&mut tree, grid, &[])).collect();
    let cells: Vec<_> = children
        .iter()
        .map(|c| {
            let a = area(&tree, grid, *c);
            (a.col(), a.row())
        })
        .collect();
    assert_eq!(
        cells,
        vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2)]
    );
    assert_eq!(grid_of(&tree, grid).rows(), 3);
    assert_eq!(grid_of(&tree, grid).columns(), 3);

    let node = tree.get(grid).unwrap();
    assert_eq!(node.placement_cursor(), Some(PlacementCursor::new(2, 1)));
    assert_eq!(node.get_additional_parameter(params::GRID_CURRENT_ROW, ""), "2");
    assert_eq!(node.get_additional_parameter(params::GRID_CURRENT_COL, ""), "1");
}

#[test]
fn test_manual_placement_leaves_cursor_alone() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(3, 1));

    let first = add(&mut tree, grid, &[]);
    let manual = add(
        &mut tree,
        grid,
        &[(params::GRID_ROW, "2"), (params::GRID_COLUMN, "1")],
    );
    {
        let node = tree.get(grid).unwrap();
        assert_eq!(node.placement_cursor(), Some(PlacementCursor::new(0, 1)));
        assert_eq!(node.get_additional_parameter(params::GRID_CURRENT_COL, ""), "1");
    }
    let next = add(&mut tree, grid, &[]);

    assert_eq!(area(&tree, grid, first), CellArea::single(0, 0));
    assert_eq!(area(&tree, grid, manual), CellArea::single(1, 2));
    assert_eq!(area(&tree, grid, next), CellArea::single(1, 0));
    assert_eq!(grid_of(&tree, grid).rows(), 3, "manual row should grow the grid");
}

#[test]
fn test_manual_placement_never_touches_cursor_parameters() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(2, 1));
    add(&mut tree, grid, &[(params::GRID_ROW, "2"), (params::GRID_COLUMN, "1")]);

    let node = tree.get(grid).unwrap();
    assert_eq!(node.placement_cursor(), None);
    assert!(!node.has_additional_parameter(params::GRID_CURRENT_ROW));
    assert!(!node.has_additional_parameter(params::GRID_CURRENT_COL));
}

#[test]
fn test_single_hint_is_manual() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(2, 1));
    let child = add(&mut tree, grid, &[(params::GRID_COLUMN, "1")]);
    assert_eq!(area(&tree, grid, child), CellArea::single(1, 0));
    assert_eq!(tree.get(grid).unwrap().placement_cursor(), None);
}

#[test]
fn test_malformed_hints_fall_back_to_zero() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(2, 2));
    // a malformed row reads as 0, which makes this a manual placement
    let child = add(&mut tree, grid, &[(params::GRID_ROW, "first")]);
    assert_eq!(area(&tree, grid, child), CellArea::single(0, 0));
    assert_eq!(tree.get(grid).unwrap().placement_cursor(), None);
}

#[test]
fn test_spans_and_alignment() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(3, 3));
    let child = add(
        &mut tree,
        grid,
        &[
            (params::GRID_ROW, "1"),
            (params::GRID_COLUMN, "0"),
            (params::GRID_ROW_SPAN, "2"),
            (params::GRID_COLUMN_SPAN, "3"),
            (params::ALIGNMENT, "middle_center"),
        ],
    );
    assert_eq!(area(&tree, grid, child), CellArea::from_corners(0, 1, 2, 2));
    let component = tree.get(child).unwrap().component_id();
    assert_eq!(
        grid_of(&tree, grid).alignment_of(component),
        Some(Alignment::MiddleCenter)
    );
}

#[test]
fn test_auto_span_past_last_column_is_rejected_after_cursor_moves() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(2, 1));
    add(&mut tree, grid, &[]);

    let child = tree.add_child(grid, Label::default()).unwrap();
    tree.set_parameter(child, params::GRID_COLUMN_SPAN, "3").unwrap();
    let result = GridLayoutFactory.add_component_to_parent(&mut tree, grid, child);

    assert!(matches!(result, Err(FactoryError::Toolkit(_))));
    assert_eq!(
        tree.get(grid).unwrap().placement_cursor(),
        Some(PlacementCursor::new(2, 0)),
        "cursor should have advanced by three single steps"
    );
}

#[test]
fn test_expand_ratios_apply_to_resolved_indices() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(3, 1));
    tree.set_parameter(grid, params::ROW_EXPAND_RATIO, "2.0").unwrap();
    tree.set_parameter(grid, params::COLUMN_EXPAND_RATIO, "0.5,bad")
        .unwrap();

    for _ in 0..4 {
        add(&mut tree, grid, &[]);
    }

    let layout = grid_of(&tree, grid);
    assert_eq!(layout.row_expand_ratio(0), 2.0);
    assert_eq!(layout.row_expand_ratio(1), 0.0);
    assert_eq!(layout.column_expand_ratio(0), 0.5);
    assert_eq!(layout.column_expand_ratio(1), 0.0);
    assert_eq!(layout.column_expand_ratio(2), 0.0);
}

#[test]
fn test_cursor_seeded_from_parameters() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(3, 3));
    tree.set_parameter(grid, params::GRID_CURRENT_ROW, "1").unwrap();
    tree.set_parameter(grid, params::GRID_CURRENT_COL, "2").unwrap();

    let child = add(&mut tree, grid, &[]);
    assert_eq!(area(&tree, grid, child), CellArea::single(2, 1));
    assert_eq!(
        tree.get(grid).unwrap().placement_cursor(),
        Some(PlacementCursor::new(2, 0))
    );
}

#[test]
fn test_wrong_parent_is_rejected_untouched() {
    let mut tree = VisualTree::new();
    let sheet = tree.set_root(TabSheet::new());
    let child = tree.add_child(sheet, Label::default()).unwrap();

    let err = GridLayoutFactory
        .add_component_to_parent(&mut tree, sheet, child)
        .unwrap_err();
    assert_eq!(
        err,
        FactoryError::InvalidParentKind {
            expected: "perch.ui.GridLayout",
            actual: "perch.ui.TabSheet",
        }
    );

    let node = tree.get(sheet).unwrap();
    assert_eq!(node.placement_cursor(), None);
    assert!(!node.has_additional_parameter(params::GRID_CURRENT_ROW));
    assert_eq!(node.component(), &Component::TabSheet(TabSheet::new()));
}
