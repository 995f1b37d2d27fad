use perch::params;
use perch::toolkit::{GridContainer, GridLayout, Label, OrderedLayout, TabSheet};
use perch::{Builder, CellArea, Component, FactoryError, VisualTree};

#[test]
fn builds_a_settings_form() {
    let mut tree = VisualTree::new();
    let tabs = tree.set_root(TabSheet::new());

    let form = tree.add_child(tabs, GridLayout::new(2, 1)).unwrap();
    tree.set_parameter(form, params::TAB_CAPTION, "Settings").unwrap();
    tree.set_parameter(form, params::COLUMN_EXPAND_RATIO, "0,1").unwrap();

    let mut labels = Vec::new();
    for text in &["Name", "Alice", "Email", "alice@example.com"] {
        labels.push(tree.add_child(form, Label::new(*text)).unwrap());
    }
    let footer = tree.add_child(form, OrderedLayout::horizontal()).unwrap();
    tree.set_parameter(footer, params::GRID_COLUMN_SPAN, "2").unwrap();
    tree.set_parameter(footer, params::GRID_ROW, "4").unwrap();
    let ok = tree.add_child(footer, Label::new("OK")).unwrap();
    tree.set_parameter(ok, params::ALIGNMENT, "middle_right").unwrap();

    let about = tree.add_child(tabs, Label::new("about")).unwrap();

    let report = Builder::default().build_tree(&mut tree, &mut ());
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
    assert_eq!(report.attached, 8);

    let id = |node| tree.get(node).unwrap().component_id();

    match tree.get(tabs).unwrap().component() {
        Component::TabSheet(sheet) => {
            let captions: Vec<_> = sheet.tabs().iter().map(|t| t.caption.as_str()).collect();
            assert_eq!(captions, vec!["Settings", ""]);
            assert_eq!(sheet.tabs()[1].component, id(about));
        }
        other => panic!("expected a tab sheet, got {:?}", other),
    }

    match tree.get(form).unwrap().component() {
        Component::GridLayout(grid) => {
            let cells: Vec<_> = labels
                .iter()
                .map(|l| grid.area_of(id(*l)).unwrap())
                .collect();
            assert_eq!(
                cells,
                vec![
                    CellArea::single(0, 0),
                    CellArea::single(1, 0),
                    CellArea::single(0, 1),
                    CellArea::single(1, 1),
                ]
            );
            assert_eq!(grid.area_of(id(footer)), Some(CellArea::from_corners(0, 4, 1, 4)));
            assert_eq!(grid.rows(), 5);
            assert_eq!(grid.columns(), 2);
            assert_eq!(grid.column_expand_ratio(1), 1.0);
        }
        other => panic!("expected a grid, got {:?}", other),
    }

    let form_node = tree.get(form).unwrap();
    assert_eq!(
        form_node.get_additional_parameter(params::GRID_CURRENT_ROW, ""),
        "2"
    );
    assert_eq!(
        form_node.get_additional_parameter(params::GRID_CURRENT_COL, ""),
        "0"
    );
}

#[test]
fn a_bad_edge_does_not_stop_the_build() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::new(2, 1));
    let wide = tree.add_child(grid, Label::new("too wide")).unwrap();
    tree.set_parameter(wide, params::GRID_COLUMN_SPAN, "3").unwrap();
    let next = tree.add_child(grid, Label::new("next")).unwrap();
    tree.set_parameter(next, params::GRID_ROW, "oops").unwrap();

    let report = Builder::default().build_tree(&mut tree, &mut ());
    assert_eq!(report.attached, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].child, wide);
    assert!(matches!(report.errors[0].error, FactoryError::Toolkit(_)));

    match tree.get(grid).unwrap().component() {
        Component::GridLayout(layout) => {
            let id = tree.get(next).unwrap().component_id();
            assert_eq!(layout.area_of(id), Some(CellArea::single(0, 0)));
        }
        other => panic!("expected a grid, got {:?}", other),
    }
}
