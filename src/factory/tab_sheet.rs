use super::{invalid_parent, ElementFactory};
use crate::component::{Component, ComponentKind};
use crate::error::FactoryError;
use crate::params;
use crate::toolkit::TabContainer;
use crate::tree::{NodeId, VisualTree};

/// Appends every child as a new tab, captioned by its `TabSheet.caption` parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabSheetFactory;

impl ElementFactory for TabSheetFactory {
    fn class_name(&self) -> &'static str {
        ComponentKind::TabSheet.class_name()
    }

    fn add_component_to_parent(
        &self,
        tree: &mut VisualTree,
        parent: NodeId,
        child: NodeId,
    ) -> Result<(), FactoryError> {
        let child_node = tree.get(child)?;
        let component = child_node.component_id();
        let caption = child_node
            .get_additional_parameter(params::TAB_CAPTION, "")
            .to_string();

        match tree.get_mut(parent)?.component_mut() {
            Component::TabSheet(sheet) => {
                let index = sheet.add_tab(component, &caption);
                tracing::debug!("added {} as tab {} of {}", child, index, parent);
                Ok(())
            }
            other => Err(invalid_parent(ComponentKind::TabSheet, other)),
        }
    }
}

#[cfg(test)]
use crate::toolkit::{GridLayout, Label, TabSheet};

#[test]
fn test_tabs_keep_source_order() {
    let mut tree = VisualTree::new();
    let sheet = tree.set_root(TabSheet::new());
    let first = tree.add_child(sheet, Label::new("one")).unwrap();
    tree.set_parameter(first, params::TAB_CAPTION, "General").unwrap();
    let second = tree.add_child(sheet, Label::new("two")).unwrap();

    TabSheetFactory
        .add_component_to_parent(&mut tree, sheet, first)
        .unwrap();
    TabSheetFactory
        .add_component_to_parent(&mut tree, sheet, second)
        .unwrap();

    let tabs = match tree.get(sheet).unwrap().component() {
        Component::TabSheet(sheet) => sheet.tabs().to_vec(),
        other => panic!("expected a tab sheet, got {:?}", other),
    };
    let summary: Vec<_> = tabs
        .iter()
        .map(|tab| (tab.component, tab.caption.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (tree.get(first).unwrap().component_id(), "General"),
            (tree.get(second).unwrap().component_id(), ""),
        ]
    );
}

#[test]
fn test_rejects_other_parents() {
    let mut tree = VisualTree::new();
    let grid = tree.set_root(GridLayout::default());
    let child = tree.add_child(grid, Label::default()).unwrap();

    assert_eq!(
        TabSheetFactory.add_component_to_parent(&mut tree, grid, child),
        Err(FactoryError::InvalidParentKind {
            expected: "perch.ui.TabSheet",
            actual: "perch.ui.GridLayout",
        })
    );
    assert_eq!(
        tree.get(grid).unwrap().component(),
        &Component::GridLayout(GridLayout::default())
    );
}

#[test]
fn test_class_name_match_is_exact() {
    assert!(TabSheetFactory.is_class_supported_for_element_factory("perch.ui.TabSheet"));
    assert!(!TabSheetFactory.is_class_supported_for_element_factory("perch.ui.tabsheet"));
    assert!(!TabSheetFactory.is_class_supported_for_element_factory("TabSheet"));
}
