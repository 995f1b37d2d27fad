use super::{invalid_parent, ElementFactory};
use crate::codec::{parse_alignment, parse_expand_ratio};
use crate::component::{Component, ComponentKind};
use crate::error::FactoryError;
use crate::params;
use crate::toolkit::{OrderedContainer, Orientation};
use crate::tree::{NodeId, VisualTree};

/// Appends children to a vertical or horizontal layout.
///
/// Each instance serves exactly one orientation.
#[derive(Debug, Clone, Copy)]
pub struct OrderedLayoutFactory {
    orientation: Orientation,
}

impl OrderedLayoutFactory {
    pub fn vertical() -> OrderedLayoutFactory {
        OrderedLayoutFactory {
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal() -> OrderedLayoutFactory {
        OrderedLayoutFactory {
            orientation: Orientation::Horizontal,
        }
    }

    fn kind(&self) -> ComponentKind {
        match self.orientation {
            Orientation::Vertical => ComponentKind::VerticalLayout,
            Orientation::Horizontal => ComponentKind::HorizontalLayout,
        }
    }
}

impl ElementFactory for OrderedLayoutFactory {
    fn class_name(&self) -> &'static str {
        self.kind().class_name()
    }

    fn add_component_to_parent(
        &self,
        tree: &mut VisualTree,
        parent: NodeId,
        child: NodeId,
    ) -> Result<(), FactoryError> {
        let child_node = tree.get(child)?;
        let component = child_node.component_id();
        let alignment = parse_alignment(child_node.get_additional_parameter(params::ALIGNMENT, ""));
        let ratio = if child_node.has_additional_parameter(params::EXPAND_RATIO) {
            Some(parse_expand_ratio(
                child_node.get_additional_parameter(params::EXPAND_RATIO, ""),
            ))
        } else {
            None
        };

        let parent_node = tree.get_mut(parent)?;
        if parent_node.component().kind() != self.kind() {
            return Err(invalid_parent(self.kind(), parent_node.component()));
        }
        let layout = match parent_node.component_mut() {
            Component::OrderedLayout(layout) => layout,
            other => return Err(invalid_parent(self.kind(), other)),
        };

        layout.add_component(component);
        layout.set_component_alignment(component, alignment)?;
        if let Some(ratio) = ratio {
            layout.set_expand_ratio(component, ratio)?;
        }
        tracing::debug!("appended {} to {}", child, parent);
        Ok(())
    }
}

#[cfg(test)]
use crate::toolkit::{Alignment, Label, OrderedLayout};

#[test]
fn test_appends_with_alignment_and_ratio() {
    let mut tree = VisualTree::new();
    let root = tree.set_root(OrderedLayout::vertical());
    let a = tree.add_child(root, Label::new("a")).unwrap();
    let b = tree.add_child(root, Label::new("b")).unwrap();
    tree.set_parameter(a, params::ALIGNMENT, "bottom_right").unwrap();
    tree.set_parameter(a, params::EXPAND_RATIO, "1.5").unwrap();

    let factory = OrderedLayoutFactory::vertical();
    factory.add_component_to_parent(&mut tree, root, a).unwrap();
    factory.add_component_to_parent(&mut tree, root, b).unwrap();

    let (ida, idb) = (
        tree.get(a).unwrap().component_id(),
        tree.get(b).unwrap().component_id(),
    );
    match tree.get(root).unwrap().component() {
        Component::OrderedLayout(layout) => {
            assert_eq!(layout.components(), &[ida, idb]);
            assert_eq!(layout.alignment_of(ida), Some(Alignment::BottomRight));
            assert_eq!(layout.alignment_of(idb), Some(Alignment::TopLeft));
            assert_eq!(layout.expand_ratio_of(ida), 1.5);
            assert_eq!(layout.expand_ratio_of(idb), 0.0);
        }
        other => panic!("expected an ordered layout, got {:?}", other),
    }
}

#[test]
fn test_orientation_must_match() {
    let mut tree = VisualTree::new();
    let root = tree.set_root(OrderedLayout::horizontal());
    let child = tree.add_child(root, Label::default()).unwrap();

    let factory = OrderedLayoutFactory::vertical();
    assert!(!factory.is_class_supported_for_element_factory("perch.ui.HorizontalLayout"));
    assert_eq!(
        factory.add_component_to_parent(&mut tree, root, child),
        Err(FactoryError::InvalidParentKind {
            expected: "perch.ui.VerticalLayout",
            actual: "perch.ui.HorizontalLayout",
        })
    );
}
