//! Element factories.
//!
//! An element factory knows how to attach a child's realized component to one specific kind of
//! parent container. The dispatcher picks a factory by the parent's class name, then calls
//! [`ElementFactory::add_component_to_parent`] followed by [`ElementFactory::process_events`] once
//! for every child, in source order.

use crate::component::{Component, ComponentKind};
use crate::error::FactoryError;
use crate::tree::{NodeId, VisualTree};
use core::any::Any;

mod grid;
mod ordered;
mod tab_sheet;

pub use grid::GridLayoutFactory;
pub use ordered::OrderedLayoutFactory;
pub use tab_sheet::TabSheetFactory;

/// Attaches children to one kind of parent container.
pub trait ElementFactory: Send + Sync {
    /// The canonical class name this factory handles.
    fn class_name(&self) -> &'static str;

    /// Returns true if this factory handles parents of the given class.
    ///
    /// Only an exact match counts.
    fn is_class_supported_for_element_factory(&self, class_name: &str) -> bool {
        class_name == self.class_name()
    }

    /// Attaches `child`'s component to `parent`'s component.
    ///
    /// Fails with [`FactoryError::InvalidParentKind`] without touching the tree if the parent's
    /// component isn't what this factory expects, even if the class name matched.
    fn add_component_to_parent(
        &self,
        tree: &mut VisualTree,
        parent: NodeId,
        child: NodeId,
    ) -> Result<(), FactoryError>;

    /// Wires event handlers for an attached child.
    ///
    /// Does nothing by default.
    fn process_events(
        &self,
        tree: &VisualTree,
        child: NodeId,
        event_handler_target: &mut dyn Any,
    ) -> Result<(), FactoryError> {
        drop((tree, child, event_handler_target));
        Ok(())
    }
}

/// Builds the error for a parent whose component doesn't match the factory.
pub(crate) fn invalid_parent(expected: ComponentKind, actual: &Component) -> FactoryError {
    FactoryError::InvalidParentKind {
        expected: expected.class_name(),
        actual: actual.kind().class_name(),
    }
}

/// The set of factories known to a dispatcher.
pub struct ElementFactories {
    factories: Vec<Box<dyn ElementFactory>>,
}

impl ElementFactories {
    /// An empty set.
    pub fn new() -> ElementFactories {
        ElementFactories {
            factories: Vec::new(),
        }
    }

    /// All factories in this crate.
    pub fn standard() -> ElementFactories {
        let mut factories = ElementFactories::new();
        factories.register(GridLayoutFactory);
        factories.register(TabSheetFactory);
        factories.register(OrderedLayoutFactory::vertical());
        factories.register(OrderedLayoutFactory::horizontal());
        factories
    }

    /// Adds a factory. Earlier registrations take precedence.
    pub fn register<F: ElementFactory + 'static>(&mut self, factory: F) {
        self.factories.push(Box::new(factory));
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Finds the factory for a class name.
    pub fn find(&self, class_name: &str) -> Option<&dyn ElementFactory> {
        self.factories
            .iter()
            .find(|factory| factory.is_class_supported_for_element_factory(class_name))
            .map(|factory| &**factory)
    }

    /// Finds the factory for a component kind.
    pub fn for_kind(&self, kind: ComponentKind) -> Option<&dyn ElementFactory> {
        self.find(kind.class_name())
    }
}

impl Default for ElementFactories {
    fn default() -> ElementFactories {
        ElementFactories::standard()
    }
}

#[test]
fn test_standard_factories() {
    let factories = ElementFactories::standard();
    assert_eq!(factories.len(), 4);

    for kind in &[
        ComponentKind::GridLayout,
        ComponentKind::TabSheet,
        ComponentKind::VerticalLayout,
        ComponentKind::HorizontalLayout,
    ] {
        let factory = factories
            .for_kind(*kind)
            .expect("container kinds should have a factory");
        assert_eq!(factory.class_name(), kind.class_name());
    }

    assert!(factories.for_kind(ComponentKind::Label).is_none());
    assert!(factories.find("perch.ui").is_none(), "prefixes should not match");
    assert!(
        factories.find("perch.ui.GridLayoutExtended").is_none(),
        "subclass-like names should not match"
    );
}
