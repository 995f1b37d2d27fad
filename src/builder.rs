use crate::error::FactoryError;
use crate::factory::ElementFactories;
use crate::tree::{NodeId, VisualTree};
use core::any::Any;

/// A failed parent/child attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeError {
    pub parent: NodeId,
    pub child: NodeId,
    pub error: FactoryError,
}

/// Outcome of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of children attached successfully.
    pub attached: usize,
    /// Attachments that failed; the rest of the tree was still built.
    pub errors: Vec<EdgeError>,
}

impl BuildReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Connects the realized components of a visual tree using element factories.
pub struct Builder {
    factories: ElementFactories,
}

impl Builder {
    pub fn new(factories: ElementFactories) -> Builder {
        Builder { factories }
    }

    pub fn factories(&self) -> &ElementFactories {
        &self.factories
    }

    /// Attaches every node below `root` to its parent.
    ///
    /// Edges are visited depth-first, parents before children and siblings in source order. A
    /// failing edge is recorded in the report and skipped; its subtree is still built.
    pub fn build(
        &self,
        tree: &mut VisualTree,
        root: NodeId,
        event_handler_target: &mut dyn Any,
    ) -> BuildReport {
        let mut report = BuildReport::default();

        for (parent, child) in tree.edges(root) {
            tracing::trace!("visiting edge {} -> {}", parent, child);
            match self.attach(tree, parent, child, event_handler_target) {
                Ok(()) => report.attached += 1,
                Err(error) => {
                    tracing::debug!("could not attach {} to {}: {}", child, parent, error);
                    report.errors.push(EdgeError {
                        parent,
                        child,
                        error,
                    });
                }
            }
        }

        report
    }

    /// Builds the whole tree from its root.
    pub fn build_tree(&self, tree: &mut VisualTree, event_handler_target: &mut dyn Any) -> BuildReport {
        match tree.root() {
            Some(root) => self.build(tree, root, event_handler_target),
            None => BuildReport::default(),
        }
    }

    fn attach(
        &self,
        tree: &mut VisualTree,
        parent: NodeId,
        child: NodeId,
        event_handler_target: &mut dyn Any,
    ) -> Result<(), FactoryError> {
        let kind = tree.get(parent)?.kind();
        let factory = self
            .factories
            .for_kind(kind)
            .ok_or(FactoryError::NoFactory {
                class_name: kind.class_name(),
            })?;

        factory.add_component_to_parent(tree, parent, child)?;
        factory.process_events(tree, child, event_handler_target)
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new(ElementFactories::standard())
    }
}

#[test]
fn test_build_records_failed_edges() {
    use crate::component::Component;
    use crate::toolkit::{GridLayout, Label, TabSheet};

    let mut tree = VisualTree::new();
    let root = tree.set_root(TabSheet::new());
    let label = tree.add_child(root, Label::new("leaf")).unwrap();
    let orphan = tree.add_child(label, Label::new("cannot attach")).unwrap();
    let grid = tree.add_child(root, GridLayout::new(2, 1)).unwrap();
    let cell = tree.add_child(grid, Label::new("cell")).unwrap();

    let report = Builder::default().build_tree(&mut tree, &mut ());

    assert_eq!(report.attached, 3);
    assert_eq!(
        report.errors,
        vec![EdgeError {
            parent: label,
            child: orphan,
            error: FactoryError::NoFactory {
                class_name: "perch.ui.Label",
            },
        }]
    );
    assert!(!report.is_ok());

    match tree.get(grid).unwrap().component() {
        Component::GridLayout(layout) => {
            let id = tree.get(cell).unwrap().component_id();
            assert_eq!(layout.component_at(0, 0), Some(id));
        }
        other => panic!("expected a grid, got {:?}", other),
    }
}

#[test]
fn test_process_events_follows_each_attachment() {
    use crate::component::ComponentKind;
    use crate::error::ToolkitError;
    use crate::factory::ElementFactory;
    use crate::toolkit::{Label, TabSheet};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct RecordingFactory {
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl ElementFactory for RecordingFactory {
        fn class_name(&self) -> &'static str {
            ComponentKind::TabSheet.class_name()
        }

        fn add_component_to_parent(
            &self,
            tree: &mut VisualTree,
            _parent: NodeId,
            child: NodeId,
        ) -> Result<(), FactoryError> {
            self.log.lock().unwrap().push("add");
            let node = tree.get(child)?;
            if node.has_additional_parameter("fail") {
                return Err(ToolkitError::UnknownComponent(node.component_id()).into());
            }
            Ok(())
        }

        fn process_events(
            &self,
            _tree: &VisualTree,
            _child: NodeId,
            event_handler_target: &mut dyn Any,
        ) -> Result<(), FactoryError> {
            self.log.lock().unwrap().push("events");
            *event_handler_target
                .downcast_mut::<usize>()
                .expect("target should be a counter") += 1;
            Ok(())
        }
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut factories = ElementFactories::new();
    factories.register(RecordingFactory { log: Arc::clone(&log) });

    let mut tree = VisualTree::new();
    let root = tree.set_root(TabSheet::new());
    tree.add_child(root, Label::new("first")).unwrap();
    let broken = tree.add_child(root, Label::new("broken")).unwrap();
    tree.set_parameter(broken, "fail", "yes").unwrap();
    tree.add_child(root, Label::new("last")).unwrap();

    let mut handled = 0usize;
    let report = Builder::new(factories).build_tree(&mut tree, &mut handled);

    assert_eq!(report.attached, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].child, broken);
    assert_eq!(handled, 2, "each attached child should reach the target once");
    assert_eq!(
        *log.lock().unwrap(),
        vec!["add", "events", "add", "add", "events"],
        "events should follow a successful attachment and be skipped after a failed one"
    );
}
