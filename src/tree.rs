use crate::component::{Component, ComponentId, ComponentKind};
use crate::error::FactoryError;
use crate::placement::PlacementCursor;
use core::fmt;
use std::collections::HashMap;
use uuid::Uuid;

/// A unique identifier for a visual tree node.
///
/// (this is just a UUID)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32, u16, u16, [u8; 8]);

impl NodeId {
    pub(crate) fn new() -> NodeId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        NodeId(a, b, c, *d)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:08x}-{:04x}-{:04x}", self.0, self.1, self.2)
    }
}

/// A node in the visual tree: a realized component plus its string parameters.
#[derive(Debug, Clone)]
pub struct VisualTreeNode {
    component_id: ComponentId,
    kind: ComponentKind,
    component: Component,
    parameters: HashMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Auto-placement cursor, if this node is a grid that has placed children.
    placement: Option<PlacementCursor>,
}

impl VisualTreeNode {
    fn new(component: Component, parent: Option<NodeId>) -> VisualTreeNode {
        VisualTreeNode {
            component_id: ComponentId::new(),
            kind: component.kind(),
            component,
            parameters: HashMap::new(),
            parent,
            children: Vec::new(),
            placement: None,
        }
    }

    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }

    /// Component kind as it was when the node was created.
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the parameter value, or `default` if it isn't set.
    pub fn get_additional_parameter<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.parameters
            .get(name)
            .map(String::as_str)
            .unwrap_or(default)
    }

    pub fn has_additional_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn set_additional_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn placement_cursor(&self) -> Option<PlacementCursor> {
        self.placement
    }

    pub(crate) fn set_placement_cursor(&mut self, cursor: PlacementCursor) {
        self.placement = Some(cursor);
    }
}

/// A tree of visual nodes, built before any factory runs.
#[derive(Debug, Default)]
pub struct VisualTree {
    nodes: HashMap<NodeId, VisualTreeNode>,
    root: Option<NodeId>,
}

impl VisualTree {
    pub fn new() -> VisualTree {
        VisualTree::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sets the root node, replacing (and dropping) any existing tree.
    pub fn set_root(&mut self, component: impl Into<Component>) -> NodeId {
        self.nodes.clear();
        let id = NodeId::new();
        self.nodes
            .insert(id, VisualTreeNode::new(component.into(), None));
        self.root = Some(id);
        id
    }

    /// Appends a child node to `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        component: impl Into<Component>,
    ) -> Result<NodeId, FactoryError> {
        let id = NodeId::new();
        self.get_mut(parent)?.children.push(id);
        self.nodes
            .insert(id, VisualTreeNode::new(component.into(), Some(parent)));
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Result<&VisualTreeNode, FactoryError> {
        self.nodes.get(&id).ok_or(FactoryError::NoSuchNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut VisualTreeNode, FactoryError> {
        self.nodes.get_mut(&id).ok_or(FactoryError::NoSuchNode(id))
    }

    /// Sets a parameter on a node.
    pub fn set_parameter(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), FactoryError> {
        self.get_mut(id)?.set_additional_parameter(name, value);
        Ok(())
    }

    /// Collects all parent/child edges below `id`, depth-first, in source order.
    pub fn edges(&self, id: NodeId) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::new();
        self.collect_edges(id, &mut edges);
        edges
    }

    fn collect_edges(&self, id: NodeId, edges: &mut Vec<(NodeId, NodeId)>) {
        if let Some(node) = self.nodes.get(&id) {
            for child in &node.children {
                edges.push((id, *child));
                self.collect_edges(*child, edges);
            }
        }
    }
}

#[test]
fn test_tree_structure() {
    use crate::toolkit::{GridLayout, Label, TabSheet};

    let mut tree = VisualTree::new();
    let root = tree.set_root(TabSheet::new());
    let grid = tree.add_child(root, GridLayout::new(2, 1)).unwrap();
    let a = tree.add_child(grid, Label::new("a")).unwrap();
    let b = tree.add_child(grid, Label::new("b")).unwrap();
    let c = tree.add_child(root, Label::new("c")).unwrap();

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.get(grid).unwrap().parent(), Some(root));
    assert_eq!(tree.get(grid).unwrap().children(), &[a, b]);
    assert_eq!(tree.get(grid).unwrap().kind(), ComponentKind::GridLayout);
    assert_eq!(
        tree.edges(root),
        vec![(root, grid), (grid, a), (grid, b), (root, c)],
        "edges should be depth-first in source order"
    );

    let unknown = NodeId::new();
    assert_eq!(
        tree.add_child(unknown, Label::default()),
        Err(FactoryError::NoSuchNode(unknown))
    );
}

#[test]
fn test_parameters() {
    use crate::toolkit::Label;

    let mut tree = VisualTree::new();
    let root = tree.set_root(Label::default());
    tree.set_parameter(root, "alignment", "top_right").unwrap();

    let node = tree.get(root).unwrap();
    assert_eq!(node.get_additional_parameter("alignment", ""), "top_right");
    assert_eq!(node.get_additional_parameter("missing", "-1"), "-1");
    assert!(node.has_additional_parameter("alignment"));
    assert!(!node.has_additional_parameter("missing"));
}
