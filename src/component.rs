//! Realized components.

use crate::toolkit::{GridLayout, Label, OrderedLayout, Orientation, TabSheet};
use core::fmt;
use uuid::Uuid;

/// A unique identifier for a realized component.
///
/// (this is just a UUID)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u32, u16, u16, [u8; 8]);

impl ComponentId {
    pub(crate) fn new() -> ComponentId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        ComponentId(a, b, c, *d)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:08x}-{:04x}-{:04x}", self.0, self.1, self.2)
    }
}

/// Discriminant of a realized component.
///
/// Computed once when a node is inserted into the tree, and used by the dispatcher to pick a
/// factory without looking at the component itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    GridLayout,
    TabSheet,
    VerticalLayout,
    HorizontalLayout,
    Label,
}

impl ComponentKind {
    /// The canonical class name factories match against.
    pub fn class_name(self) -> &'static str {
        match self {
            ComponentKind::GridLayout => "perch.ui.GridLayout",
            ComponentKind::TabSheet => "perch.ui.TabSheet",
            ComponentKind::VerticalLayout => "perch.ui.VerticalLayout",
            ComponentKind::HorizontalLayout => "perch.ui.HorizontalLayout",
            ComponentKind::Label => "perch.ui.Label",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A realized component owned by a visual tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    GridLayout(GridLayout),
    TabSheet(TabSheet),
    OrderedLayout(OrderedLayout),
    Label(Label),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::GridLayout(_) => ComponentKind::GridLayout,
            Component::TabSheet(_) => ComponentKind::TabSheet,
            Component::OrderedLayout(layout) => match layout.orientation() {
                Orientation::Vertical => ComponentKind::VerticalLayout,
                Orientation::Horizontal => ComponentKind::HorizontalLayout,
            },
            Component::Label(_) => ComponentKind::Label,
        }
    }
}

impl From<GridLayout> for Component {
    fn from(grid: GridLayout) -> Component {
        Component::GridLayout(grid)
    }
}

impl From<TabSheet> for Component {
    fn from(sheet: TabSheet) -> Component {
        Component::TabSheet(sheet)
    }
}

impl From<OrderedLayout> for Component {
    fn from(layout: OrderedLayout) -> Component {
        Component::OrderedLayout(layout)
    }
}

impl From<Label> for Component {
    fn from(label: Label) -> Component {
        Component::Label(label)
    }
}

#[test]
fn test_kind_follows_orientation() {
    let vertical: Component = OrderedLayout::vertical().into();
    let horizontal: Component = OrderedLayout::horizontal().into();
    assert_eq!(vertical.kind(), ComponentKind::VerticalLayout);
    assert_eq!(horizontal.kind(), ComponentKind::HorizontalLayout);
    assert_ne!(
        vertical.kind().class_name(),
        horizontal.kind().class_name(),
        "each kind should have its own class name"
    );
}
