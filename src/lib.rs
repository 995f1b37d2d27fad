//! Builds component trees from declarative visual trees.
//!
//! # Conceptual overview
//! A visual tree is a hierarchy of nodes, each holding an already realized component (a grid, a
//! tab sheet, a label, …) and a bag of string parameters that came from the declarative source.
//! Building the tree means attaching every node's component to its parent's component; this is the
//! job of element factories.
//!
//! ## Element factories
//! Each [`ElementFactory`] handles exactly one kind of parent container, identified by its class
//! name. The [`Builder`] walks the visual tree depth-first (parents first, siblings in source order)
//! and, for every parent/child edge, asks the factory registered for the parent's class to attach
//! the child and then to wire its events. Class names match exactly: there is no subclass or
//! wildcard matching. Factories still check the parent's actual component and refuse with
//! [`FactoryError::InvalidParentKind`] if it's not what they expect.
//!
//! ## Grid placement
//! Children of a grid say where they want to go with the `GridLayout.row`, `GridLayout.column`,
//! `GridLayout.rowSpan` and `GridLayout.columnSpan` parameters. A child that gives neither a row
//! nor a column is placed automatically at the grid's cursor, which then moves on by the child's
//! column span, one cell at a time, wrapping to the next row at the grid's column count. The cursor
//! is kept on the grid's node, so it carries over from one sibling to the next. Children with an
//! explicit row or column bypass the cursor entirely, and nothing stops them from landing on top
//! of automatically placed ones.
//!
//! Grids grow to fit the cells they are asked to fill; they never shrink.
//!
//! ## Bad parameters
//! Malformed numbers never abort a build. An integer that doesn't parse reads as 0 (an absent one
//! reads as its fallback, usually -1), and an expand ratio that doesn't parse reads as 0.0 and is
//! logged as a warning. Only a structurally wrong parent aborts an attachment, and then only that
//! one edge.
//!
//! ## Toolkit
//! Factories talk to containers through the traits in [`toolkit`]. The in-memory components in that
//! module implement them and record exactly what was asked of them.

mod builder;
pub mod cell;
pub mod codec;
pub mod component;
mod error;
pub mod factory;
pub mod params;
pub mod placement;
pub mod toolkit;
mod tree;

pub use builder::{BuildReport, Builder, EdgeError};
pub use cell::CellArea;
pub use component::{Component, ComponentId, ComponentKind};
pub use error::{FactoryError, ToolkitError};
pub use factory::{
    ElementFactories, ElementFactory, GridLayoutFactory, OrderedLayoutFactory, TabSheetFactory,
};
pub use placement::{place, Placement, PlacementCursor, PlacementRequest};
pub use tree::{NodeId, VisualTree, VisualTreeNode};
