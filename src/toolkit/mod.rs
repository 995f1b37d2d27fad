//! Container interfaces and the in-memory reference toolkit.
//!
//! Factories only talk to containers through the traits in this module. The structs here record
//! exactly the state the traits expose, which is enough to build and inspect a component tree
//! without a windowing system.

use crate::component::ComponentId;
use crate::error::ToolkitError;

mod grid;
mod ordered;
mod tab_sheet;

pub use grid::{GridCell, GridLayout};
pub use ordered::{OrderedLayout, Orientation};
pub use tab_sheet::{Tab, TabSheet};

/// Alignment of a component inside the slot its container gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Default for Alignment {
    fn default() -> Alignment {
        Alignment::TopLeft
    }
}

/// A container that places components on a grid of cells.
pub trait GridContainer {
    fn rows(&self) -> u32;
    fn set_rows(&mut self, rows: u32);
    fn columns(&self) -> u32;
    fn set_columns(&mut self, columns: u32);

    /// Places a component in a single cell.
    fn add_component(&mut self, component: ComponentId, col: u32, row: u32)
        -> Result<(), ToolkitError>;

    /// Places a component over an area; both corners are inclusive.
    fn add_component_spanning(
        &mut self,
        component: ComponentId,
        col1: u32,
        row1: u32,
        col2: u32,
        row2: u32,
    ) -> Result<(), ToolkitError>;

    fn set_component_alignment(
        &mut self,
        component: ComponentId,
        alignment: Alignment,
    ) -> Result<(), ToolkitError>;

    fn set_row_expand_ratio(&mut self, row: u32, ratio: f32);
    fn set_column_expand_ratio(&mut self, col: u32, ratio: f32);
}

/// A container that shows one component per tab.
pub trait TabContainer {
    /// Appends a tab and returns its position.
    fn add_tab(&mut self, component: ComponentId, caption: &str) -> usize;
}

/// A container that lays out components in a single row or column.
pub trait OrderedContainer {
    fn add_component(&mut self, component: ComponentId);

    fn set_component_alignment(
        &mut self,
        component: ComponentId,
        alignment: Alignment,
    ) -> Result<(), ToolkitError>;

    fn set_expand_ratio(&mut self, component: ComponentId, ratio: f32)
        -> Result<(), ToolkitError>;
}

/// A plain text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Label {
        Label { text: text.into() }
    }
}
