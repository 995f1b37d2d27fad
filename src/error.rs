//! Error types.

use crate::component::ComponentId;
use crate::tree::NodeId;
use thiserror::Error;

/// Errors raised by the reference toolkit's containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error(
        "area [{col1},{row1}]..[{col2},{row2}] is outside of the {columns}x{rows} grid"
    )]
    OutOfBounds {
        col1: u32,
        row1: u32,
        col2: u32,
        row2: u32,
        columns: u32,
        rows: u32,
    },

    #[error("component {0} is not part of this container")]
    UnknownComponent(ComponentId),
}

/// Errors that abort a single parent/child attachment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("parent is a {actual}, expected a {expected}")]
    InvalidParentKind {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("no such node: {0}")]
    NoSuchNode(NodeId),

    #[error("no element factory found for {class_name}")]
    NoFactory { class_name: &'static str },

    #[error("toolkit error: {0}")]
    Toolkit(#[from] ToolkitError),
}
