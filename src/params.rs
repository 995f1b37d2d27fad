//! Parameter names read and written by the element factories.
//!
//! These are matched byte for byte against the names produced by tree builders; don't change them.

pub const GRID_ROW: &str = "GridLayout.row";
pub const GRID_COLUMN: &str = "GridLayout.column";
pub const GRID_ROW_SPAN: &str = "GridLayout.rowSpan";
pub const GRID_COLUMN_SPAN: &str = "GridLayout.columnSpan";

/// Auto-placement cursor, stored on the grid node.
pub const GRID_CURRENT_ROW: &str = "GridLayoutElementFactory.currentRowIndex";
/// Auto-placement cursor, stored on the grid node.
pub const GRID_CURRENT_COL: &str = "GridLayoutElementFactory.currentColIndex";

pub const ALIGNMENT: &str = "alignment";
pub const ROW_EXPAND_RATIO: &str = "rowExpandRatio";
pub const COLUMN_EXPAND_RATIO: &str = "columnExpandRatio";

pub const TAB_CAPTION: &str = "TabSheet.caption";

/// Expand ratio of a single child in an ordered layout.
pub const EXPAND_RATIO: &str = "expandRatio";
