//! # pintablelib
//!
//! Headless engine for data tables with sortable columns and pinned edges.
//!
//! ## Overview
//!
//! The library holds everything a table renderer needs that is not painting:
//!
//! - **Sorting**: multi-column, priority-ordered stable sorting with a
//!   coercing default comparator, named comparators and custom closures
//! - **Widths**: declared widths, or a heuristic derived from the column
//!   count and header length
//! - **Pinning**: cumulative offsets for columns fixed to the left or right
//! - **State**: header-click sort cycling, single vs multiple sort, the shared
//!   expansion flag and reconciliation with new external props
//!
//! Host input is [`TableProps`] (columns, rows and [`TableOptions`]); output is
//! a [`TableView`] with everything resolved.
//!
//! ## Example
//!
//! ```rust
//! use pintablelib::{Column, FixedEdge, Row, TableController, TableProps};
//!
//! let props = TableProps::new(
//!     vec![
//!         Column::new("name", "Name").fixed(FixedEdge::Left),
//!         Column::new("score", "Score").sortable(),
//!     ],
//!     vec![
//!         Row::new().with("name", "alpha").with("score", "10"),
//!         Row::new().with("name", "beta").with("score", "2"),
//!     ],
//! );
//!
//! let mut table = TableController::new(props);
//! table.on_header_click(1);
//!
//! let view = table.view();
//! assert_eq!(view.rows[0].cells[0].text, "beta");
//! assert_eq!(view.columns[0].fixed.as_ref().map(|p| p.offset), Some(0.0));
//! ```

pub mod controller;
pub mod data;
pub mod error;
pub mod layout;
pub mod options;
pub mod props;
pub mod sort;
pub mod view;

pub use controller::{CellClick, HeaderClick, IgnoreReason, TableController, TableState};
pub use data::{cast_value, Align, Column, FixedEdge, Row, Size, SortOrder, Sorter};
pub use error::PintableError;
pub use layout::{
    compute_layout, fixed_offset, resolve_width, ColumnLayout, PinnedOffset, PxFormatter,
    RpxFormatter, SizeFormatter, TableLayout, Viewport, WidthPolicy, WidthResolver,
};
pub use options::{ScrollConstraints, TableOptions};
pub use props::TableProps;
pub use sort::{compare_values, sort_rows, ComparatorRegistry, SortEngine};
pub use view::{CellView, Placeholder, RowView, TableView};

/// Result type for pintablelib operations
pub type Result<T> = std::result::Result<T, PintableError>;
