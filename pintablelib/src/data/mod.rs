//! Input data model: columns and rows.
//!
//! This module holds the types a host hands to the engine on every cycle:
//!
//! - **Column**: identity, header, width, alignment, pinning, sort state
//! - **Row**: an opaque record looked up by field name
//!
//! ## Example
//!
//! ```rust
//! use pintablelib::data::{Column, FixedEdge, Row, SortOrder};
//!
//! let columns = vec![
//!     Column::new("name", "Name").fixed(FixedEdge::Left).width(80),
//!     Column::new("score", "Score").sortable().sort_order(SortOrder::Descend),
//! ];
//! let row = Row::new().with("name", "alpha").with("score", 10);
//! assert_eq!(columns[1].render_cell(&row, 0), "10");
//! ```

pub mod column;
pub mod row;

pub use column::{
    Align, Column, CompareFn, FixedEdge, RenderFn, Renderer, Size, SortOrder, Sorter,
};
pub use row::{cast_value, Row};
