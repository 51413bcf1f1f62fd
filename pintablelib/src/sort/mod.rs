//! Sorting: order rows by the columns' sort directives.
//!
//! This stage turns a column collection with applied `sort_order`s and a row
//! collection into a reordered copy of the rows. It provides:
//!
//! - **Comparator**: direction-aware cell comparison (`compare_values`)
//! - **SortEngine**: stable multi-pass sorting by `sort_level`
//! - **ComparatorRegistry**: named comparators for document-driven tables
//!
//! ## Example
//!
//! ```rust
//! use pintablelib::data::{Column, Row, SortOrder};
//! use pintablelib::sort::sort_rows;
//!
//! let columns = vec![Column::new("score", "Score").sort_order(SortOrder::Ascend)];
//! let rows = vec![
//!     Row::new().with("id", 1).with("score", "10"),
//!     Row::new().with("id", 2).with("score", "2"),
//! ];
//! let sorted = sort_rows(&columns, &rows);
//! assert_eq!(sorted[0].get("id"), rows[1].get("id"));
//! ```

pub mod compare;
pub mod engine;
pub mod merge;

pub use compare::{compare_values, locale_compare};
pub use engine::{sort_rows, ComparatorRegistry, SortEngine, SortSpec};
