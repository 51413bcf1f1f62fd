//! Layout: column widths, pinning offsets and viewport bounds.
//!
//! This stage derives everything a renderer needs to size a table without
//! further computation. It provides:
//!
//! - **WidthResolver**: declared or heuristic width per column
//! - **fixed_offset**: cumulative offset of a pinned column from its edge
//! - **SizeFormatter**: conversion of magnitudes into renderer units
//!
//! ## Example
//!
//! ```rust
//! use pintablelib::data::{Column, FixedEdge};
//! use pintablelib::layout::{compute_layout, PxFormatter, WidthPolicy};
//!
//! let columns = vec![
//!     Column::new("a", "A").width(50).fixed(FixedEdge::Left),
//!     Column::new("b", "B").width(60).fixed(FixedEdge::Left),
//!     Column::new("c", "C").width(40),
//! ];
//! let layout = compute_layout(&columns, &WidthPolicy::default(), &PxFormatter);
//! assert_eq!(layout.columns[1].fixed.as_ref().map(|p| p.offset), Some(50.0));
//! assert!(layout.columns[2].fixed.is_none());
//! ```

pub mod fixed;
pub mod size;
pub mod width;

pub use fixed::fixed_offset;
pub use size::{PxFormatter, RpxFormatter, SizeFormatter};
pub use width::{resolve_width, WidthPolicy, WidthResolver};

use serde::Serialize;

use crate::data::{Align, Column, FixedEdge, Size, SortOrder};
use crate::options::ScrollConstraints;

/// Where a pinned column sits relative to its edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedOffset {
    /// Edge the column is pinned to
    pub edge: FixedEdge,
    /// Distance from that edge in layout units
    pub offset: f64,
    /// Distance formatted for the renderer
    pub css: String,
}

/// Layout of one column, shared by its header and body cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    /// Reconciliation identity
    pub id: String,
    /// Row field the column reads
    pub data_index: String,
    /// Header label
    pub title: String,
    /// Width in layout units; `None` for pre-formatted widths without one
    pub width: Option<f64>,
    /// Width formatted for the renderer
    pub width_css: String,
    /// Declared alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Pinning offset; absent for columns that are not pinned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<PinnedOffset>,
    /// Whether header clicks sort the column
    pub sortable: bool,
    /// Applied sort direction
    pub sort_order: Option<SortOrder>,
    /// Whether cell clicks toggle expansion
    pub expandable: bool,
}

/// Bounds of the scroll container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Horizontal bound formatted for the renderer
    pub max_width: Option<String>,
    /// Vertical bound formatted for the renderer
    pub max_height: Option<String>,
    /// Horizontal scrolling is only enabled when there are rows to scroll
    pub scroll_x: bool,
    /// Vertical scrolling is enabled whenever a height bound is set
    pub scroll_y: bool,
}

impl Viewport {
    /// Viewport for `scroll`, given whether the body has any rows.
    pub fn new(scroll: &ScrollConstraints, has_rows: bool, formatter: &dyn SizeFormatter) -> Self {
        Self {
            max_width: scroll.max_width.as_ref().map(|s| formatter.format(s)),
            max_height: scroll.max_height.as_ref().map(|s| formatter.format(s)),
            scroll_x: has_rows && scroll.max_width.is_some(),
            scroll_y: scroll.max_height.is_some(),
        }
    }
}

/// Layout of every column plus the table's intrinsic width.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLayout {
    pub columns: Vec<ColumnLayout>,
    /// Sum of declared widths, with the count-based default for the rest
    pub content_width: f64,
}

/// Lay out `columns`.
pub fn compute_layout(
    columns: &[Column],
    policy: &WidthPolicy,
    formatter: &dyn SizeFormatter,
) -> TableLayout {
    let resolver = WidthResolver::new(columns, *policy);
    let magnitudes = resolver.magnitudes();

    let layouts = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let width = resolver
                .header_width(index)
                .unwrap_or(Size::Units(policy.fallback_width));
            let fixed = column.fixed.map(|edge| {
                let offset = fixed_offset(edge, index, &magnitudes);
                PinnedOffset {
                    edge,
                    offset,
                    css: formatter.format_units(offset),
                }
            });
            ColumnLayout {
                id: column.id(index),
                data_index: column.data_index.clone(),
                title: column.title.clone(),
                width: width.magnitude(),
                width_css: formatter.format(&width),
                align: column.align,
                fixed,
                sortable: column.sort,
                sort_order: column.sort_order,
                expandable: column.expandable,
            }
        })
        .collect();

    let default_width = policy.default_width(columns.len());
    let content_width = columns
        .iter()
        .map(|column| {
            column
                .explicit_width()
                .and_then(Size::magnitude)
                .unwrap_or(default_width)
        })
        .sum();

    TableLayout {
        columns: layouts,
        content_width,
    }
}
