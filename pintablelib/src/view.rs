//! Read-only projection handed to the rendering layer.
//!
//! A `TableView` is the final structure before painting: column layouts,
//! ordered rows with rendered cell text, viewport bounds and the
//! loading/expansion flags. Renderers iterate over it; nothing in it needs
//! further computation, and nothing written to it flows back into the table.

use serde::Serialize;

use crate::data::{Align, Column, Row};
use crate::layout::{compute_layout, ColumnLayout, SizeFormatter, Viewport};
use crate::options::TableOptions;

/// Stand-in content for a region with nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Placeholder {
    /// "No data"
    Empty,
}

/// One body cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    /// Rendered text
    pub text: String,
    /// Effective alignment (body cells default to centered)
    pub align: Align,
    /// Whether clicking this cell toggles expansion
    pub expandable: bool,
}

/// One body row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    /// Reconciliation key (row key field, or position)
    pub key: String,
    /// Cells in column order
    pub cells: Vec<CellView>,
}

/// Everything a renderer needs for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    /// Column layouts in display order
    pub columns: Vec<ColumnLayout>,
    /// Rows in sorted order
    pub rows: Vec<RowView>,
    /// Intrinsic table width in layout units
    pub content_width: f64,
    /// Scroll container bounds
    pub viewport: Viewport,
    /// Shared row-expansion flag
    pub expanded: bool,
    /// Loading indicator flag
    pub loading: bool,
    /// Set when there are no columns to lay out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_placeholder: Option<Placeholder>,
    /// Set when there are no rows to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_placeholder: Option<Placeholder>,
}

impl TableView {
    /// Project ordered `rows` under `columns`.
    pub fn build(
        columns: &[Column],
        rows: &[Row],
        options: &TableOptions,
        expanded: bool,
        formatter: &dyn SizeFormatter,
    ) -> Self {
        let (layouts, content_width, header_placeholder) = if columns.is_empty() {
            (Vec::new(), 0.0, Some(Placeholder::Empty))
        } else {
            let layout = compute_layout(columns, &options.width_policy, formatter);
            (layout.columns, layout.content_width, None)
        };

        let row_views: Vec<RowView> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                key: row
                    .key(&options.row_key)
                    .unwrap_or_else(|| index.to_string()),
                cells: columns
                    .iter()
                    .map(|column| CellView {
                        text: column.render_cell(row, index),
                        align: column.align.unwrap_or(Align::Center),
                        expandable: column.expandable,
                    })
                    .collect(),
            })
            .collect();

        let body_placeholder = if rows.is_empty() {
            Some(Placeholder::Empty)
        } else {
            None
        };

        TableView {
            columns: layouts,
            rows: row_views,
            content_width,
            viewport: Viewport::new(&options.scroll, !rows.is_empty(), formatter),
            expanded,
            loading: options.loading,
            header_placeholder,
            body_placeholder,
        }
    }

    /// Whether either region shows a placeholder.
    pub fn is_empty(&self) -> bool {
        self.header_placeholder.is_some() || self.body_placeholder.is_some()
    }
}
