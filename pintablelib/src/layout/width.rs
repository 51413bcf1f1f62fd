//! Column width resolution.
//!
//! A column with a declared width uses it as is. Otherwise its width comes
//! from a heuristic over the column count and the header length:
//!
//! ```text
//! min(cap, max(baseline / column_count, default_width(column_count), title_len * per_char))
//! ```
//!
//! Header cells and body cells of the same column must resolve to the same
//! width. [`WidthResolver`] guarantees this by routing both through one memo
//! keyed by `data_index`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::{Column, Size};

/// Tunables for heuristic column widths, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidthPolicy {
    /// Total width shared evenly between columns
    pub baseline: f64,
    /// Upper bound for any heuristic width
    pub cap: f64,
    /// Width reserved per header character
    pub per_char: f64,
    /// Default width for tables with few columns
    pub sparse_default: f64,
    /// Default width for tables with many columns
    pub dense_default: f64,
    /// Column count from which a table counts as dense
    pub dense_threshold: usize,
    /// Width assumed for a declared size with no numeric magnitude
    pub fallback_width: f64,
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self {
            baseline: 365.0,
            cap: 150.0,
            per_char: 15.0,
            sparse_default: 100.0,
            dense_default: 50.0,
            dense_threshold: 5,
            fallback_width: 40.0,
        }
    }
}

impl WidthPolicy {
    /// Default width for a table of `column_count` columns.
    pub fn default_width(&self, column_count: usize) -> f64 {
        if column_count < self.dense_threshold {
            self.sparse_default
        } else {
            self.dense_default
        }
    }

    /// Even share of the baseline width.
    pub fn container_share(&self, column_count: usize) -> f64 {
        self.baseline / column_count.max(1) as f64
    }

    /// Heuristic width for a header of `title_len` characters.
    pub fn heuristic(&self, title_len: usize, column_count: usize) -> f64 {
        let fit = title_len as f64 * self.per_char;
        self.container_share(column_count)
            .max(self.default_width(column_count))
            .max(fit)
            .min(self.cap)
    }
}

/// Width of `column` within `all_columns`.
pub fn resolve_width(column: &Column, all_columns: &[Column], policy: &WidthPolicy) -> Size {
    match column.explicit_width() {
        Some(size) => size.clone(),
        None => Size::Units(policy.heuristic(column.title_len(), all_columns.len())),
    }
}

/// Memoized widths for one column collection.
#[derive(Debug, Clone)]
pub struct WidthResolver<'a> {
    columns: &'a [Column],
    policy: WidthPolicy,
    heuristics: HashMap<String, f64>,
}

impl<'a> WidthResolver<'a> {
    /// Precompute heuristic widths for every distinct `data_index`.
    ///
    /// When several columns share a `data_index` the first one's title wins,
    /// which is also the column a body cell looks its header up by.
    pub fn new(columns: &'a [Column], policy: WidthPolicy) -> Self {
        let mut heuristics = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            heuristics
                .entry(memo_key(column, position))
                .or_insert_with(|| policy.heuristic(column.title_len(), columns.len()));
        }
        Self {
            columns,
            policy,
            heuristics,
        }
    }

    /// Width of the header cell for the column at `index`.
    pub fn header_width(&self, index: usize) -> Option<Size> {
        self.width_of(index)
    }

    /// Width of a body cell in the column at `index`.
    pub fn cell_width(&self, index: usize) -> Option<Size> {
        self.width_of(index)
    }

    /// Numeric width of the column at `index`, used for offsets.
    pub fn magnitude(&self, index: usize) -> f64 {
        self.width_of(index)
            .and_then(|size| size.magnitude())
            .unwrap_or_else(|| {
                log::debug!(
                    "column {} has no numeric width; assuming {}",
                    index,
                    self.policy.fallback_width
                );
                self.policy.fallback_width
            })
    }

    /// Numeric widths of every column, in order.
    pub fn magnitudes(&self) -> Vec<f64> {
        (0..self.columns.len()).map(|i| self.magnitude(i)).collect()
    }

    fn width_of(&self, index: usize) -> Option<Size> {
        let column = self.columns.get(index)?;
        if let Some(size) = column.explicit_width() {
            return Some(size.clone());
        }
        self.heuristics
            .get(&memo_key(column, index))
            .map(|units| Size::Units(*units))
    }
}

/// Columns without a `data_index` are memoized by position.
fn memo_key(column: &Column, position: usize) -> String {
    if column.data_index.is_empty() {
        format!("#{}", position)
    } else {
        column.data_index.clone()
    }
}
