//! Table-wide options.
//!
//! This module contains the configuration types that control how the
//! controller sorts, lays out and reacts to interaction. Every field has a
//! default, so documents only need to spell out what they change.

use serde::{Deserialize, Serialize};

use crate::data::Size;
use crate::layout::WidthPolicy;

/// Bounds of the scrollable viewport.
///
/// A bound that is set enables scrolling on its axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollConstraints {
    /// Horizontal bound
    #[serde(alias = "x")]
    pub max_width: Option<Size>,
    /// Vertical bound
    #[serde(alias = "y")]
    pub max_height: Option<Size>,
}

impl ScrollConstraints {
    /// No bounds on either axis
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder: bound the width
    pub fn with_max_width(mut self, width: impl Into<Size>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    /// Builder: bound the height
    pub fn with_max_height(mut self, height: impl Into<Size>) -> Self {
        self.max_height = Some(height.into());
        self
    }
}

/// Options for one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    /// Row field holding each row's identity
    pub row_key: String,
    /// Whether data is loading; header clicks are ignored meanwhile
    pub loading: bool,
    /// Whether several columns may be sorted at once
    pub multiple_sort: bool,
    /// Viewport bounds
    pub scroll: ScrollConstraints,
    /// Heuristic width tunables
    pub width_policy: WidthPolicy,
}

impl TableOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the row key field
    pub fn with_row_key(mut self, field: impl Into<String>) -> Self {
        self.row_key = field.into();
        self
    }

    /// Builder: set the loading flag
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Builder: allow or forbid simultaneous sorts
    pub fn with_multiple_sort(mut self, multiple_sort: bool) -> Self {
        self.multiple_sort = multiple_sort;
        self
    }

    /// Builder: set viewport bounds
    pub fn with_scroll(mut self, scroll: ScrollConstraints) -> Self {
        self.scroll = scroll;
        self
    }

    /// Builder: set the width policy
    pub fn with_width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }
}
