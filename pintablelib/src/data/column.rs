//! Column definitions.
//!
//! Columns are supplied by the host on every cycle and are treated as
//! immutable input. The only field that changes through interaction is
//! `sort_order`, and that change always produces a new column collection
//! (see [`crate::controller`]).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::row::{cast_value, Row};

/// Custom row comparator: `(row_a, row_b, direction)`.
pub type CompareFn = Arc<dyn Fn(&Row, &Row, SortOrder) -> Ordering + Send + Sync>;

/// Custom cell renderer: `(cell_value, row, row_index)`.
pub type RenderFn = Arc<dyn Fn(Option<&Value>, &Row, usize) -> String + Send + Sync>;

/// Horizontal alignment of a column's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Edge a fixed column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedEdge {
    Left,
    Right,
}

/// Applied sort direction. An unsorted column holds `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc", alias = "ascending")]
    Ascend,
    #[serde(alias = "desc", alias = "descending")]
    Descend,
}

impl SortOrder {
    /// Next state of the header-click cycle: unset, ascend, descend, unset.
    pub fn cycle(current: Option<SortOrder>) -> Option<SortOrder> {
        match current {
            None => Some(SortOrder::Ascend),
            Some(SortOrder::Ascend) => Some(SortOrder::Descend),
            Some(SortOrder::Descend) => None,
        }
    }

    /// Orient an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascend => ordering,
            SortOrder::Descend => ordering.reverse(),
        }
    }
}

/// Declared width of a column.
///
/// Either a magnitude in layout units, or a string the host already
/// formatted (`"20%"`, `"3rem"`), which is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Size {
    Units(f64),
    Formatted(String),
}

impl Size {
    /// Numeric magnitude in layout units, if one can be derived.
    ///
    /// Formatted strings only yield a magnitude when they are a bare number
    /// or a `px` value.
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            Size::Units(units) if units.is_finite() => Some(*units),
            Size::Units(_) => None,
            Size::Formatted(text) => {
                let text = text.trim();
                let number = text.strip_suffix("px").unwrap_or(text).trim();
                number.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Zero and empty sizes count as "not declared".
    fn is_unset(&self) -> bool {
        match self {
            Size::Units(units) => *units == 0.0 || units.is_nan(),
            Size::Formatted(text) => text.is_empty(),
        }
    }
}

impl From<f64> for Size {
    fn from(units: f64) -> Self {
        Size::Units(units)
    }
}

impl From<i32> for Size {
    fn from(units: i32) -> Self {
        Size::Units(f64::from(units))
    }
}

impl From<u32> for Size {
    fn from(units: u32) -> Self {
        Size::Units(f64::from(units))
    }
}

impl From<&str> for Size {
    fn from(text: &str) -> Self {
        Size::Formatted(text.to_string())
    }
}

/// How a sorted column compares rows.
#[derive(Clone, Default)]
pub enum Sorter {
    /// Built-in cell comparator.
    #[default]
    Default,
    /// Comparator looked up by name in the engine's registry.
    Named(String),
    /// Host-supplied comparator.
    Custom(CompareFn),
}

impl fmt::Debug for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sorter::Default => write!(f, "Default"),
            Sorter::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Sorter::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

impl PartialEq for Sorter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sorter::Default, Sorter::Default) => true,
            (Sorter::Named(a), Sorter::Named(b)) => a == b,
            (Sorter::Custom(a), Sorter::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Document form of a sorter: a flag or a registry name.
#[derive(Deserialize)]
#[serde(untagged)]
enum SorterRepr {
    Flag(bool),
    Name(String),
}

impl<'de> Deserialize<'de> for Sorter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SorterRepr::deserialize(deserializer)? {
            // Either flag value selects the built-in comparator.
            SorterRepr::Flag(true) | SorterRepr::Flag(false) => Sorter::Default,
            SorterRepr::Name(name) => Sorter::Named(name),
        })
    }
}

/// Host-supplied cell renderer.
#[derive(Clone)]
pub struct Renderer(pub RenderFn);

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Renderer(<fn>)")
    }
}

impl PartialEq for Renderer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Accepts `"left"`, `"right"`, `"none"`, `false` and `null`.
fn deserialize_fixed<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<FixedEdge>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FixedRepr {
        Flag(bool),
        Edge(String),
    }

    let repr = Option::<FixedRepr>::deserialize(deserializer)?;
    Ok(match repr {
        Some(FixedRepr::Edge(edge)) => match edge.to_lowercase().as_str() {
            "left" => Some(FixedEdge::Left),
            "right" => Some(FixedEdge::Right),
            _ => None,
        },
        Some(FixedRepr::Flag(true | false)) | None => None,
    })
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Explicit identity; falls back to `data_index`
    pub key: Option<String>,
    /// Row field this column reads
    pub data_index: String,
    /// Header label
    pub title: String,
    /// Declared width
    pub width: Option<Size>,
    /// Content alignment
    pub align: Option<Align>,
    /// Pinned edge, if any
    #[serde(deserialize_with = "deserialize_fixed")]
    pub fixed: Option<FixedEdge>,
    /// Whether a header click sorts this column
    pub sort: bool,
    /// Comparator used when this column is sorted
    pub sorter: Sorter,
    /// Currently applied direction
    pub sort_order: Option<SortOrder>,
    /// Priority among simultaneously sorted columns; higher dominates
    pub sort_level: Option<i32>,
    /// Cell renderer
    #[serde(skip)]
    pub render: Option<Renderer>,
    /// Whether clicking a cell toggles row expansion
    pub expandable: bool,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            key: None,
            data_index: String::new(),
            title: String::new(),
            width: None,
            align: None,
            fixed: None,
            sort: false,
            sorter: Sorter::Default,
            sort_order: None,
            sort_level: None,
            render: None,
            expandable: true,
        }
    }
}

impl Column {
    /// Create a column reading `data_index`, labelled `title`.
    pub fn new(data_index: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            data_index: data_index.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder: set an explicit key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Builder: set a declared width
    pub fn width(mut self, width: impl Into<Size>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Builder: set alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Builder: pin to an edge
    pub fn fixed(mut self, edge: FixedEdge) -> Self {
        self.fixed = Some(edge);
        self
    }

    /// Builder: make header-click sortable
    pub fn sortable(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Builder: set the applied sort direction
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Builder: set the sort priority
    pub fn sort_level(mut self, level: i32) -> Self {
        self.sort_level = Some(level);
        self
    }

    /// Builder: compare rows with a closure
    pub fn sorter_fn<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Row, &Row, SortOrder) -> Ordering + Send + Sync + 'static,
    {
        self.sorter = Sorter::Custom(Arc::new(compare));
        self
    }

    /// Builder: compare rows with a registered comparator
    pub fn sorter_named(mut self, name: impl Into<String>) -> Self {
        self.sorter = Sorter::Named(name.into());
        self
    }

    /// Builder: render cells with a closure
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &Row, usize) -> String + Send + Sync + 'static,
    {
        self.render = Some(Renderer(Arc::new(render)));
        self
    }

    /// Builder: set whether cell clicks toggle expansion
    pub fn expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    /// Identity used for reconciliation.
    ///
    /// `key`, then `data_index`, then the column's position for malformed
    /// columns that carry neither.
    pub fn id(&self, position: usize) -> String {
        match (&self.key, self.data_index.as_str()) {
            (Some(key), _) if !key.is_empty() => key.clone(),
            (_, data_index) if !data_index.is_empty() => data_index.to_string(),
            _ => format!("#{}", position),
        }
    }

    /// Header length in UTF-16 code units, the unit browsers measure
    /// string length in.
    pub fn title_len(&self) -> usize {
        self.title.encode_utf16().count()
    }

    /// Declared width, ignoring zero/empty declarations.
    pub fn explicit_width(&self) -> Option<&Size> {
        self.width.as_ref().filter(|w| !w.is_unset())
    }

    /// Whether a sort direction is currently applied.
    pub fn is_sorted(&self) -> bool {
        self.sort_order.is_some()
    }

    /// Display text for this column's cell in `row`.
    pub fn render_cell(&self, row: &Row, row_index: usize) -> String {
        let value = row.get(&self.data_index);
        match &self.render {
            Some(Renderer(render)) => render(value, row, row_index),
            None => cast_value(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_order_cycle() {
        let first = SortOrder::cycle(None);
        let second = SortOrder::cycle(first);
        let third = SortOrder::cycle(second);
        assert_eq!(first, Some(SortOrder::Ascend));
        assert_eq!(second, Some(SortOrder::Descend));
        assert_eq!(third, None);
    }

    #[test]
    fn test_column_id_fallbacks() {
        assert_eq!(Column::new("score", "Score").key("k").id(0), "k");
        assert_eq!(Column::new("score", "Score").id(0), "score");
        assert_eq!(Column::default().id(3), "#3");
    }

    #[test]
    fn test_explicit_width_ignores_zero() {
        assert!(Column::new("a", "A").width(0.0).explicit_width().is_none());
        assert!(Column::new("a", "A").width("").explicit_width().is_none());
        assert_eq!(
            Column::new("a", "A").width(50).explicit_width(),
            Some(&Size::Units(50.0))
        );
    }

    #[test]
    fn test_size_magnitude() {
        assert_eq!(Size::Units(30.0).magnitude(), Some(30.0));
        assert_eq!(Size::from("45px").magnitude(), Some(45.0));
        assert_eq!(Size::from("12").magnitude(), Some(12.0));
        assert_eq!(Size::from("20%").magnitude(), None);
    }

    #[test]
    fn test_render_cell_default_cast() {
        let row = Row::new().with("n", 5).with("s", "five");
        assert_eq!(Column::new("n", "N").render_cell(&row, 0), "5");
        assert_eq!(Column::new("s", "S").render_cell(&row, 0), "five");
        assert_eq!(Column::new("x", "X").render_cell(&row, 0), "");
    }

    #[test]
    fn test_render_cell_custom() {
        let column = Column::new("n", "N").render(|value, _row, index| {
            format!("{}:{}", index, cast_value(value))
        });
        let row = Row::new().with("n", 5);
        assert_eq!(column.render_cell(&row, 2), "2:5");
    }

    #[test]
    fn test_column_deserialize() {
        let column: Column = serde_json::from_value(json!({
            "dataIndex": "score",
            "title": "Score",
            "width": 60,
            "fixed": "left",
            "sort": true,
            "sorter": "byLength",
            "sortOrder": "descend",
            "sortLevel": 2,
            "expandable": false
        }))
        .unwrap();

        assert_eq!(column.data_index, "score");
        assert_eq!(column.width, Some(Size::Units(60.0)));
        assert_eq!(column.fixed, Some(FixedEdge::Left));
        assert!(column.sort);
        assert_eq!(column.sorter, Sorter::Named("byLength".to_string()));
        assert_eq!(column.sort_order, Some(SortOrder::Descend));
        assert_eq!(column.sort_level, Some(2));
        assert!(!column.expandable);
    }

    #[test]
    fn test_column_deserialize_defaults() {
        let column: Column =
            serde_json::from_value(json!({"dataIndex": "a", "fixed": false, "sorter": true}))
                .unwrap();
        assert!(column.expandable);
        assert!(column.fixed.is_none());
        assert_eq!(column.sorter, Sorter::Default);
        assert!(column.sort_order.is_none());
    }

    #[test]
    fn test_false_sorter_flag_is_default() {
        let column: Column =
            serde_json::from_value(json!({"dataIndex": "a", "sorter": false, "fixed": true}))
                .unwrap();
        assert_eq!(column.sorter, Sorter::Default);
        assert!(column.fixed.is_none());
    }

    #[test]
    fn test_title_len_counts_utf16_units() {
        assert_eq!(Column::new("a", "Score").title_len(), 5);
        assert_eq!(Column::new("a", "Prénom").title_len(), 6);
        // astral-plane characters take two units each
        assert_eq!(Column::new("a", "😀😀").title_len(), 4);
    }

    #[test]
    fn test_custom_sorter_equality_is_by_identity() {
        let column = Column::new("a", "A").sorter_fn(|_, _, _| Ordering::Equal);
        let copy = column.clone();
        let other = Column::new("a", "A").sorter_fn(|_, _, _| Ordering::Equal);
        assert_eq!(column, copy);
        assert_ne!(column, other);
    }
}
