//! Multi-column sort engine.
//!
//! Sorting is a sequence of stable passes over a permutation of the input
//! rows. Active columns are applied in increasing `sort_level`, so the last
//! pass (highest level) has the strongest influence on the final order and
//! earlier passes only break its ties.
//!
//! The input rows are never touched: the engine computes a permutation and
//! materializes a reordered copy.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::data::{Column, CompareFn, Row, SortOrder, Sorter};

use super::compare::compare_values;
use super::merge::merge_sort_by;

/// Named comparators that documents can refer to via `"sorter": "<name>"`.
#[derive(Clone, Default)]
pub struct ComparatorRegistry {
    comparators: BTreeMap<String, CompareFn>,
}

impl fmt::Debug for ComparatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.comparators.keys()).finish()
    }
}

impl ComparatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a named comparator.
    pub fn register<F>(mut self, name: impl Into<String>, compare: F) -> Self
    where
        F: Fn(&Row, &Row, SortOrder) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(compare));
        self
    }

    /// Add or replace a named comparator.
    pub fn insert(&mut self, name: impl Into<String>, compare: CompareFn) {
        self.comparators.insert(name.into(), compare);
    }

    /// Look up a comparator by name.
    pub fn get(&self, name: &str) -> Option<&CompareFn> {
        self.comparators.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.comparators.keys().map(String::as_str)
    }
}

/// One active sort directive, derived from a column with a set `sort_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec<'a> {
    /// Position of the column in the collection
    pub position: usize,
    /// Row field the column reads
    pub data_index: &'a str,
    /// Applied direction
    pub order: SortOrder,
    /// Comparator choice
    pub sorter: &'a Sorter,
    /// Effective priority (missing `sort_level` is 0)
    pub level: i32,
}

impl<'a> SortSpec<'a> {
    /// Active directives in application order.
    ///
    /// Ordered by `(level, position)`: equal levels are strictly ordered by
    /// column position so the result never depends on anything incidental.
    pub fn collect(columns: &'a [Column]) -> Vec<SortSpec<'a>> {
        let mut specs: Vec<SortSpec<'a>> = columns
            .iter()
            .enumerate()
            .filter_map(|(position, column)| {
                column.sort_order.map(|order| SortSpec {
                    position,
                    data_index: column.data_index.as_str(),
                    order,
                    sorter: &column.sorter,
                    level: column.sort_level.unwrap_or(0),
                })
            })
            .collect();

        specs.sort_by_key(|spec| (spec.level, spec.position));

        for pair in specs.windows(2) {
            if pair[0].level == pair[1].level {
                log::debug!(
                    "sort level {} shared by columns {} and {}; ordering by position",
                    pair[0].level,
                    pair[0].position,
                    pair[1].position
                );
            }
        }

        specs
    }
}

/// How a single pass compares rows.
enum Pass<'a> {
    Cells(&'a str),
    Custom(&'a CompareFn),
    NoOp,
}

/// Applies column sort directives to a row collection.
#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    registry: ComparatorRegistry,
}

impl SortEngine {
    /// Engine with no named comparators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine resolving named sorters against `registry`.
    pub fn with_registry(registry: ComparatorRegistry) -> Self {
        Self { registry }
    }

    /// Builder: add a named comparator.
    pub fn register<F>(mut self, name: impl Into<String>, compare: F) -> Self
    where
        F: Fn(&Row, &Row, SortOrder) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        self.registry.insert(name, Arc::new(compare));
        self
    }

    /// Permutation of `0..rows.len()` giving the sorted order.
    ///
    /// With no active directive this is the identity permutation.
    pub fn sort_indices(&self, columns: &[Column], rows: &[Row]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).collect();
        let specs = SortSpec::collect(columns);
        if specs.is_empty() || rows.is_empty() {
            return order;
        }

        for spec in &specs {
            log::trace!(
                "sort pass: column {} ({:?}, level {})",
                spec.position,
                spec.order,
                spec.level
            );
            match self.resolve(spec) {
                Pass::Cells(field) => merge_sort_by(&mut order, |&a, &b| {
                    compare_values(rows[a].get(field), rows[b].get(field), spec.order)
                }),
                Pass::Custom(compare) => {
                    merge_sort_by(&mut order, |&a, &b| compare(&rows[a], &rows[b], spec.order))
                }
                // A stable sort under an all-equal comparator keeps the order.
                Pass::NoOp => {}
            }
        }

        order
    }

    /// Reordered copy of `rows`.
    pub fn sort(&self, columns: &[Column], rows: &[Row]) -> Vec<Row> {
        self.sort_indices(columns, rows)
            .into_iter()
            .map(|index| rows[index].clone())
            .collect()
    }

    fn resolve<'a>(&'a self, spec: &SortSpec<'a>) -> Pass<'a> {
        match spec.sorter {
            Sorter::Default => Pass::Cells(spec.data_index),
            Sorter::Custom(compare) => Pass::Custom(compare),
            Sorter::Named(name) => match self.registry.get(name) {
                Some(compare) => Pass::Custom(compare),
                None => {
                    log::warn!(
                        "comparator '{}' for column {} is not registered; pass skipped",
                        name,
                        spec.position
                    );
                    Pass::NoOp
                }
            },
        }
    }
}

/// Sort `rows` by `columns` with the built-in comparator only.
pub fn sort_rows(columns: &[Column], rows: &[Row]) -> Vec<Row> {
    SortEngine::new().sort(columns, rows)
}
