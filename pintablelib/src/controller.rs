//! Table state and its transitions.
//!
//! [`TableState`] is an immutable snapshot: the last external props, the
//! working columns (which carry interactive sort state), the ordered rows and
//! the shared expansion flag. Every interaction is a pure function from one
//! snapshot to the next.
//!
//! [`TableController`] owns the current snapshot, a [`SortEngine`] and a
//! [`SizeFormatter`], and notifies the host whenever the visible row order
//! changes.
//!
//! Header clicks cycle a column through unset, ascend and descend. Without
//! `multiple_sort`, a click clears every other column's direction first.

use std::fmt;

use crate::data::{Column, Row, SortOrder};
use crate::layout::{RpxFormatter, SizeFormatter};
use crate::options::TableOptions;
use crate::props::TableProps;
use crate::sort::SortEngine;
use crate::view::TableView;

/// Why an interaction left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The table is loading
    Loading,
    /// The column has no header-click sorting
    NotSortable,
    /// The column does not toggle expansion
    NotExpandable,
    /// The column or row index does not exist
    OutOfRange,
}

/// Outcome of a header click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderClick {
    /// The column moved to `order` (`None` is unset)
    Applied {
        column: usize,
        order: Option<SortOrder>,
    },
    Ignored(IgnoreReason),
}

/// Outcome of a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClick {
    /// The shared expansion flag is now `expanded`
    Toggled { expanded: bool },
    Ignored(IgnoreReason),
}

/// Snapshot of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    source: TableProps,
    columns: Vec<Column>,
    rows: Vec<Row>,
    expanded: bool,
}

impl TableState {
    /// Initial state for `props`.
    pub fn new(props: TableProps, engine: &SortEngine) -> Self {
        let rows = engine.sort(&props.columns, &props.rows);
        Self {
            columns: props.columns.clone(),
            rows,
            expanded: false,
            source: props,
        }
    }

    /// Working columns, including interactive sort state.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in their current sorted order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current options.
    pub fn options(&self) -> &TableOptions {
        &self.source.options
    }

    /// Shared expansion flag.
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// React to new props from the host.
    ///
    /// Columns are only replaced when they differ structurally from the last
    /// supplied ones, so interactive sort state survives re-supplying
    /// identical columns. Rows are re-sorted from the new baseline whenever
    /// either collection changed.
    pub fn apply_external_update(&self, props: TableProps, engine: &SortEngine) -> TableState {
        let columns_changed = props.columns != self.source.columns;
        let rows_changed = props.rows != self.source.rows;

        if !columns_changed && !rows_changed {
            if props.options == self.source.options {
                return self.clone();
            }
            return TableState {
                source: props,
                ..self.clone()
            };
        }

        let columns = if columns_changed {
            log::debug!("columns replaced ({} columns)", props.columns.len());
            props.columns.clone()
        } else {
            self.columns.clone()
        };
        if rows_changed {
            log::debug!("rows replaced ({} rows)", props.rows.len());
        }
        let rows = engine.sort(&columns, &props.rows);

        TableState {
            source: props,
            columns,
            rows,
            expanded: self.expanded,
        }
    }

    /// Advance the sort cycle of the column at `index`.
    pub fn apply_header_click(&self, index: usize, engine: &SortEngine) -> (TableState, HeaderClick) {
        if self.source.options.loading {
            return self.ignore_header(IgnoreReason::Loading);
        }
        let Some(column) = self.columns.get(index) else {
            return self.ignore_header(IgnoreReason::OutOfRange);
        };
        if !column.sort {
            return self.ignore_header(IgnoreReason::NotSortable);
        }

        let next = SortOrder::cycle(column.sort_order);
        let multiple_sort = self.source.options.multiple_sort;
        let columns: Vec<Column> = self
            .columns
            .iter()
            .enumerate()
            .map(|(position, column)| {
                let mut column = column.clone();
                if position == index {
                    column.sort_order = next;
                } else if !multiple_sort {
                    column.sort_order = None;
                }
                column
            })
            .collect();
        let rows = engine.sort(&columns, &self.source.rows);

        let state = TableState {
            source: self.source.clone(),
            columns,
            rows,
            expanded: self.expanded,
        };
        (
            state,
            HeaderClick::Applied {
                column: index,
                order: next,
            },
        )
    }

    /// Toggle the shared expansion flag from a click on a body cell.
    pub fn apply_cell_click(&self, column_index: usize, row_index: usize) -> (TableState, CellClick) {
        let reason = match self.columns.get(column_index) {
            None => Some(IgnoreReason::OutOfRange),
            Some(_) if row_index >= self.rows.len() => Some(IgnoreReason::OutOfRange),
            Some(column) if !column.expandable => Some(IgnoreReason::NotExpandable),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            return (self.clone(), CellClick::Ignored(reason));
        }

        let expanded = !self.expanded;
        (
            TableState {
                expanded,
                ..self.clone()
            },
            CellClick::Toggled { expanded },
        )
    }

    /// Read-only projection for the rendering layer.
    pub fn view(&self, formatter: &dyn SizeFormatter) -> TableView {
        TableView::build(
            &self.columns,
            &self.rows,
            &self.source.options,
            self.expanded,
            formatter,
        )
    }

    fn ignore_header(&self, reason: IgnoreReason) -> (TableState, HeaderClick) {
        (self.clone(), HeaderClick::Ignored(reason))
    }
}

type ChangeCallback = Box<dyn FnMut(&[Row])>;

/// Owns a table's state and routes interaction through it.
pub struct TableController {
    state: TableState,
    engine: SortEngine,
    formatter: Box<dyn SizeFormatter>,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for TableController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("state", &self.state)
            .field("engine", &self.engine)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl TableController {
    /// Controller over `props` with the default engine and rpx formatting.
    pub fn new(props: TableProps) -> Self {
        Self::with_engine(props, SortEngine::new())
    }

    /// Controller over `props` resolving named sorters with `engine`.
    ///
    /// The first sort already runs against `engine`.
    pub fn with_engine(props: TableProps, engine: SortEngine) -> Self {
        Self {
            state: TableState::new(props, &engine),
            engine,
            formatter: Box::new(RpxFormatter::default()),
            on_change: None,
        }
    }

    /// Swap the sort engine and re-sort the current rows with it.
    pub fn set_engine(&mut self, engine: SortEngine) {
        let rows = engine.sort(&self.state.columns, &self.state.source.rows);
        self.engine = engine;
        let next = TableState {
            rows,
            ..self.state.clone()
        };
        self.commit(next);
    }

    /// Builder: format sizes with `formatter`.
    pub fn with_formatter(mut self, formatter: impl SizeFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Builder: notify `callback` with the ordered rows whenever they change.
    ///
    /// The current order is reported immediately.
    pub fn on_change<F>(mut self, mut callback: F) -> Self
    where
        F: FnMut(&[Row]) + 'static,
    {
        callback(&self.state.rows);
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Current snapshot.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Replace the external props.
    pub fn update(&mut self, props: TableProps) {
        let next = self.state.apply_external_update(props, &self.engine);
        self.commit(next);
    }

    /// Header click on the column at `index`.
    pub fn on_header_click(&mut self, index: usize) -> HeaderClick {
        let (next, outcome) = self.state.apply_header_click(index, &self.engine);
        match outcome {
            HeaderClick::Applied { column, order } => {
                log::debug!("column {} sort order -> {:?}", column, order)
            }
            HeaderClick::Ignored(reason) => {
                log::debug!("header click on column {} ignored: {:?}", index, reason)
            }
        }
        self.commit(next);
        outcome
    }

    /// Click on the body cell at (`column_index`, `row_index`).
    pub fn on_cell_click(&mut self, column_index: usize, row_index: usize) -> CellClick {
        let (next, outcome) = self.state.apply_cell_click(column_index, row_index);
        if let CellClick::Ignored(reason) = outcome {
            log::trace!(
                "cell click at ({}, {}) ignored: {:?}",
                column_index,
                row_index,
                reason
            );
        }
        self.commit(next);
        outcome
    }

    /// Read-only projection of the current snapshot.
    pub fn view(&self) -> TableView {
        self.state.view(self.formatter.as_ref())
    }

    fn commit(&mut self, next: TableState) {
        let reordered = next.rows != self.state.rows;
        self.state = next;
        if reordered {
            if let Some(callback) = self.on_change.as_mut() {
                callback(&self.state.rows);
            }
        }
    }
}
