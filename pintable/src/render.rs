//! Template rendering for CLI output using outstanding

use console::{pad_str, truncate_str, Alignment, Style};
use outstanding::{render_auto, render_with_output, Theme};
use pintablelib::{Align, ColumnLayout, FixedEdge, SortOrder, TableView};
use serde::Serialize;

/// Include template at compile time
const TABLE_TEMPLATE: &str = include_str!("../templates/table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Layout units per terminal character
const UNITS_PER_CHAR: f64 = 8.0;
/// Narrowest rendered column
const MIN_CHARS: usize = 4;
/// Column width when the layout carries no numeric width
const FALLBACK_CHARS: usize = 5;

const PLACEHOLDER: &str = "No data";

/// Body cell for template rendering (pre-padded)
#[derive(Debug, Serialize)]
struct TemplateCell {
    text: String,
    /// Pinned cells get the "pinned" style
    pinned: bool,
}

/// Body row for template rendering
#[derive(Debug, Serialize)]
struct TemplateRow {
    key: String,
    cells: Vec<TemplateCell>,
}

/// Data context for the table template
#[derive(Debug, Serialize)]
struct TableContext {
    loading: bool,
    /// Set when there are no columns to lay out
    placeholder: Option<String>,
    /// Pre-padded header labels
    headers: Vec<String>,
    separator: String,
    /// Rule under the header
    rule: String,
    rows: Vec<TemplateRow>,
    empty_body: bool,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("pinned", Style::new().cyan())
        .add("muted", Style::new().dim())
}

/// Terminal width of a column.
fn column_chars(column: &ColumnLayout) -> usize {
    column
        .width
        .map(|units| (units / UNITS_PER_CHAR).round() as usize)
        .unwrap_or(FALLBACK_CHARS)
        .max(MIN_CHARS)
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

/// Header label with its pin marker and sort indicator.
fn header_label(column: &ColumnLayout) -> String {
    let mut label = String::new();
    match column.fixed.as_ref().map(|pin| pin.edge) {
        Some(FixedEdge::Left) => label.push_str("◂ "),
        Some(FixedEdge::Right) => label.push_str("▸ "),
        None => {}
    }
    label.push_str(&column.title);
    match column.sort_order {
        Some(SortOrder::Ascend) => label.push_str(" ▲"),
        Some(SortOrder::Descend) => label.push_str(" ▼"),
        None if column.sortable => label.push_str(" ·"),
        None => {}
    }
    label
}

/// Fit `text` into `width` characters. Collapsed rows are truncated with an
/// ellipsis; expanded rows keep their full text.
fn fit(text: &str, width: usize, align: Align, expanded: bool) -> String {
    let fitted = if expanded {
        text.to_string()
    } else {
        truncate_str(text, width, "…").into_owned()
    };
    pad_str(&fitted, width, alignment(align), None).into_owned()
}

/// Build the template context from a view
fn build_context(view: &TableView) -> TableContext {
    if view.header_placeholder.is_some() {
        return TableContext {
            loading: view.loading,
            placeholder: Some(PLACEHOLDER.to_string()),
            headers: Vec::new(),
            separator: String::new(),
            rule: String::new(),
            rows: Vec::new(),
            empty_body: false,
        };
    }

    let widths: Vec<usize> = view.columns.iter().map(column_chars).collect();

    let headers = view
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| {
            fit(
                &header_label(column),
                width,
                column.align.unwrap_or(Align::Left),
                false,
            )
        })
        .collect();

    let rule = widths
        .iter()
        .map(|&width| "─".repeat(width))
        .collect::<Vec<_>>()
        .join("─┼─");

    let rows = view
        .rows
        .iter()
        .map(|row| TemplateRow {
            key: row.key.clone(),
            cells: row
                .cells
                .iter()
                .zip(&view.columns)
                .zip(&widths)
                .map(|((cell, column), &width)| TemplateCell {
                    text: fit(&cell.text, width, cell.align, view.expanded),
                    pinned: column.fixed.is_some(),
                })
                .collect(),
        })
        .collect();

    TableContext {
        loading: view.loading,
        placeholder: None,
        headers,
        separator: " │ ".to_string(),
        rule,
        rows,
        empty_body: view.body_placeholder.is_some(),
    }
}

/// Render a table view in the given output mode.
///
/// Structured modes serialize the view itself; terminal modes render the
/// table template.
pub fn render_view(
    view: &TableView,
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    let theme = create_theme();

    // For JSON mode, use outstanding's render_auto for serialization
    if matches!(output_mode, OutputMode::Json) {
        return Ok(render_auto(TABLE_TEMPLATE, view, &theme, output_mode)?);
    }

    let context = build_context(view);
    Ok(render_with_output(
        TABLE_TEMPLATE,
        &context,
        &theme,
        output_mode,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pintablelib::{Column, Row, TableController, TableOptions, TableProps};

    fn controller() -> TableController {
        TableController::new(
            TableProps::new(
                vec![
                    Column::new("name", "Name")
                        .fixed(FixedEdge::Left)
                        .align(Align::Left),
                    Column::new("score", "Score").sortable(),
                ],
                vec![
                    Row::new().with("name", "alpha").with("score", "10"),
                    Row::new()
                        .with("name", "a very long name indeed")
                        .with("score", "2"),
                ],
            )
            .with_options(TableOptions::new()),
        )
    }

    fn text(view: &TableView) -> String {
        render_view(view, OutputMode::Text).unwrap()
    }

    #[test]
    fn test_header_markers() {
        let mut table = controller();
        table.on_header_click(1);
        let context = build_context(&table.view());
        assert!(context.headers[0].starts_with("◂ Name"));
        assert!(context.headers[1].contains("Score ▲"));

        let output = text(&table.view());
        assert!(output.contains("◂ Name"));
        assert!(output.contains("Score ▲"));
    }

    #[test]
    fn test_unsorted_sortable_marker() {
        let output = text(&controller().view());
        assert!(output.contains("Score ·"));
    }

    #[test]
    fn test_rows_follow_sort_order() {
        let mut table = controller();
        table.on_header_click(1);
        let output = text(&table.view());
        let long = output.find("a very").unwrap();
        let short = output.find("alpha").unwrap();
        assert!(long < short);
    }

    #[test]
    fn test_collapsed_rows_truncate() {
        let context = build_context(&controller().view());
        let cell = &context.rows[1].cells[0];
        assert!(cell.text.contains('…'));
        assert!(cell.pinned);
        assert!(!cell.text.contains("a very long name indeed"));
        assert!(!context.rows[1].cells[1].pinned);
    }

    #[test]
    fn test_expanded_rows_keep_full_text() {
        let mut table = controller();
        table.on_cell_click(0, 0);
        let output = text(&table.view());
        assert!(output.contains("a very long name indeed"));
    }

    #[test]
    fn test_placeholders_and_loading() {
        let props = TableProps::new(vec![Column::new("a", "A")], Vec::new())
            .with_options(TableOptions::new().with_loading(true));
        let context = build_context(&TableController::new(props).view());
        assert!(context.loading);
        assert!(context.empty_body);
        assert!(context.placeholder.is_none());

        let output = text(&TableController::new(
            TableProps::new(vec![Column::new("a", "A")], Vec::new())
                .with_options(TableOptions::new().with_loading(true)),
        )
        .view());
        assert!(output.starts_with("Loading…"));
        assert!(output.trim_end().ends_with(PLACEHOLDER));

        let empty = TableController::new(TableProps::default());
        let context = build_context(&empty.view());
        assert_eq!(context.placeholder.as_deref(), Some(PLACEHOLDER));
        assert_eq!(text(&empty.view()).trim(), PLACEHOLDER);
    }

    #[test]
    fn test_column_chars() {
        let view = controller().view();
        // two columns share 182.5 units, capped to 150
        assert_eq!(column_chars(&view.columns[0]), 19);
    }

    #[test]
    fn test_json_mode_serializes_view() {
        let json = render_view(&controller().view(), OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["rows"].as_array().map(Vec::len), Some(2));
        assert_eq!(parsed["columns"][0]["fixed"]["edge"], "left");
    }
}
