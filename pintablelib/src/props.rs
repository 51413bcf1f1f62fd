//! External input for one table.
//!
//! `TableProps` is everything the host supplies on a cycle: columns, rows and
//! options. It can be built in code or loaded from a JSON document:
//!
//! ```json
//! {
//!   "columns": [{ "dataIndex": "score", "title": "Score", "sort": true }],
//!   "rows": [{ "id": 1, "score": "10" }],
//!   "options": { "rowKey": "id", "multipleSort": false }
//! }
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::data::{Column, Row};
use crate::error::PintableError;
use crate::options::TableOptions;
use crate::Result;

/// Columns, rows and options supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableProps {
    /// Ordered column definitions
    pub columns: Vec<Column>,
    /// Rows in their unsorted baseline order
    #[serde(alias = "rowData", alias = "dataSource")]
    pub rows: Vec<Row>,
    /// Table-wide options
    pub options: TableOptions,
}

impl TableProps {
    /// Props with the given columns and rows and default options.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            options: TableOptions::default(),
        }
    }

    /// Builder: set options
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a JSON table document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(PintableError::InvalidDocument("document is empty".to_string()));
        }
        let props: TableProps = serde_json::from_str(text)?;
        log::debug!(
            "loaded table document: {} columns, {} rows",
            props.columns.len(),
            props.rows.len()
        );
        Ok(props)
    }

    /// Read and parse a JSON table document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PintableError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Read and parse a JSON table document from any reader, e.g. stdin.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FixedEdge, SortOrder};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOCUMENT: &str = r#"{
        "columns": [
            {"dataIndex": "name", "title": "Name", "fixed": "left", "width": 80},
            {"dataIndex": "score", "title": "Score", "sort": true, "sortOrder": "ascend"}
        ],
        "rows": [
            {"id": 1, "name": "alpha", "score": "10"},
            {"id": 2, "name": "beta", "score": "2"}
        ],
        "options": {"rowKey": "id"}
    }"#;

    #[test]
    fn test_from_json_str() {
        let props = TableProps::from_json_str(DOCUMENT).unwrap();
        assert_eq!(props.columns.len(), 2);
        assert_eq!(props.columns[0].fixed, Some(FixedEdge::Left));
        assert_eq!(props.columns[1].sort_order, Some(SortOrder::Ascend));
        assert_eq!(props.rows.len(), 2);
        assert_eq!(props.options.row_key, "id");
    }

    #[test]
    fn test_row_data_alias_and_defaults() {
        let props = TableProps::from_json_str(r#"{"rowData": [{"a": 1}]}"#).unwrap();
        assert!(props.columns.is_empty());
        assert_eq!(props.rows.len(), 1);
        assert!(!props.options.multiple_sort);
    }

    #[test]
    fn test_empty_document_is_invalid() {
        let err = TableProps::from_json_str("   ").unwrap_err();
        assert!(matches!(err, PintableError::InvalidDocument(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = TableProps::from_json_str("{\"columns\": 3}").unwrap_err();
        assert!(matches!(err, PintableError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();
        let props = TableProps::from_path(file.path()).unwrap();
        assert_eq!(props.rows.len(), 2);
    }

    #[test]
    fn test_from_reader() {
        let props = TableProps::from_reader(DOCUMENT.as_bytes()).unwrap();
        assert_eq!(props.columns[0].data_index, "name");

        let err = TableProps::from_reader(&[0xffu8, 0xfe][..]).unwrap_err();
        assert!(matches!(err, PintableError::Io(_)));
    }

    #[test]
    fn test_from_missing_path() {
        let err = TableProps::from_path("/nonexistent/table.json").unwrap_err();
        assert!(matches!(err, PintableError::FileRead { .. }));
        assert!(err.to_string().contains("/nonexistent/table.json"));
    }
}
