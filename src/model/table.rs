//! Source table structures.

use serde::{Deserialize, Serialize};

/// A table extracted by the upstream engine.
///
/// The grid is row-major cell text. Rows may be ragged and the grid may be
/// empty; both are tolerated throughout the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    /// Caption text, when the extractor found one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Rows of cell text.
    #[serde(default)]
    pub grid: Vec<Vec<String>>,
}

impl SourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows of cell text.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            caption: None,
            grid: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Set the caption and return self.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let table = SourceTable::from_rows([["Name", "Age"], ["Alice", "30"]]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.grid[1][0], "Alice");
        assert!(table.caption.is_none());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        // Captionless, gridless tables are valid input.
        let table: SourceTable = serde_json::from_str("{}").unwrap();
        assert!(table.is_empty());
        assert!(table.caption.is_none());
    }

    #[test]
    fn test_with_caption() {
        let table = SourceTable::new().with_caption("Table 1");
        assert_eq!(table.caption.as_deref(), Some("Table 1"));
    }
}
