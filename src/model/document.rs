//! Document-level model types.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SourceTable, TextElement};
use crate::error::{Error, Result};

/// The parsed document model handed over by the external extractor.
///
/// Text elements are ordered as they appear in the document; tables are a
/// separate collection with no positional interleaving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Ordered text element stream.
    #[serde(default)]
    pub texts: Vec<TextElement>,

    /// Extracted tables, in the extractor's collection order.
    #[serde(default)]
    pub tables: Vec<SourceTable>,
}

impl DocumentModel {
    /// Create an empty document model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a model from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Model(e.to_string()))
    }

    /// Deserialize a model from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::Model(e.to_string()))
    }

    /// Read and deserialize a model from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Append a text element.
    pub fn push_text(&mut self, element: TextElement) {
        self.texts.push(element);
    }

    /// Append a table.
    pub fn push_table(&mut self, table: SourceTable) {
        self.tables.push(table);
    }

    /// Check if the model carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.tables.is_empty()
    }
}
