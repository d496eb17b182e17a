//! Data loading utilities

use crate::error::{Result, ScoutError};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Rows scanned to infer column types
const DEFAULT_INFER_SCHEMA_LENGTH: usize = 1000;

/// Loads delimited text files into data frames
#[derive(Debug, Clone)]
pub struct DataLoader {
    /// Rows used for schema inference; `None` scans the whole file
    infer_schema_length: Option<usize>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    /// Create a new data loader
    pub fn new() -> Self {
        Self {
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
        }
    }

    /// Set the number of rows used for schema inference
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Load a comma-separated file with a header row
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<DataFrame> {
        self.load_delimited(path, b',')
    }

    /// Load a delimited file with a header row
    pub fn load_delimited(&self, path: impl AsRef<Path>, delimiter: u8) -> Result<DataFrame> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let parse_opts = CsvParseOptions::default().with_separator(delimiter);
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .with_parse_options(parse_opts)
            .into_reader_with_file_handle(file)
            .finish()?;

        debug!(path = %path.display(), rows = df.height(), cols = df.width(), "Loaded table");
        Ok(df)
    }

    /// Pick the delimiter from the file extension (`.csv` or `.tsv`)
    pub fn load_auto(&self, path: impl AsRef<Path>) -> Result<DataFrame> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => self.load_delimited(path, b','),
            "tsv" => self.load_delimited(path, b'\t'),
            other => Err(ScoutError::DataError(format!(
                "Unsupported file format: {}",
                if other.is_empty() { "<none>" } else { other }
            ))),
        }
    }
}
