//! Input adapters
//!
//! Convert a name-keyed JSON record or an uploaded CSV document into the
//! ordered raw sequence the validator expects. Columns or keys that are not
//! part of the feature layout are ignored; a missing feature leaves the
//! sequence short so validation reports it as a shape error.

use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::engine::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("CSV document is empty")]
    EmptyDocument,

    #[error("CSV document has a header but no data row")]
    MissingDataRow,

    #[error("CSV data row has {actual} cells but header has {expected}")]
    RowLength { expected: usize, actual: usize },

    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),

    #[error("unreadable CSV: {0}")]
    Malformed(String),
}

/// Values of a `{feature_name: value}` record in layout order
pub fn from_record(record: &Map<String, Value>) -> Vec<Value> {
    for key in record.keys().filter(|k| feature_index(k).is_none()) {
        tracing::debug!(key = %key, "ignoring unknown record key");
    }

    FEATURE_LAYOUT
        .iter()
        .filter_map(|name| record.get(*name).cloned())
        .collect()
}

/// Header row naming the columns, then one data row. Cells are kept as
/// strings for the validator to parse. Quoting follows RFC 4180; `#` lines
/// are comments.
pub fn from_csv(text: &str) -> Result<Vec<Value>, IngestError> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyDocument);
    }

    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(IngestError::EmptyDocument);
    }
    let row = reader.records().next().ok_or(IngestError::MissingDataRow)??;

    let mut slots: [Option<Value>; FEATURE_COUNT] = Default::default();
    for (column, cell) in header.iter().zip(row.iter()) {
        let Some(index) = feature_index(column) else {
            continue;
        };
        if slots[index].is_some() {
            return Err(IngestError::DuplicateColumn(column.to_string()));
        }
        slots[index] = Some(Value::String(cell.to_string()));
    }

    Ok(slots.into_iter().flatten().collect())
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => IngestError::RowLength {
                expected: *expected_len as usize,
                actual: *len as usize,
            },
            _ => IngestError::Malformed(err.to_string()),
        }
    }
}
