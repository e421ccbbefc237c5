//! Records to CSV conversion
//!
//! Output layout:
//! - header row `esco_uri,data`
//! - one row per record whose `uri` is non-empty after trimming
//! - both columns wrapped in double quotes; the data column is the whole
//!   record as compact JSON with `"` doubled
//! - rows joined by CRLF, no trailing terminator
//!
//! An empty record slice converts to the empty string; no header is emitted. The
//! check is on the raw input length, so a non-empty input whose records are
//! all dropped still yields the header alone.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::record::Record;

/// Header row columns
pub const HEADER: [&str; 2] = ["esco_uri", "data"];

/// Separator placed between rows
pub const ROW_SEPARATOR: &str = "\r\n";

/// Escape double quotes for a quoted CSV field.
/// Replaces `"` with `""`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\"\"")
}

/// Record and row counts for one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Records in the input, before filtering
    pub input_records: usize,
    /// Data rows emitted, header excluded
    pub output_rows: usize,
}

/// One data row. `data` is already quote-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub uri: String,
    pub data: String,
}

impl CsvRow {
    fn from_record(record: &Record) -> Result<Self> {
        let json = serde_json::to_string(record)?;
        Ok(Self {
            uri: record.uri().unwrap_or_default().to_string(),
            data: escape_quotes(&json),
        })
    }

    /// Render the row. The uri is emitted as-is, without escaping.
    pub fn to_line(&self) -> String {
        format!("\"{}\",\"{}\"", self.uri, self.data)
    }
}

/// Header plus the data rows built from the records that passed the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    rows: Vec<CsvRow>,
    input_records: usize,
}

impl CsvDocument {
    /// Build the document, dropping records without a usable `uri`.
    ///
    /// Every kept record is serialized here, so a serialization failure
    /// surfaces before anything is written.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        let mut rows = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if !record.has_uri() {
                debug!(index, "skipping record without uri");
                continue;
            }
            rows.push(CsvRow::from_record(record)?);
        }

        Ok(Self {
            rows,
            input_records: records.len(),
        })
    }

    pub fn header_line() -> String {
        HEADER.join(",")
    }

    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    pub fn stats(&self) -> ConversionStats {
        ConversionStats {
            input_records: self.input_records,
            output_rows: self.rows.len(),
        }
    }

    /// Render header and rows joined by CRLF
    pub fn to_csv_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(Self::header_line());
        lines.extend(self.rows.iter().map(CsvRow::to_line));
        lines.join(ROW_SEPARATOR)
    }
}

/// Output of [`convert_with_stats`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    pub stats: ConversionStats,
}

/// Convert records to CSV text. Empty input yields `""`.
pub fn convert(records: &[Record]) -> Result<String> {
    Ok(convert_with_stats(records)?.text)
}

/// Like [`convert`], also reporting the record and row counts
pub fn convert_with_stats(records: &[Record]) -> Result<Conversion> {
    if records.is_empty() {
        return Ok(Conversion {
            text: String::new(),
            stats: ConversionStats::default(),
        });
    }

    let document = CsvDocument::from_records(records)?;
    Ok(Conversion {
        text: document.to_csv_text(),
        stats: document.stats(),
    })
}
