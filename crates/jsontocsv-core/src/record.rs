//! Input records
//!
//! The input document is a JSON object whose `data` field holds an ordered
//! array of records. Records are untyped: only `uri` is looked up, and only
//! as a best-effort string.
//!
//! Parsing uses serde_json's default recursion limit (128 levels), so a
//! document nested deeper than that is rejected as invalid input.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::bail_invalid_input;
use crate::error::{ConvertError, Result};

/// Field holding the record's ESCO URI
pub const URI_FIELD: &str = "uri";

/// Field on the input object holding the record array
pub const DATA_FIELD: &str = "data";

/// A single input record, kept as its raw JSON value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    raw: Value,
}

impl Record {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The `uri` field, if present and a string. Not trimmed.
    pub fn uri(&self) -> Option<&str> {
        self.raw.get(URI_FIELD).and_then(Value::as_str)
    }

    /// Whether the record carries a `uri` that is non-empty after trimming
    pub fn has_uri(&self) -> bool {
        self.uri().is_some_and(|uri| !uri.trim().is_empty())
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl From<Value> for Record {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

/// Ordered sequence of records taken from the `data` field of an input object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Extract the record set from an already-parsed input object.
    ///
    /// Fields other than `data` are ignored. Elements of `data` that are not
    /// objects are kept; they simply have no `uri`.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut object = match value {
            Value::Object(object) => object,
            other => bail_invalid_input!(format!(
                "input must be a JSON object, found {}",
                value_kind(&other)
            )),
        };

        match object.remove(DATA_FIELD) {
            Some(Value::Array(items)) => {
                Ok(Self::new(items.into_iter().map(Record::new).collect()))
            }
            Some(other) => bail_invalid_input!(format!(
                "`{}` must be an array, found {}",
                DATA_FIELD,
                value_kind(&other)
            )),
            None => bail_invalid_input!(format!("input object has no `{}` field", DATA_FIELD)),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| ConvertError::invalid_input(format!("not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| ConvertError::invalid_input(format!("not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Read and parse an input document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConvertError::io_operation("read", path.display(), e))?;
        Self::from_json_str(&content)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
