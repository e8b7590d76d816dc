//! Session conversion history
//!
//! An append-only, insertion-ordered log of completed conversions. It lives
//! exactly as long as the session that owns it and is never persisted.

use serde::Serialize;
use std::fmt;

/// One completed conversion.
///
/// Records are immutable once built: fields are private and only exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    value: String,
    from_unit: String,
    to_unit: String,
    result: String,
}

impl ConversionRecord {
    /// Create a record from the raw input, both unit labels and the formatted result
    pub fn new(
        value: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            result: result.into(),
        }
    }

    /// Input value exactly as the user entered it
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Source unit display label
    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    /// Target unit display label
    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    /// Rounded result string
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.value, self.from_unit, self.result, self.to_unit
        )
    }
}

/// Ordered sequence of conversion records
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<ConversionRecord>,
}

impl History {
    /// Placeholder shown when there is nothing to list
    pub const EMPTY_MESSAGE: &'static str = "No history available";

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Never fails; there is no capacity limit or deduplication.
    pub fn append(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    /// Records in insertion order
    pub fn list(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    /// Most recently appended record
    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
