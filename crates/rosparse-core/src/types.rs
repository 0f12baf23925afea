//! Core types for rosparse-core.
//!
//! This module defines the parsed [`LogEntry`] record and the fixed field-name
//! table used for every mapping-shaped projection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MalformedLine;

/// Field names of a [`LogEntry`], in field order.
pub const FIELD_KEYS: [&str; 4] = ["log_severity", "timestamp", "node_name", "message"];

/// A parsed entry as an insertion-ordered name → value mapping.
///
/// Backed by `serde_json::Map` with `preserve_order`, so keys iterate in
/// [`FIELD_KEYS`] order and the map serializes directly to JSON.
pub type EntryMap = serde_json::Map<String, serde_json::Value>;

/// One log line of the form `[severity] [timestamp] [node_name]: message`.
///
/// A `LogEntry` only exists for a line that matched the grammar in full; all
/// four fields are always present. None of them is interpreted: the
/// timestamp stays text and the severity is not mapped to a level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity token, e.g. `INFO`.
    pub log_severity: String,
    /// Timestamp token exactly as printed, e.g. `1673415247.564669534`.
    pub timestamp: String,
    /// Emitting node, e.g. `minimal_publisher`.
    pub node_name: String,
    /// Everything after the colon, verbatim. Never empty.
    pub message: String,
}

impl LogEntry {
    /// Field values in [`FIELD_KEYS`] order.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.log_severity.as_str(),
            self.timestamp.as_str(),
            self.node_name.as_str(),
            self.message.as_str(),
        ]
    }

    /// Look up a field by its name in [`FIELD_KEYS`].
    pub fn get(&self, key: &str) -> Option<&str> {
        FIELD_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|i| self.fields()[i])
    }

    /// Owned sequence form: severity, timestamp, node name, message.
    pub fn to_sequence(&self) -> Vec<String> {
        self.fields().iter().map(|f| f.to_string()).collect()
    }

    /// Mapping form keyed by [`FIELD_KEYS`], in field order.
    pub fn to_mapping(&self) -> EntryMap {
        FIELD_KEYS
            .iter()
            .zip(self.fields())
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
            .collect()
    }
}

/// Plain rendering: every field followed by a single space.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields() {
            write!(f, "{field} ")?;
        }
        Ok(())
    }
}

impl FromStr for LogEntry {
    type Err = MalformedLine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::grammar::parse_line(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
