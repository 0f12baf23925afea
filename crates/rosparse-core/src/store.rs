//! Store: the ordered, append-only corpus of parsed [`LogEntry`] values.
//!
//! The store drives the [grammar](crate::grammar) over incoming lines and
//! keeps every success in submission order. Failed lines never enter the
//! corpus. Nothing is ever removed or rewritten once stored, so the
//! projection accessors always reflect exactly what has been parsed so far.

use crate::error::MalformedLine;
use crate::grammar;
use crate::types::{EntryMap, LogEntry, FIELD_KEYS};

/// Accumulates parsed log entries and projects them into output shapes.
///
/// # Example
///
/// ```
/// use rosparse_core::LogStore;
///
/// let mut store = LogStore::new();
/// let results = store.parse_many(["[A] [1] [n]: x", "bad line", "[B] [2] [m]: y"]);
/// assert_eq!(results.len(), 3);
/// assert!(results[1].is_none());
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    corpus: Vec<LogEntry>,
}

impl LogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line, appending it to the corpus on success.
    ///
    /// A mismatch is reported through a `warn`-level tracing event carrying
    /// the fixed notice and the offending line, then returned to the caller.
    pub fn parse_one(&mut self, line: &str) -> Result<LogEntry, MalformedLine> {
        match grammar::parse_line(line) {
            Ok(entry) => {
                self.corpus.push(entry.clone());
                Ok(entry)
            }
            Err(err) => {
                tracing::warn!(line = line.trim_end(), "{err}");
                Err(err)
            }
        }
    }

    /// Parse a batch of lines in order.
    ///
    /// Returns exactly one slot per input line: `Some(entry)` for a match,
    /// `None` for a rejected line. Rejections are silent. Matches are appended
    /// to the corpus in submission order.
    pub fn parse_many<I, S>(&mut self, lines: I) -> Vec<Option<LogEntry>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let results: Vec<Option<LogEntry>> = lines
            .into_iter()
            .map(|line| grammar::parse_line(line.as_ref()).ok())
            .collect();

        self.corpus.extend(results.iter().flatten().cloned());

        let parsed = results.iter().filter(|r| r.is_some()).count();
        tracing::debug!(
            lines = results.len(),
            parsed,
            rejected = results.len() - parsed,
            corpus = self.corpus.len(),
            "parsed batch"
        );
        results
    }

    /// Every stored entry as its four field values, in corpus order.
    pub fn entries_as_sequences(&self) -> Vec<Vec<String>> {
        self.corpus.iter().map(LogEntry::to_sequence).collect()
    }

    /// Every stored entry as a name → value mapping, in corpus order.
    pub fn entries_as_mappings(&self) -> Vec<EntryMap> {
        self.corpus.iter().map(LogEntry::to_mapping).collect()
    }

    /// The fixed field names, for labelling sequence-form output.
    pub fn field_keys() -> &'static [&'static str; 4] {
        &FIELD_KEYS
    }

    /// The stored entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.corpus
    }

    /// Iterate the stored entries in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.corpus.iter()
    }

    /// Number of entries parsed so far.
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// `true` until the first line parses.
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}

impl<'a> IntoIterator for &'a LogStore {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
