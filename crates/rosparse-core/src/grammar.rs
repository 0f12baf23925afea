//! Grammar: matches one ROS 2 console line into a [`LogEntry`].
//!
//! The accepted shape is
//!
//! ```text
//! [severity] [timestamp] [node_name]: message
//! ```
//!
//! Bracket fields hold one or more visible characters other than `[`, `]`
//! and whitespace. Spaces or tabs may separate the bracket fields and precede
//! the colon. After the colon, leading blanks are skipped and the rest of the
//! line is the message, taken verbatim. The message may contain brackets and
//! colons, but must not be empty. A single trailing `\n` or `\r\n` is ignored.
//!
//! Matching is anchored at both ends and all-or-nothing: any deviation yields
//! [`MalformedLine`] and no partial data.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MalformedLine;
use crate::types::LogEntry;

const LINE_PATTERN_SRC: &str = concat!(
    r"^[ \t]*",
    r"\[(?P<log_severity>[^\s\[\]\p{Cc}]+)\][ \t]*",
    r"\[(?P<timestamp>[^\s\[\]\p{Cc}]+)\][ \t]*",
    r"\[(?P<node_name>[^\s\[\]\p{Cc}]+)\][ \t]*",
    r":[ \t]*",
    // First message char is visible; the remainder is anything printable.
    r"(?P<message>[^\s\p{Cc}](?:[^\p{Cc}]|\t)*)",
    r"\r?\n?$",
);

static LINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINE_PATTERN_SRC).expect("log line pattern must be a valid regex"));

/// Match a single line against the log grammar.
///
/// Pure: no state is read or written. On success every field is populated;
/// on failure the caller only learns that the line did not match.
pub fn parse_line(line: &str) -> Result<LogEntry, MalformedLine> {
    let caps = LINE_PATTERN.captures(line).ok_or(MalformedLine)?;
    let field = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().to_owned())
            .ok_or(MalformedLine)
    };

    Ok(LogEntry {
        log_severity: field("log_severity")?,
        timestamp: field("timestamp")?,
        node_name: field("node_name")?,
        message: field("message")?,
    })
}

/// `true` when `line` would parse. Does not allocate the entry.
pub fn is_log_line(line: &str) -> bool {
    LINE_PATTERN.is_match(line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
