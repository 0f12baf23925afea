//! Test builders: ergonomic constructors for log lines and their expected
//! [`LogEntry`] values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use rosparse_core::LogEntry;

// ---------------------------------------------------------------------------
// LogLineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder producing both the raw line and the entry it should parse to.
///
/// # Example
///
/// ```rust
/// let b = LogLineBuilder::new("planning failed [code 3]")
///     .severity("ERROR")
///     .node("planner_server");
/// assert_eq!(b.line(), "[ERROR] [0.0] [planner_server]: planning failed [code 3]");
/// ```
#[derive(Debug, Clone)]
pub struct LogLineBuilder {
    severity: String,
    timestamp: String,
    node: String,
    message: String,
    separator: String,
}

impl LogLineBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            severity: "INFO".to_string(),
            timestamp: "0.0".to_string(),
            node: "test_node".to_string(),
            message: message.into(),
            separator: " ".to_string(),
        }
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    /// Blank text placed between the bracket fields.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn line(&self) -> String {
        let sep = &self.separator;
        format!(
            "[{}]{sep}[{}]{sep}[{}]: {}",
            self.severity, self.timestamp, self.node, self.message
        )
    }

    pub fn entry(&self) -> LogEntry {
        LogEntry {
            log_severity: self.severity.clone(),
            timestamp: self.timestamp.clone(),
            node_name: self.node.clone(),
            message: self.message.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Line for an INFO message from `node`.
pub fn info_line(node: &str, message: &str) -> String {
    LogLineBuilder::new(message).node(node).line()
}

/// Line for an ERROR message from `node`.
pub fn error_line(node: &str, message: &str) -> String {
    LogLineBuilder::new(message)
        .severity("ERROR")
        .node(node)
        .line()
}
