//! rosparse: parse ROS 2 console logs into structured records.
//!
//! Re-exports the core layers so that integration tests and embedders can
//! import everything from one place, and exposes the [`cli`] module that the
//! `rosparse` binary is a thin wrapper around.
//!
//! # Architecture
//!
//! ```text
//! log file ──► cli ──► LogStore ──► Grammar
//!                │         │
//!                └─────────┴──► render (plain / json / jsonl)
//! ```

pub mod cli;

pub use rosparse_core::{config, error, grammar, store, types};
pub use rosparse_core::{EntryMap, LogEntry, LogStore, MalformedLine, FIELD_KEYS};
