//! rosparse-core: ROS 2 console log parsing.
//!
//! This crate exposes the two pipeline layers as public modules, plus the
//! shared types and errors used by both.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► Grammar ──► LogStore ──► projections (sequences / mappings)
//! ```
//!
//! Everything runs synchronously on the caller's thread. The [`LogStore`]
//! owns the accumulated entries; the grammar is a pure function.
//!
//! # Example
//!
//! ```
//! use rosparse_core::LogStore;
//!
//! let mut store = LogStore::new();
//! let line = r#"[INFO] [1673415247.564669534] [minimal_publisher]: Publishing: "Hello World: 0""#;
//! store.parse_one(line).unwrap();
//! assert_eq!(store.entries_as_sequences()[0][2], "minimal_publisher");
//! ```

pub mod config;
pub mod error;
pub mod grammar;
pub mod store;
pub mod types;

pub use error::MalformedLine;
pub use store::LogStore;
pub use types::{EntryMap, LogEntry, FIELD_KEYS};
