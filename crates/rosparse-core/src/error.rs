//! Error types for rosparse-core.

use thiserror::Error;

/// A line did not match `[severity] [timestamp] [node_name]: message`.
///
/// Carries no position or sub-rule information; every structural mismatch
/// reports the same failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("the string did not match the pattern")]
pub struct MalformedLine;

/// Configuration could not be read or deserialized.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
