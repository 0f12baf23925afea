//! Configuration types for rosparse.
//!
//! [`Config::load`] layers the built-in defaults, the optional
//! `~/.config/rosparse/config.toml`, and `ROSPARSE_`-prefixed environment
//! variables (`ROSPARSE_OUTPUT__FORMAT=json`). The file is never created.
//! Config files are always read as TOML, whatever their extension.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem or environment (useful in tests).

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
format          = "plain"
labels          = false
report_failures = false
"#;

const ENV_PREFIX: &str = "ROSPARSE";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/rosparse/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Prefix each plain-format field with `<key>=`.
    #[serde(default)]
    pub labels: bool,
    /// List rejected line numbers on stderr after printing entries.
    #[serde(default)]
    pub report_failures: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            labels: false,
            report_failures: false,
        }
    }
}

/// How parsed entries are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per entry, each field followed by a space.
    #[default]
    Plain,
    /// A pretty-printed JSON array of field mappings.
    Json,
    /// One compact JSON mapping per line.
    Jsonl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the default config path and the environment, layered on top
    /// of the built-in defaults. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layered(&config_path(), false)
    }

    /// Load from an explicit file path and the environment, layered on top of
    /// the built-in defaults. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, true)
    }

    fn load_layered(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/rosparse/config.toml`, falling back to `~/.config`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("rosparse")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
