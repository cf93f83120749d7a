//! TOML-based store options.
//!
//! An embedding application can keep the newline style and multi-line flag
//! for its properties files in its own TOML configuration:
//!
//! ```toml
//! newline = "dos"
//! multiline = true
//! ```
//!
//! Both fields are optional.  Missing fields fall back to
//! [`StoreOptions::default()`] (Unix newlines, single-line values), so an
//! empty document is valid.
//!
//! This module only parses options it is handed; it never looks for
//! configuration files on its own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::codec::ParseOptions;
use crate::format::newline::Newline;

/// Error type for loading store options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing options at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Newline and multi-line settings for a [`crate::PropertyStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreOptions {
    /// `"dos"`, `"unix"` or `"mac"` (aliases `"crlf"`, `"lf"`, `"cr"`).
    #[serde(default)]
    pub newline: Newline,
    /// Whether separator-less lines continue the previous value.
    #[serde(default)]
    pub multiline: bool,
}

impl StoreOptions {
    /// Parses options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or a field has
    /// an unknown value.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses options from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

impl From<StoreOptions> for ParseOptions {
    fn from(options: StoreOptions) -> Self {
        ParseOptions {
            newline: options.newline,
            multiline: options.multiline,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
