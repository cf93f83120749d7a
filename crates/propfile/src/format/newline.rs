//! Line terminator conventions supported by the properties format.
//!
//! The configured [`Newline`] is used both to *split* a file into lines on
//! read and to *terminate* every line on write.  It is a literal delimiter,
//! not an auto-detector: a file written with `\r\n` and read back with
//! [`Newline::Lf`] keeps a stray `\r` at the end of each line (which trimming
//! then removes), while a file written with `\n` and read back with
//! [`Newline::Crlf`] is seen as one single line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The newline style of a properties file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Newline {
    /// Windows / DOS style: `\r\n`.
    #[serde(rename = "dos", alias = "crlf")]
    Crlf,
    /// Unix style: `\n`.
    #[default]
    #[serde(rename = "unix", alias = "lf")]
    Lf,
    /// Classic Mac OS style: `\r`.
    #[serde(rename = "mac", alias = "cr")]
    Cr,
}

impl Newline {
    /// Returns the literal terminator string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Newline::Crlf => "\r\n",
            Newline::Lf => "\n",
            Newline::Cr => "\r",
        }
    }

    /// Returns the conventional platform name (`dos`, `unix` or `mac`).
    pub const fn name(self) -> &'static str {
        match self {
            Newline::Crlf => "dos",
            Newline::Lf => "unix",
            Newline::Cr => "mac",
        }
    }
}

impl fmt::Display for Newline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Newline::from_str`] for an unrecognised name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown newline style: {0:?} (expected dos, unix or mac)")]
pub struct UnknownNewline(pub String);

impl FromStr for Newline {
    type Err = UnknownNewline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dos" | "crlf" => Ok(Newline::Crlf),
            "unix" | "lf" => Ok(Newline::Lf),
            "mac" | "cr" => Ok(Newline::Cr),
            _ => Err(UnknownNewline(s.to_string())),
        }
    }
}
