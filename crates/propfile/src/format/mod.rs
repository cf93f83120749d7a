//! The properties text format: newline styles and the line codec.

pub mod codec;
pub mod newline;

pub use codec::{parse_into, parse_str, serialize, ParseOptions, ParseStats, SEPARATOR};
pub use newline::{Newline, UnknownNewline};
