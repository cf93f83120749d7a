//! Text codec for properties files.
//!
//! Wire format:
//! ```text
//! KEY=VALUE<newline>
//! KEY=VALUE<newline>
//! ```
//! `<newline>` is one of `\r\n`, `\n` or `\r` (see [`Newline`]).  Keys and
//! values are trimmed on read and written back without padding around the
//! separator.  Nothing is escaped or quoted.
//!
//! # Parsing rules
//!
//! The content is split on the configured newline string and each line is
//! handled in order:
//!
//! 1. **Separator line** – split on the *first* `=`.  A non-empty key stores
//!    its value, overwriting any earlier one (last occurrence wins).  An empty
//!    key stores nothing.  In both cases the key becomes the *current key*.
//! 2. **Other line, multi-line on** – the trimmed line, if non-empty, is
//!    appended to the value under the current key, joined by the newline
//!    string.  If there is no current key, or nothing is stored under it
//!    (e.g. it was empty), the line is dropped.
//! 3. **Other line, multi-line off** – dropped.

use tracing::trace;

use crate::domain::entries::Entries;
use crate::format::newline::Newline;

/// The key/value separator character.
pub const SEPARATOR: char = '=';

/// Options that change how text is split into entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Line delimiter; also the joiner for continuation lines.
    pub newline: Newline,
    /// Whether separator-less lines continue the current key's value.
    pub multiline: bool,
}

/// Counters collected while parsing, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    /// Number of physical lines after splitting.
    pub lines: usize,
    /// Separator lines whose value was stored.
    pub stored: usize,
    /// Continuation lines appended to a value.
    pub continued: usize,
    /// Non-blank lines that contributed nothing.
    pub dropped: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses `content` into `entries`, merging with whatever is already there.
///
/// Existing keys found again in `content` are overwritten in place; new keys
/// are appended.  Nothing is removed.
///
/// # Examples
///
/// ```rust
/// use propfile::{parse_into, Entries, Newline, ParseOptions};
///
/// let mut entries = Entries::new();
/// let opts = ParseOptions { newline: Newline::Lf, multiline: true };
/// parse_into(&mut entries, "a = 1\n  more  \nb=x=y", opts);
///
/// assert_eq!(entries.get("a"), Some("1\nmore"));
/// assert_eq!(entries.get("b"), Some("x=y"));
/// ```
pub fn parse_into(entries: &mut Entries, content: &str, options: ParseOptions) -> ParseStats {
    let newline = options.newline.as_str();
    let mut stats = ParseStats::default();
    // Assigned on every separator line, even when its key is empty.
    let mut current_key: Option<&str> = None;

    for line in content.split(newline) {
        stats.lines += 1;

        if let Some((raw_key, raw_value)) = line.split_once(SEPARATOR) {
            let key = raw_key.trim();
            if key.is_empty() {
                trace!("dropping line {} with empty key", stats.lines);
                stats.dropped += 1;
            } else {
                entries.insert(key, raw_value.trim());
                stats.stored += 1;
            }
            current_key = Some(key);
            continue;
        }

        let extra = line.trim();
        if extra.is_empty() {
            continue;
        }
        if !options.multiline || entries.is_empty() {
            stats.dropped += 1;
            continue;
        }

        match current_key.and_then(|key| entries.get_mut(key)) {
            Some(value) => {
                value.push_str(newline);
                value.push_str(extra);
                stats.continued += 1;
                trace!("line {} continues key {:?}", stats.lines, current_key);
            }
            None => {
                trace!("dropping continuation line {} with no current key", stats.lines);
                stats.dropped += 1;
            }
        }
    }

    stats
}

/// Parses `content` into a fresh [`Entries`].
pub fn parse_str(content: &str, options: ParseOptions) -> Entries {
    let mut entries = Entries::new();
    parse_into(&mut entries, content, options);
    entries
}

/// Serializes `entries` as `key=value` lines, each terminated by `newline`.
///
/// # Examples
///
/// ```rust
/// use propfile::{serialize, Entries, Newline};
///
/// let entries: Entries = [("a", "1"), ("b", "2")].into_iter().collect();
/// assert_eq!(serialize(&entries, Newline::Crlf), "a=1\r\nb=2\r\n");
/// ```
pub fn serialize(entries: &Entries, newline: Newline) -> String {
    let newline = newline.as_str();
    let capacity = entries
        .iter()
        .map(|(k, v)| k.len() + v.len() + 1 + newline.len())
        .sum();

    let mut out = String::with_capacity(capacity);
    for (key, value) in entries {
        out.push_str(key);
        out.push(SEPARATOR);
        out.push_str(value);
        out.push_str(newline);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
