//! `PropertyStore`: one properties file bound to an in-memory mapping.
//!
//! # Lifecycle
//!
//! ```text
//! PropertyStore::new(path)   -- path must exist and not be a directory
//!  └─ read()                 -- merge the file into memory (repeatable)
//!  └─ get() / set()          -- inspect or change the mapping
//!  └─ save()                 -- overwrite the file with the mapping
//! ```
//!
//! The store holds no open handle between calls.  Two stores bound to the
//! same file can race on `save`; callers sharing a file across threads or
//! processes must synchronise externally.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::StoreOptions;
use crate::domain::entries::Entries;
use crate::format::codec::{parse_into, serialize, ParseOptions};
use crate::format::newline::Newline;
use crate::storage::fs::{FileSystem, StdFileSystem};

/// Error type for [`PropertyStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path given at construction does not name an existing file.
    #[error("cannot bind properties file {path}: not an existing file")]
    Unbound { path: PathBuf },

    /// Reading or writing the bound file failed.
    #[error("I/O error accessing properties file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `get` was called with a key that is not stored.
    #[error("property does not exist: {0}")]
    KeyNotFound(String),
}

impl StoreError {
    /// Returns `true` for [`StoreError::KeyNotFound`].
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, StoreError::KeyNotFound(_))
    }
}

/// Reads, edits and writes a single Java-style properties file.
///
/// # Examples
///
/// ```rust,no_run
/// use propfile::PropertyStore;
///
/// # fn main() -> Result<(), propfile::StoreError> {
/// let mut store = PropertyStore::new("app.properties")?;
/// store.set_newline_dos().enable_multiline().read()?;
///
/// let host = store.get("host")?.to_string();
/// store.set("last_host", host).save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PropertyStore<F: FileSystem = StdFileSystem> {
    path: PathBuf,
    newline: Newline,
    multiline: bool,
    entries: Entries,
    fs: F,
}

impl PropertyStore<StdFileSystem> {
    /// Binds a store to the existing file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unbound`] if nothing exists at `path` or it is a
    /// directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_fs(path, StdFileSystem)
    }
}

impl<F: FileSystem> PropertyStore<F> {
    /// Binds a store to `path` using the given file system.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unbound`] if `fs` reports nothing at `path` or a
    /// directory.
    pub fn with_fs(path: impl Into<PathBuf>, fs: F) -> Result<Self, StoreError> {
        let path = path.into();
        if !fs.exists(&path) || fs.is_dir(&path) {
            debug!("refusing to bind {}: not an existing file", path.display());
            return Err(StoreError::Unbound { path });
        }

        Ok(Self {
            path,
            newline: Newline::default(),
            multiline: false,
            entries: Entries::new(),
            fs,
        })
    }

    /// Builder-style variant of [`apply_options`](Self::apply_options).
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.apply_options(options);
        self
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    pub fn apply_options(&mut self, options: StoreOptions) -> &mut Self {
        self.newline = options.newline;
        self.multiline = options.multiline;
        self
    }

    pub fn set_newline(&mut self, newline: Newline) -> &mut Self {
        self.newline = newline;
        self
    }

    /// Uses `\r\n` line endings.
    pub fn set_newline_dos(&mut self) -> &mut Self {
        self.set_newline(Newline::Crlf)
    }

    /// Uses `\n` line endings (the default).
    pub fn set_newline_unix(&mut self) -> &mut Self {
        self.set_newline(Newline::Lf)
    }

    /// Uses `\r` line endings.
    pub fn set_newline_mac(&mut self) -> &mut Self {
        self.set_newline(Newline::Cr)
    }

    /// Lets lines without a separator continue the previous value.
    pub fn enable_multiline(&mut self) -> &mut Self {
        self.multiline = true;
        self
    }

    /// Drops lines without a separator (the default).
    pub fn disable_multiline(&mut self) -> &mut Self {
        self.multiline = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn newline(&self) -> Newline {
        self.newline
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn options(&self) -> StoreOptions {
        StoreOptions {
            newline: self.newline,
            multiline: self.multiline,
        }
    }

    /// The file system this store reads from and writes to.
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    // ── File operations ───────────────────────────────────────────────────────

    /// Parses the bound file and merges its entries into memory.
    ///
    /// Lines are split on the *configured* newline.  Keys already in memory
    /// are overwritten when the file contains them again; nothing is cleared.
    /// The file must be valid UTF-8; it is rejected rather than decoded
    /// lossily, so a later `save` can never rewrite bytes it did not
    /// understand.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read, or with
    /// [`io::ErrorKind::InvalidData`] if it is not valid UTF-8.  In-memory
    /// entries are left untouched in both cases.
    pub fn read(&mut self) -> Result<&mut Self, StoreError> {
        let bytes = self.fs.read_all(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()),
        })?;

        let options: ParseOptions = self.options().into();
        let stats = parse_into(&mut self.entries, &content, options);

        debug!(
            "read {} ({} lines, {} stored, {} continued, {} dropped; {} keys in memory)",
            self.path.display(),
            stats.lines,
            stats.stored,
            stats.continued,
            stats.dropped,
            self.entries.len()
        );
        Ok(self)
    }

    /// Returns the exact text [`save`](Self::save) would write.
    pub fn render(&self) -> String {
        serialize(&self.entries, self.newline)
    }

    /// Overwrites the bound file with every entry, in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.  The file may
    /// then be truncated; the in-memory entries are untouched.
    pub fn save(&self) -> Result<(), StoreError> {
        let content = self.render();
        self.fs
            .write_all(&self.path, content.as_bytes())
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "saved {} keys ({} bytes) to {}",
            self.entries.len(),
            content.len(),
            self.path.display()
        );
        Ok(())
    }

    // ── Entries ───────────────────────────────────────────────────────────────

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyNotFound`] if `key` is not stored.
    pub fn get(&self, key: &str) -> Result<&str, StoreError> {
        self.entries
            .get(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    /// Inserts or overwrites `key`.  New keys go after existing ones.
    ///
    /// Keys are stored as given.
    ///
    /// # Notes
    ///
    /// An empty key is ignored (and logged at `warn`), since such a line
    /// could never be read back.  Check [`contains_key`](Self::contains_key)
    /// afterwards if the key comes from untrusted input.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        if key.is_empty() {
            warn!("ignoring property with empty key for {}", self.path.display());
            return self;
        }
        self.entries.insert(key, value);
        self
    }

    /// Returns every stored entry in order (possibly none).
    pub fn get_all(&self) -> &Entries {
        &self.entries
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
