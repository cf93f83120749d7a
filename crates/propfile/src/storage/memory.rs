//! In-memory file system for unit testing.
//!
//! # Why an in-memory file system?
//!
//! Real files need a writable temp directory and make it awkward to simulate
//! failures.  `MemoryFileSystem` keeps file contents in a `Mutex<HashMap<..>>`
//! so tests can seed files, inspect what a save produced and count how many
//! writes happened.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every read and write return an I/O error.
//! Existence checks are unaffected, so a store can still be constructed.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::storage::fs::FileSystem;

/// A file system held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<HashSet<PathBuf>>,
    writes: Mutex<usize>,
    /// When `true`, `read_all` and `write_all` fail with `PermissionDenied`.
    pub should_fail: bool,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file with `contents`.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        locked(&self.files).insert(path.into(), contents.into());
        self
    }

    /// Seeds an (empty) directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        locked(&self.dirs).insert(path.into());
        self
    }

    /// Returns the current contents of the file at `path`.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        locked(&self.files).get(path.as_ref()).cloned()
    }

    /// Removes the file at `path`, as if deleted by another process.
    pub fn remove(&self, path: impl AsRef<Path>) {
        locked(&self.files).remove(path.as_ref());
    }

    /// Number of successful `write_all` calls so far.
    pub fn write_count(&self) -> usize {
        *locked(&self.writes)
    }

    fn failure(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("mock failure for {}", path.display()),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        locked(&self.files).contains_key(path) || locked(&self.dirs).contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        locked(&self.dirs).contains(path)
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.should_fail {
            return Err(Self::failure(path));
        }
        if self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            ));
        }
        locked(&self.files).get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.should_fail {
            return Err(Self::failure(path));
        }
        locked(&self.files).insert(path.to_path_buf(), contents.to_vec());
        *locked(&self.writes) += 1;
        Ok(())
    }
}
