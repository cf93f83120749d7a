//! The file-system seam and its `std::fs` implementation.

use std::io;
use std::path::Path;

/// Whole-file operations needed by [`crate::PropertyStore`].
///
/// Every call is a self-contained open/process/close cycle; implementations
/// must not keep handles or locks between calls.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Returns `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Reads the complete contents of the file at `path`.
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces the contents of the file at `path` with `contents`.
    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// [`FileSystem`] backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}
