//! Storage infrastructure: the file-system capability used by the store.
//!
//! The store never touches `std::fs` directly.  It goes through the
//! [`FileSystem`] trait so that:
//!
//! - production code uses [`StdFileSystem`], a thin wrapper over `std::fs`;
//! - tests can substitute [`MemoryFileSystem`] (or a `mockall` mock) and
//!   exercise failure paths such as a full disk without a broken machine.

pub mod fs;
pub mod memory;

pub use fs::{FileSystem, StdFileSystem};
pub use memory::MemoryFileSystem;
