//! # propfile
//!
//! Reads, modifies and writes Java-style `.properties` files: plain
//! `key=value` lines with a configurable newline convention and optional
//! multi-line values.
//!
//! # Architecture overview
//!
//! - **`format`** – The text format itself.  [`parse_into`] turns file text
//!   into entries and [`serialize`] turns entries back into text.  No I/O.
//!
//! - **`domain`** – [`Entries`], the insertion-ordered mapping that keeps a
//!   rewritten file in a stable layout.
//!
//! - **`storage`** – The [`FileSystem`] seam with a `std::fs` implementation
//!   and an in-memory one for tests.
//!
//! - **`store`** – [`PropertyStore`], which binds one file path to an
//!   [`Entries`] and exposes `read`, `save`, `get` and `set`.
//!
//! - **`config`** – [`StoreOptions`], the newline and multi-line settings,
//!   loadable from TOML.
//!
//! Not supported: comment lines, `\uXXXX` or `\=` escapes, and any kind of
//! locking between concurrent writers.
//!
//! # Example
//!
//! ```rust,no_run
//! use propfile::{PropertyStore, StoreError};
//!
//! # fn main() -> Result<(), StoreError> {
//! let mut store = PropertyStore::new("server.properties")?;
//! store.enable_multiline().read()?;
//!
//! match store.get("motd") {
//!     Ok(motd) => println!("motd: {motd}"),
//!     Err(StoreError::KeyNotFound(_)) => println!("no motd configured"),
//!     Err(e) => return Err(e),
//! }
//!
//! store.set("max-players", "20").save()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod format;
pub mod storage;
pub mod store;

pub use config::{ConfigError, StoreOptions};
pub use domain::entries::Entries;
pub use format::codec::{parse_into, parse_str, serialize, ParseOptions, ParseStats, SEPARATOR};
pub use format::newline::{Newline, UnknownNewline};
pub use storage::{FileSystem, MemoryFileSystem, StdFileSystem};
pub use store::{PropertyStore, StoreError};
