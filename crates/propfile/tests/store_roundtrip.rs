//! Integration tests for `PropertyStore` against real files.
//!
//! Each test works in its own directory under the system temp dir, so the
//! tests can run in parallel.

use std::path::{Path, PathBuf};

use propfile::{Entries, Newline, PropertyStore, StoreError, StoreOptions};
use uuid::Uuid;

/// A unique temp directory that is removed on drop.
struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("propfile_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        Self(dir)
    }

    /// Creates `name` with `content` and returns its path.
    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.0.join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn read_store(path: &Path, options: StoreOptions) -> PropertyStore {
    let mut store = PropertyStore::new(path).expect("bind").with_options(options);
    store.read().expect("read");
    store
}

#[test]
fn test_new_rejects_missing_file() {
    let dir = TempDir::new();
    let missing = dir.path().join("missing.properties");

    let result = PropertyStore::new(&missing);

    assert!(matches!(result, Err(StoreError::Unbound { path }) if path == missing));
}

#[test]
fn test_new_rejects_directory() {
    let dir = TempDir::new();

    let result = PropertyStore::new(dir.path());

    assert!(matches!(result, Err(StoreError::Unbound { .. })));
}

#[test]
fn test_save_then_fresh_read_reproduces_mapping() {
    for newline in [Newline::Crlf, Newline::Lf, Newline::Cr] {
        // Arrange
        let dir = TempDir::new();
        let path = dir.file("app.properties", "");
        let options = StoreOptions {
            newline,
            multiline: false,
        };
        let mut writer = PropertyStore::new(&path).unwrap().with_options(options);
        writer
            .set("db.host", "localhost")
            .set("db.port", "5432")
            .set("greeting", "hello world")
            .set("empty", "");

        // Act
        writer.save().unwrap();
        let reader = read_store(&path, options);

        // Assert
        assert_eq!(reader.get_all(), writer.get_all(), "newline {newline}");
    }
}

#[test]
fn test_save_twice_produces_identical_files() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.file("app.properties", " b = 2 \na=1\nnoise\n");
    let store = read_store(&path, StoreOptions::default());

    // Act
    store.save().unwrap();
    let first = std::fs::read(&path).unwrap();
    store.save().unwrap();
    let second = std::fs::read(&path).unwrap();

    // Assert
    assert_eq!(first, second);
    assert_eq!(first, b"b=2\na=1\n");
}

#[test]
fn test_read_edit_save_keeps_order_and_appends_new_keys() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.file("app.properties", "z=26\na=1\nm=13\n");
    let mut store = read_store(&path, StoreOptions::default());

    // Act
    store.set("a", "one").set("new", "value");
    store.save().unwrap();

    // Assert
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "z=26\na=one\nm=13\nnew=value\n");
}

#[test]
fn test_multiline_values_round_trip_through_disk() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.file(
        "motd.properties",
        "motd = Welcome\n   to the server   \n\nrules=be nice\n",
    );
    let options = StoreOptions {
        newline: Newline::Lf,
        multiline: true,
    };

    // Act
    let store = read_store(&path, options);
    store.save().unwrap();
    let again = read_store(&path, options);

    // Assert
    assert_eq!(store.get("motd").unwrap(), "Welcome\nto the server");
    assert_eq!(again.get_all(), store.get_all());
}

#[test]
fn test_single_line_mode_drops_continuations_from_disk() {
    let dir = TempDir::new();
    let path = dir.file("app.properties", "a=1\nmore\n");

    let store = read_store(&path, StoreOptions::default());

    let expected: Entries = [("a", "1")].into_iter().collect();
    assert_eq!(store.get_all(), &expected);
}

#[test]
fn test_dos_file_read_with_dos_newline() {
    let dir = TempDir::new();
    let path = dir.file("win.properties", "a=1\r\nb=2\r\n");

    let mut store = PropertyStore::new(&path).unwrap();
    store.set_newline_dos().read().unwrap();

    assert_eq!(store.get("a").unwrap(), "1");
    assert_eq!(store.get("b").unwrap(), "2");
}

#[test]
fn test_unix_file_read_with_mac_newline_is_one_line() {
    let dir = TempDir::new();
    let path = dir.file("unix.properties", "a=1\nb=2\n");

    let mut store = PropertyStore::new(&path).unwrap();
    store.set_newline_mac().read().unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap(), "1\nb=2");
    assert!(store.get("b").unwrap_err().is_key_not_found());
}

#[test]
fn test_read_after_file_deleted_is_io_error() {
    let dir = TempDir::new();
    let path = dir.file("gone.properties", "a=1\n");
    let mut store = PropertyStore::new(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let err = store.read().unwrap_err();

    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn test_options_loaded_from_toml_drive_the_store() {
    // Arrange
    let dir = TempDir::new();
    let options_path = dir.file("options.toml", "newline = \"dos\"\nmultiline = true\n");
    let path = dir.file("app.properties", "");
    let options = StoreOptions::load(&options_path).unwrap();

    // Act
    let mut store = PropertyStore::new(&path).unwrap().with_options(options);
    store.set("a", "1").save().unwrap();

    // Assert
    assert_eq!(std::fs::read(&path).unwrap(), b"a=1\r\n");
}

#[test]
fn test_latin1_file_is_rejected_and_left_byte_identical() {
    // Arrange: "name=café" encoded as Latin-1
    let dir = TempDir::new();
    let path = dir.path().join("latin1.properties");
    std::fs::write(&path, b"name=caf\xE9\n").unwrap();
    let mut store = PropertyStore::new(&path).unwrap();

    // Act
    let err = store.read().unwrap_err();

    // Assert
    match err {
        StoreError::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(store.is_empty());
    assert_eq!(std::fs::read(&path).unwrap(), b"name=caf\xE9\n");
}
