//! In-memory data model, free of any file-system concerns.

/// Insertion-ordered property mapping.
///
/// See [`entries::Entries`] for the main type.
pub mod entries;
