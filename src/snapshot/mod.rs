//! Snapshot subsystem for linedb
//!
//! A snapshot is the full rewritten representation of a collection: one
//! schema header line followed by one line per record. Whole-collection
//! rewrites (compaction) go through here; the header line is the canonical
//! schema form, so re-compiling it reproduces an equivalent schema.

mod writer;

pub use writer::convert_to_save;
