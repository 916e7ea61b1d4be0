//! Append-only log subsystem for linedb
//!
//! Mutation events serialize to one log line each:
//! `<kind>,<id>[,<payload>]`, kind one of insert, update, remove. The log
//! is ordered; replaying lines in emission order against an empty or
//! snapshot-seeded state reconstructs the current collection state.
//!
//! # Design Principles
//!
//! - Exactly one action per event; ambiguous bundles are rejected
//! - Updates carry changed fields only, never a re-encoded full record
//! - Tombstones drop prior state for an id whether or not it exists yet
//! - Writer and reader are mutual inverses, line for line

mod errors;
mod reader;
mod record;
mod replay;
mod writer;

pub use errors::{LogError, LogResult};
pub use reader::parse_log_line;
pub use record::{ActionKind, ActionValues, LogEntry, UpdateValues};
pub use replay::{apply, replay, CollectionState};
pub use writer::convert_to_log;
