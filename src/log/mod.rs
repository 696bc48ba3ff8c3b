//! Log codec subsystem for linedb
//!
//! Owns the on-disk format: one record per line, classified by a leading
//! one-character status tag, with tombstoning implemented as an in-place tag
//! rewrite.
//!
//! # Invariants
//!
//! - A tombstoned entry's payload is never re-parsed as live data
//! - A record's log position is stable until the file is rewritten
//! - Non-live lines are preserved verbatim on rewrite, so repeated deletes
//!   are byte-stable
//! - Status tags are exactly one byte wide (in-place rewrite depends on it)

mod codec;
mod entry;
mod errors;

pub use codec::{decode, decode_live, encode_live, split_lines, tombstone_line};
pub use entry::{EntryStatus, ParsedLine, LIVE_TAG, TOMBSTONE_TAG};
pub use errors::{LogError, LogResult};
