//! Log entry classification
//!
//! Every non-blank line in the log starts with a one-character status tag:
//!
//! ```text
//! E{"name":"a","age":3}     <- live record
//! D{"name":"b","age":5}     <- tombstoned record (payload preserved)
//! ```
//!
//! Both tags are exactly one byte wide. Tombstoning rewrites only the tag,
//! so a line's payload bytes and its position in the file never move.

/// Status tag for a live record line
pub const LIVE_TAG: char = 'E';

/// Status tag for a tombstoned record line
pub const TOMBSTONE_TAG: char = 'D';

/// Lifecycle status of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Record is live and visible to queries
    Live,
    /// Record is logically deleted; payload retained, never re-parsed
    Tombstoned,
}

impl EntryStatus {
    /// Returns the on-disk tag character for this status
    pub fn tag(&self) -> char {
        match self {
            EntryStatus::Live => LIVE_TAG,
            EntryStatus::Tombstoned => TOMBSTONE_TAG,
        }
    }

    /// Maps a tag character back to a status, if recognized
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            LIVE_TAG => Some(EntryStatus::Live),
            TOMBSTONE_TAG => Some(EntryStatus::Tombstoned),
            _ => None,
        }
    }
}

/// A single raw line of the log, classified by its leading tag.
///
/// Borrowed views into the file content; payload bytes are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Empty line (ignored for queries, dropped on rewrite)
    Blank,
    /// Live record payload (everything after the tag)
    Live { payload: &'a str },
    /// Tombstoned record payload (inert, preserved verbatim on rewrite)
    Tombstoned { payload: &'a str },
    /// Line with an unrecognized tag (inert, preserved verbatim on rewrite)
    Unrecognized { raw: &'a str },
}

impl<'a> ParsedLine<'a> {
    /// Classifies a single raw line by its first character.
    pub fn classify(line: &'a str) -> Self {
        let mut chars = line.chars();
        match chars.next() {
            None => ParsedLine::Blank,
            Some(tag) => {
                // Both tags are one byte, so the payload always starts at
                // byte offset 1 for recognized lines.
                match EntryStatus::from_tag(tag) {
                    Some(EntryStatus::Live) => ParsedLine::Live {
                        payload: &line[1..],
                    },
                    Some(EntryStatus::Tombstoned) => ParsedLine::Tombstoned {
                        payload: &line[1..],
                    },
                    None => ParsedLine::Unrecognized { raw: line },
                }
            }
        }
    }

    /// Returns true if this line carries a live record
    pub fn is_live(&self) -> bool {
        matches!(self, ParsedLine::Live { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        assert_eq!(EntryStatus::from_tag('E'), Some(EntryStatus::Live));
        assert_eq!(EntryStatus::from_tag('D'), Some(EntryStatus::Tombstoned));
        assert_eq!(EntryStatus::from_tag('X'), None);
        assert_eq!(EntryStatus::Live.tag(), 'E');
        assert_eq!(EntryStatus::Tombstoned.tag(), 'D');
    }

    #[test]
    fn test_classify_live() {
        let line = ParsedLine::classify("E{\"a\":1}");
        assert_eq!(
            line,
            ParsedLine::Live {
                payload: "{\"a\":1}"
            }
        );
        assert!(line.is_live());
    }

    #[test]
    fn test_classify_tombstoned() {
        let line = ParsedLine::classify("D{\"a\":1}");
        assert_eq!(
            line,
            ParsedLine::Tombstoned {
                payload: "{\"a\":1}"
            }
        );
        assert!(!line.is_live());
    }

    #[test]
    fn test_classify_blank_and_unrecognized() {
        assert_eq!(ParsedLine::classify(""), ParsedLine::Blank);
        assert_eq!(
            ParsedLine::classify("Xjunk"),
            ParsedLine::Unrecognized { raw: "Xjunk" }
        );
    }
}
