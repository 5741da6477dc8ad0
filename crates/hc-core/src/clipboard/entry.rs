use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::EntryId;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("clipboard text is empty after trimming whitespace")]
    EmptyContent,
}

/// A single captured clipboard text.
///
/// Entries are immutable once built. Display helpers such as
/// [`ClipboardEntry::preview`] are derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    id: EntryId,
    content: String,
    captured_at_ms: i64,
}

impl ClipboardEntry {
    /// Builds an entry with a fresh identity.
    ///
    /// Fails with [`EntryError::EmptyContent`] for text that is empty or
    /// whitespace only.
    pub fn new(content: impl Into<String>, captured_at_ms: i64) -> Result<Self, EntryError> {
        let content = content.into();
        if is_blank(&content) {
            return Err(EntryError::EmptyContent);
        }
        Ok(Self {
            id: EntryId::new(),
            content,
            captured_at_ms,
        })
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn captured_at_ms(&self) -> i64 {
        self.captured_at_ms
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.captured_at_ms).single()
    }

    /// Single-line preview limited to `max_chars` characters.
    ///
    /// Line breaks and tabs collapse into one space; a cut preview ends with `…`.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut flattened = String::new();
        let mut run = String::new();
        for c in self.content.trim().chars() {
            if c.is_whitespace() {
                run.push(c);
                continue;
            }
            if run.contains(['\n', '\r', '\t']) {
                flattened.push(' ');
            } else {
                flattened.push_str(&run);
            }
            run.clear();
            flattened.push(c);
        }

        if flattened.chars().count() <= max_chars {
            return flattened;
        }
        let mut cut: String = flattened.chars().take(max_chars).collect();
        cut.push('…');
        cut
    }

    /// Human readable age relative to `now_ms`.
    pub fn relative_age(&self, now_ms: i64) -> String {
        let age = now_ms - self.captured_at_ms;
        if age < MS_PER_MINUTE {
            "just now".to_string()
        } else if age < MS_PER_HOUR {
            format!("{}m ago", age / MS_PER_MINUTE)
        } else if age < MS_PER_DAY {
            format!("{}h ago", age / MS_PER_HOUR)
        } else {
            format!("{}d ago", age / MS_PER_DAY)
        }
    }
}

/// Whether `text` carries no content once surrounding whitespace is removed.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_whitespace_only_content() {
        assert_eq!(
            ClipboardEntry::new("  \n\t ", 0).unwrap_err(),
            EntryError::EmptyContent
        );
        assert_eq!(ClipboardEntry::new("", 0).unwrap_err(), EntryError::EmptyContent);
    }

    #[test]
    fn keeps_content_verbatim() {
        let entry = ClipboardEntry::new("  padded\n", 42).unwrap();
        assert_eq!(entry.content(), "  padded\n");
        assert_eq!(entry.captured_at_ms(), 42);
    }

    #[test]
    fn preview_flattens_and_truncates() {
        let entry = ClipboardEntry::new("first line\nsecond line", 0).unwrap();
        assert_eq!(entry.preview(80), "first line second line");
        assert_eq!(entry.preview(5), "first…");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let entry = ClipboardEntry::new("héllo wörld", 0).unwrap();
        assert_eq!(entry.preview(5), "héllo…");
    }

    #[test]
    fn relative_age_buckets() {
        let entry = ClipboardEntry::new("x", 0).unwrap();
        assert_eq!(entry.relative_age(-5), "just now");
        assert_eq!(entry.relative_age(59_999), "just now");
        assert_eq!(entry.relative_age(5 * MS_PER_MINUTE), "5m ago");
        assert_eq!(entry.relative_age(3 * MS_PER_HOUR), "3h ago");
        assert_eq!(entry.relative_age(2 * MS_PER_DAY + 1), "2d ago");
    }
}
