//! Journal entry domain model.
//!
//! An [`Entry`] is a persisted journal record. Its `id` is assigned by the
//! store on creation and never changes; `created_at` is stamped once and is
//! preserved by updates, which only ever touch `content`.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to an entry by the store.
pub type EntryId = i64;

/// A persisted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry value with an explicit creation time.
    ///
    /// Stores use this when materializing records; tests use it to build
    /// fixtures with predictable timestamps.
    pub fn new(id: EntryId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }

    /// Formats the creation time in the local timezone using a chrono format string.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use jou::Entry;
    ///
    /// let entry = Entry::new(1, "hi", Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
    /// assert!(entry.created_on("%Y").starts_with("2024"));
    /// ```
    #[must_use]
    pub fn created_on(&self, format: &str) -> String {
        self.created_at.with_timezone(&Local).format(format).to_string()
    }

    /// Returns the first non-blank line of the content, used as a list preview.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn preview_skips_leading_blank_lines() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let entry = Entry::new(3, "\n   \n  first thought \nsecond", at);
        assert_eq!(entry.preview(), "first thought");
    }

    #[test]
    fn preview_of_blank_content_is_empty() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Entry::new(1, "  \n ", at).preview(), "");
    }
}
