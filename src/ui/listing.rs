//! Plain-text entry listing for `jou show`.

use crate::domain::error::Result;
use crate::storage::EntryStore;
use std::io::Write;

/// Timestamp format used in the listing.
const LISTING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes every stored entry, newest first, one block per entry.
///
/// ```text
/// ID: 2
/// Date: 2024-05-02 21:10:00
/// Content: rain again
/// -------------------
/// ```
///
/// # Errors
///
/// Returns an error if the store cannot list entries or `out` fails.
pub fn write_entries<S: EntryStore + ?Sized>(store: &S, out: &mut impl Write) -> Result<()> {
    let _span = tracing::debug_span!("write_entries").entered();

    for entry in store.list_all()? {
        writeln!(out, "ID: {}", entry.id)?;
        writeln!(out, "Date: {}", entry.created_on(LISTING_DATE_FORMAT))?;
        writeln!(out, "Content: {}", entry.content)?;
        writeln!(out, "-------------------")?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entries_are_written_newest_first() {
        let store = MemoryStore::with_entries([
            Entry::new(1, "older", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            Entry::new(2, "newer", Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        ]);

        let mut out = Vec::new();
        write_entries(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let newer = text.find("Content: newer").unwrap();
        let older = text.find("Content: older").unwrap();
        assert!(newer < older);
        assert!(text.starts_with("ID: 2\nDate: "));
        assert_eq!(text.matches("-------------------").count(), 2);
    }

    #[test]
    fn empty_store_writes_nothing() {
        let mut out = Vec::new();
        write_entries(&MemoryStore::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
