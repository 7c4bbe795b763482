//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` (see
//! `AppState::compute_compose_status` and friends) and consumed by the
//! components. They contain no business logic, only display-ready data.

use crate::domain::EntryId;

/// Header date and footer status line of the compose view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeStatus {
    /// Creation date of the edited entry, or today for a new draft.
    pub date: String,

    /// Whether the draft differs from its stored copy.
    pub unsaved: bool,

    /// Entry the draft is bound to, once saved or loaded.
    pub entry_id: Option<EntryId>,

    /// Last store failure, already formatted.
    pub error: Option<String>,
}

impl ComposeStatus {
    /// Status text before the error, e.g. `✓ Saved (ID: 3)`.
    ///
    /// ```
    /// use jou::ui::ComposeStatus;
    ///
    /// let status = ComposeStatus { date: String::new(), unsaved: true, entry_id: None, error: None };
    /// assert_eq!(status.indicator(), "● Unsaved changes");
    /// ```
    #[must_use]
    pub fn indicator(&self) -> String {
        let mut text = if self.unsaved {
            "● Unsaved changes".to_string()
        } else {
            "✓ Saved".to_string()
        };
        if let Some(id) = self.entry_id {
            text.push_str(&format!(" (ID: {id})"));
        }
        text
    }
}

/// One row of the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Formatted creation date.
    pub title: String,

    /// First non-blank line of the content.
    pub description: String,
}

/// Detail view contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub date: String,
    pub body: String,
    /// First visible body line.
    pub scroll: u16,
    /// How far through the body the view is, 0-100.
    pub scroll_percent: u8,
}
