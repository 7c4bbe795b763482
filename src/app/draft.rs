//! Draft lifecycle tracking.
//!
//! A [`Draft`] owns the editor buffer and remembers which stored entry, if any,
//! the next save should overwrite. It answers two questions for the rest of the
//! application:
//!
//! - **Create or update?** [`Draft::save_request`] builds a `Create` while no
//!   entry is targeted and an `Update` once one is.
//! - **Unsaved?** [`Draft::has_unsaved_changes`] compares the live text with
//!   the last persisted copy of the targeted entry.
//!
//! # Example
//!
//! ```rust
//! use jou::app::Draft;
//! use jou::worker::StoreRequest;
//!
//! let mut draft = Draft::new();
//! draft.set_text("hello");
//! assert!(draft.has_unsaved_changes());
//! assert_eq!(
//!     draft.save_request(),
//!     Some(StoreRequest::Create { content: "hello".into() })
//! );
//! ```

use crate::domain::{Entry, EntryId};
use crate::worker::StoreRequest;
use ratatui::style::{Modifier, Style};
use tui_textarea::{Input, TextArea};

const PLACEHOLDER: &str = "Write your journal entry here...";

/// In-progress journal text plus the bookkeeping needed to save it.
#[derive(Debug, Clone)]
pub struct Draft {
    editor: TextArea<'static>,
    focused: bool,
    target: Option<EntryId>,
    persisted: Option<Entry>,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    /// Creates an empty, blurred draft that targets no entry.
    #[must_use]
    pub fn new() -> Self {
        let mut draft = Self {
            editor: build_editor(""),
            focused: false,
            target: None,
            persisted: None,
        };
        draft.apply_focus_style();
        draft
    }

    /// Live editor text, lines joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.editor.lines().join("\n")
    }

    /// Replaces the editor contents, keeping focus and target untouched.
    pub fn set_text(&mut self, text: &str) {
        self.editor = build_editor(text);
        self.apply_focus_style();
    }

    /// Entry the next save overwrites, if any.
    #[must_use]
    pub const fn target(&self) -> Option<EntryId> {
        self.target
    }

    /// Entry as of the last successful save or load-for-edit.
    #[must_use]
    pub const fn persisted(&self) -> Option<&Entry> {
        self.persisted.as_ref()
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Editor widget, for rendering.
    #[must_use]
    pub const fn editor(&self) -> &TextArea<'static> {
        &self.editor
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.apply_focus_style();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.apply_focus_style();
    }

    /// Forwards a key to the editor. Returns `true` if the text changed.
    pub fn input(&mut self, input: Input) -> bool {
        self.editor.input(input)
    }

    /// Whether the live text has not been persisted yet.
    ///
    /// A draft with no target is always unsaved, even when empty.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        if self.target.is_none() {
            return true;
        }
        self.persisted
            .as_ref()
            .map_or(true, |entry| entry.content != self.text())
    }

    /// Store request that saves the current text, or `None` for an empty draft.
    #[must_use]
    pub fn save_request(&self) -> Option<StoreRequest> {
        let content = self.text();
        if content.is_empty() {
            return None;
        }

        Some(match self.target {
            None => StoreRequest::Create { content },
            Some(id) => StoreRequest::Update { id, content },
        })
    }

    /// Records the id the store assigned to a freshly created entry.
    pub fn on_created(&mut self, id: EntryId) {
        self.target = Some(id);
    }

    /// Records the stored copy fetched after a save.
    pub fn on_persisted(&mut self, entry: Entry) {
        self.persisted = Some(entry);
    }

    /// Loads an existing entry for editing and focuses the editor.
    pub fn begin_edit(&mut self, entry: &Entry) {
        self.target = Some(entry.id);
        self.persisted = Some(entry.clone());
        self.set_text(entry.content.trim());
        self.focus();
    }

    /// Drops the text and forgets the targeted entry.
    pub fn discard(&mut self) {
        self.target = None;
        self.persisted = None;
        self.set_text("");
    }

    fn apply_focus_style(&mut self) {
        let cursor = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.editor.set_cursor_style(cursor);
    }
}

fn build_editor(text: &str) -> TextArea<'static> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    let mut editor = TextArea::new(lines);
    editor.set_cursor_line_style(Style::default());
    editor.set_placeholder_text(PLACEHOLDER);
    editor.move_cursor(tui_textarea::CursorMove::Bottom);
    editor.move_cursor(tui_textarea::CursorMove::End);
    editor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tui_textarea::Key;

    fn typed(c: char) -> Input {
        Input {
            key: Key::Char(c),
            ..Input::default()
        }
    }

    #[test]
    fn new_draft_is_unsaved_and_has_nothing_to_save() {
        let draft = Draft::new();
        assert!(draft.has_unsaved_changes());
        assert_eq!(draft.save_request(), None);
        assert!(!draft.is_focused());
    }

    #[test]
    fn targeted_draft_builds_update() {
        let mut draft = Draft::new();
        draft.set_text("hello");
        draft.on_created(4);

        assert_eq!(
            draft.save_request(),
            Some(StoreRequest::Update {
                id: 4,
                content: "hello".into()
            })
        );
    }

    #[test]
    fn unsaved_until_persisted_copy_matches() {
        let mut draft = Draft::new();
        draft.set_text("hello");
        draft.on_created(1);
        assert!(draft.has_unsaved_changes());

        draft.on_persisted(Entry::new(1, "hello", Utc::now()));
        assert!(!draft.has_unsaved_changes());

        draft.input(typed('!'));
        assert_eq!(draft.text(), "hello!");
        assert!(draft.has_unsaved_changes());
    }

    #[test]
    fn begin_edit_trims_and_focuses() {
        let entry = Entry::new(2, "  line one\nline two\n\n", Utc::now());
        let mut draft = Draft::new();
        draft.begin_edit(&entry);

        assert_eq!(draft.text(), "line one\nline two");
        assert_eq!(draft.target(), Some(2));
        assert_eq!(draft.persisted(), Some(&entry));
        assert!(draft.is_focused());
    }

    #[test]
    fn typing_appends_at_end_of_loaded_text() {
        let mut draft = Draft::new();
        draft.set_text("B");
        draft.input(typed('!'));
        assert_eq!(draft.text(), "B!");
    }

    #[test]
    fn discard_forgets_everything() {
        let mut draft = Draft::new();
        draft.begin_edit(&Entry::new(3, "kept", Utc::now()));
        draft.discard();

        assert_eq!(draft.text(), "");
        assert_eq!(draft.target(), None);
        assert_eq!(draft.persisted(), None);
    }
}
