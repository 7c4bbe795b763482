//! View and menu option types for the navigation state machine.
//!
//! Exactly one [`View`] is active at any time and it alone decides how an
//! incoming event is interpreted. The main menu offers the [`MENU_OPTIONS`] in
//! a fixed order.
//!
//! # State Machine
//!
//! ```text
//!            ┌────────── backspace ──────────┐
//!            ▼                               │
//!  Menu ── enter ──► Compose | List | EditPick
//!                       │       │        │
//!                  ctrl+c│  enter│   enter│
//!                       ▼       ▼        ▼
//!              ConfirmDiscard  Detail   Compose
//! ```

/// The active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Main menu with the three options.
    #[default]
    Menu,

    /// Text editor for a new or existing entry.
    Compose,

    /// Entry list; enter opens the entry read-only.
    List,

    /// Entry list; enter loads the entry into the editor.
    EditPick,

    /// Read-only view of a single entry.
    Detail,

    /// "Discard unsaved changes?" prompt shown on ctrl+c from Compose.
    ConfirmDiscard,
}

impl View {
    /// Title shown in the screen header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Menu => "CLJour",
            Self::Compose => "Journal entry",
            Self::List => "Your journal entries",
            Self::EditPick => "Pick an entry to edit",
            Self::Detail => "Journal entry",
            Self::ConfirmDiscard => "Exit Without Saving?",
        }
    }
}

/// Options offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Compose,
    List,
    EditPick,
}

/// Menu options in display order.
pub const MENU_OPTIONS: [MenuOption; 3] = [MenuOption::Compose, MenuOption::List, MenuOption::EditPick];

impl MenuOption {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compose => "New entry",
            Self::List => "Read entries",
            Self::EditPick => "Edit an entry",
        }
    }

    /// The view this option opens.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::Compose => View::Compose,
            Self::List => View::List,
            Self::EditPick => View::EditPick,
        }
    }
}
