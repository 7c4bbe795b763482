//! Event handling and state transition logic.
//!
//! This module implements the navigation engine: for every event it decides
//! which view is active, moves cursors, updates the draft and emits the store
//! requests that persist it. It never performs I/O. Store results come back as
//! [`Event::Store`] and are handled the same way in every view.
//!
//! # Architecture
//!
//! 1. Events arrive from the key mapper or from the store worker
//! 2. [`handle_event`] routes on the active [`View`]
//! 3. State mutations occur via `AppState` and `Draft` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use jou::app::{handle_event, Action, AppState, Event, View};
//! use jou::ui::Theme;
//! use jou::worker::StoreRequest;
//!
//! let mut state = AppState::new(Theme::default(), "%-d %b, %Y");
//! handle_event(&mut state, &Event::KeyDown);
//! let (render, actions) = handle_event(&mut state, &Event::Enter);
//!
//! assert!(render);
//! assert_eq!(state.view, View::List);
//! assert_eq!(actions, vec![Action::Store(StoreRequest::ListAll)]);
//! ```

use super::modes::{MenuOption, View};
use crate::app::{Action, AppState};
use crate::worker::{StoreRequest, StoreResponse};
use tui_textarea::{Input, Key};

/// Events produced by key presses or by the store worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Up arrow (or `k` outside the editor).
    KeyUp,
    /// Down arrow (or `j` outside the editor).
    KeyDown,
    Enter,
    Backspace,
    Escape,
    /// ctrl+s.
    Save,
    /// ctrl+c.
    Interrupt,

    /// Any other key, carried as editor input.
    Edit(Input),

    /// Result of a store request emitted earlier.
    Store(StoreResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the caller whether anything visible may have
/// changed. Unlisted (view, event) pairs are no-ops.
///
/// # Tracing
///
/// Each call creates a debug-level span with the view and event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", view = ?state.view, event_type = ?event).entered();

    if let Event::Store(response) = event {
        return handle_store_response(state, response);
    }

    match state.view {
        View::Menu => handle_menu(state, event),
        View::Compose => handle_compose(state, event),
        View::List | View::EditPick => handle_list(state, event),
        View::Detail => handle_detail(state, event),
        View::ConfirmDiscard => handle_confirm(state, event),
    }
}

fn handle_menu(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::KeyUp => {
            state.move_menu_up();
            (true, vec![])
        }
        Event::KeyDown => {
            state.move_menu_down();
            (true, vec![])
        }
        Event::Enter => {
            let Some(option) = state.selected_option() else {
                return (false, vec![]);
            };
            tracing::debug!(option = option.label(), "menu option chosen");

            state.enter_view(option.view());
            match option {
                MenuOption::Compose => {
                    state.draft.focus();
                    (true, vec![])
                }
                MenuOption::List | MenuOption::EditPick => (true, vec![begin_list_load(state)]),
            }
        }
        Event::Interrupt => (false, vec![Action::Quit]),
        _ => (false, vec![]),
    }
}

fn handle_compose(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Save => {
            let Some(request) = state.draft.save_request() else {
                tracing::debug!("empty draft, nothing to save");
                return (false, vec![]);
            };
            tracing::debug!(entry_id = ?state.draft.target(), "saving draft");
            state.last_error = None;
            (true, vec![Action::Store(request)])
        }
        Event::Escape => {
            state.draft.blur();
            (true, vec![])
        }
        Event::Interrupt => {
            state.enter_view(View::ConfirmDiscard);
            (true, vec![])
        }
        Event::KeyUp => forward_to_editor(state, key_input(Key::Up)),
        Event::KeyDown => forward_to_editor(state, key_input(Key::Down)),
        Event::Enter => forward_to_editor(state, key_input(Key::Enter)),
        Event::Backspace => forward_to_editor(state, key_input(Key::Backspace)),
        Event::Edit(input) => forward_to_editor(state, input.clone()),
        Event::Store(_) => (false, vec![]),
    }
}

fn handle_list(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::KeyUp => {
            state.move_list_up();
            (true, vec![])
        }
        Event::KeyDown => {
            state.move_list_down();
            (true, vec![])
        }
        Event::Enter => select_entry(state),
        Event::Backspace => {
            state.enter_view(View::Menu);
            state.menu_cursor = 0;
            (true, vec![])
        }
        Event::Interrupt => (false, vec![Action::Quit]),
        _ => (false, vec![]),
    }
}

fn handle_detail(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Backspace => {
            state.enter_view(View::List);
            (true, vec![])
        }
        Event::KeyUp => {
            state.scroll_detail_up();
            (true, vec![])
        }
        Event::KeyDown => {
            state.scroll_detail_down();
            (true, vec![])
        }
        Event::Interrupt => (false, vec![Action::Quit]),
        _ => (false, vec![]),
    }
}

fn handle_confirm(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Escape | Event::Backspace => {
            state.enter_view(View::Compose);
            (true, vec![])
        }
        Event::Enter => {
            tracing::debug!(entry_id = ?state.draft.target(), "discarding draft");
            state.draft.discard();
            state.list_cursor = 0;
            state.enter_view(View::Menu);
            (true, vec![])
        }
        Event::Interrupt => (false, vec![Action::Quit]),
        _ => (false, vec![]),
    }
}

/// Applies a store response. Valid in every view.
fn handle_store_response(state: &mut AppState, response: &StoreResponse) -> (bool, Vec<Action>) {
    match response {
        StoreResponse::Created { id } => {
            tracing::debug!(entry_id = id, "draft created, fetching stored copy");
            state.draft.on_created(*id);
            (true, vec![Action::Store(StoreRequest::Read { id: *id })])
        }
        StoreResponse::Updated { id } => {
            tracing::debug!(entry_id = id, "draft updated, fetching stored copy");
            (true, vec![Action::Store(StoreRequest::Read { id: *id })])
        }
        StoreResponse::Fetched { entry } => {
            state.draft.on_persisted(entry.clone());
            (true, vec![])
        }
        StoreResponse::Listed { entries } => {
            tracing::debug!(count = entries.len(), "entry snapshot loaded");
            state.loaded_entries.clone_from(entries);
            state.list_cursor = 0;
            (true, vec![])
        }
        StoreResponse::Deleted { id } => {
            tracing::debug!(entry_id = id, "entry deleted");
            (false, vec![])
        }
        StoreResponse::Failed(failure) => {
            tracing::error!(error = %failure, "store request failed");
            state.last_error = Some(failure.clone());
            (true, vec![])
        }
    }
}

/// Runs the selection protocol for the entry under the list cursor.
fn select_entry(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(selected) = state.selected_entry().cloned() else {
        tracing::debug!(cursor = state.list_cursor, "no entry under cursor");
        return (false, vec![]);
    };

    if state.view == View::EditPick {
        tracing::debug!(entry_id = selected.id, "editing entry");
        state.draft.begin_edit(&selected);
        state.enter_view(View::Compose);
    } else {
        tracing::debug!(entry_id = selected.id, "viewing entry");
        state.viewing = Some(selected);
        state.detail_scroll = 0;
        state.enter_view(View::Detail);
    }
    state.list_cursor = 0;

    (true, vec![])
}

/// Prepares a list view for a fresh snapshot and returns the load request.
fn begin_list_load(state: &mut AppState) -> Action {
    state.list_cursor = 0;
    state.last_error = None;
    Action::Store(StoreRequest::ListAll)
}

fn forward_to_editor(state: &mut AppState, input: Input) -> (bool, Vec<Action>) {
    if !state.draft.is_focused() {
        state.draft.focus();
    }
    state.draft.input(input);
    (true, vec![])
}

fn key_input(key: Key) -> Input {
    Input {
        key,
        ..Input::default()
    }
}
