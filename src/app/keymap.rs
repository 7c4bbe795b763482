//! Terminal key mapping.
//!
//! Turns crossterm key events into engine [`Event`]s. The mapping depends on
//! the active view in two places: outside the editor `k`/`j` act as up/down,
//! and inside it modified arrows, enter and backspace (word deletion,
//! selection) reach the editor with their modifiers intact.

use super::handler::Event;
use super::modes::View;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::Input;

/// Maps a key press to an engine event.
///
/// Returns `None` for key releases and repeats, which the engine never sees.
#[must_use]
pub fn map_key(view: View, key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let plain = view != View::Compose || key.modifiers.is_empty();
    let event = match key.code {
        KeyCode::Char('s') if ctrl => Event::Save,
        KeyCode::Char('c') if ctrl => Event::Interrupt,
        KeyCode::Up if plain => Event::KeyUp,
        KeyCode::Down if plain => Event::KeyDown,
        KeyCode::Enter if plain => Event::Enter,
        KeyCode::Backspace if plain => Event::Backspace,
        KeyCode::Esc => Event::Escape,
        KeyCode::Char('k') if !ctrl && view != View::Compose => Event::KeyUp,
        KeyCode::Char('j') if !ctrl && view != View::Compose => Event::KeyDown,
        _ => Event::Edit(Input::from(key)),
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_textarea::Key;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_save_and_interrupt() {
        let save = map_key(View::Compose, press(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let quit = map_key(View::Menu, press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(save, Some(Event::Save));
        assert_eq!(quit, Some(Event::Interrupt));
    }

    #[test]
    fn vim_keys_navigate_outside_editor_only() {
        let k = press(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(map_key(View::List, k), Some(Event::KeyUp));

        match map_key(View::Compose, k) {
            Some(Event::Edit(input)) => assert_eq!(input.key, Key::Char('k')),
            other => panic!("expected editor input, got {other:?}"),
        }
    }

    #[test]
    fn modified_editing_keys_keep_their_modifiers_in_editor() {
        let alt_backspace = press(KeyCode::Backspace, KeyModifiers::ALT);
        match map_key(View::Compose, alt_backspace) {
            Some(Event::Edit(input)) => {
                assert_eq!(input.key, Key::Backspace);
                assert!(input.alt);
            }
            other => panic!("expected editor input, got {other:?}"),
        }

        let shift_up = press(KeyCode::Up, KeyModifiers::SHIFT);
        assert!(matches!(map_key(View::Compose, shift_up), Some(Event::Edit(input)) if input.shift));

        assert_eq!(map_key(View::List, alt_backspace), Some(Event::Backspace));
        assert_eq!(
            map_key(View::Compose, press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Event::Backspace)
        );
    }

    #[test]
    fn releases_are_dropped() {
        let mut key = press(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(View::Menu, key), None);
    }
}
