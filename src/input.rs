//! Input router: raw key events to state-machine actions
//!
//! Pure dispatch with no game-state logic. Actions that make no sense for the
//! current phase are no-ops inside the state machine, so every key maps the
//! same way regardless of what the session is doing:
//!
//! - letters: character entry
//! - Backspace: delete last letter
//! - Enter: the overloaded advance control
//! - Esc: cancel the in-flight analysis
//! - `1`..`5`: cycle the feedback color of that tile
//! - Tab: adopt the top suggestion
//! - Ctrl-N: new game
//! - Ctrl-C / Ctrl-Q: quit

use crate::core::WORD_LENGTH;
use crate::session::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map one key event to an action, if it means anything
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    // Key-release events would double every input on Windows
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::NewGame),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Advance),
        KeyCode::Backspace => Some(Action::Delete),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::AdoptSuggestion),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Char(c)),
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)?;
            let index = usize::try_from(digit).ok()?.checked_sub(1)?;
            (index < WORD_LENGTH).then_some(Action::CycleTile(index))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_map_to_char_entry() {
        assert_eq!(map_key(&press(KeyCode::Char('a'))), Some(Action::Char('a')));
        assert_eq!(map_key(&press(KeyCode::Char('Z'))), Some(Action::Char('Z')));
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(&press(KeyCode::Enter)), Some(Action::Advance));
        assert_eq!(map_key(&press(KeyCode::Backspace)), Some(Action::Delete));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(map_key(&press(KeyCode::Tab)), Some(Action::AdoptSuggestion));
    }

    #[test]
    fn digits_map_to_tile_cycles() {
        assert_eq!(
            map_key(&press(KeyCode::Char('1'))),
            Some(Action::CycleTile(0))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('5'))),
            Some(Action::CycleTile(4))
        );
        assert_eq!(map_key(&press(KeyCode::Char('6'))), None);
        assert_eq!(map_key(&press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn modified_keys() {
        assert_eq!(map_key(&ctrl('c')), Some(Action::Quit));
        assert_eq!(map_key(&ctrl('q')), Some(Action::Quit));
        assert_eq!(map_key(&ctrl('n')), Some(Action::NewGame));
        assert_eq!(map_key(&ctrl('x')), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(&press(KeyCode::F(1))), None);
        assert_eq!(map_key(&press(KeyCode::Left)), None);
        assert_eq!(map_key(&press(KeyCode::Char(' '))), None);
    }
}
