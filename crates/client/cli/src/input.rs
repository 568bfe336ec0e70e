//! Keyboard-to-command mapping.
//!
//! The rest of the application only sees [`KeyAction`]s, never raw
//! `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::Slot;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Move the rack cursor by the given number of cards.
    MoveCursor(isize),
    SelectSlot(Slot),
    ToggleSlot,
    /// Put the highlighted card into the active slot.
    Assign,
    Attack,
    NewBoard,
    DrawFate,
    None,
}

pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveCursor(-1),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveCursor(1),
        KeyCode::Char('1') => KeyAction::SelectSlot(Slot::Attacker),
        KeyCode::Char('2') => KeyAction::SelectSlot(Slot::Defender),
        KeyCode::Tab => KeyAction::ToggleSlot,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Assign,
        KeyCode::Char('a') => KeyAction::Attack,
        KeyCode::Char('b') => KeyAction::NewBoard,
        KeyCode::Char('f') => KeyAction::DrawFate,
        _ => KeyAction::None,
    }
}
