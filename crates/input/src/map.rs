//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, MoveDirection};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a single terminal event means to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Action(GameAction),
    Quit,
    Ignored,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(GameAction::Move(MoveDirection::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(GameAction::Move(MoveDirection::Right))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::SoftDrop),

        // Rotation (clockwise only)
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c' | 'C') => Some(GameAction::Hold),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Classify a raw terminal event. Quit wins over the `c` hold binding, and
/// key releases are dropped on terminals that report them.
pub fn classify(event: &Event) -> KeyInput {
    let Event::Key(key) = event else {
        return KeyInput::Ignored;
    };
    if key.kind == KeyEventKind::Release {
        return KeyInput::Ignored;
    }
    if should_quit(*key) {
        return KeyInput::Quit;
    }
    match handle_key_event(*key) {
        Some(action) => KeyInput::Action(action),
        None => KeyInput::Ignored,
    }
}
