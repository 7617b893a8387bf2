//! Key mapping from terminal events to session actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pieceflow_types::SessionAction;

/// Map keyboard input to session actions.
///
/// Digits follow the menu numbering; letters are mnemonics.
pub fn handle_key_event(key: KeyEvent) -> Option<SessionAction> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => Some(SessionAction::Play),
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(SessionAction::Reserve)
        }
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(SessionAction::UseReserved)
        }
        KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SessionAction::SwapTop)
        }
        KeyCode::Char('5') | KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(SessionAction::SwapRun)
        }
        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
