//! Keyboard mapping for the terminal front end.

use crate::game::logic::GameInput;
use crossterm::event::KeyCode;

/// Map a key press to a game input.
///
/// Space, Up and `x` are equivalent flap keys. `q` and Esc quit.
/// Anything else is ignored.
pub fn map_key(code: KeyCode) -> GameInput {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => {
            GameInput::Flap
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}
