//! Terminal rendering. Reads game state only; never mutates it.

pub mod game_scene;

use crate::game::types::FlappyGame;
use ratatui::Frame;

/// Draw the whole UI for one frame.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame, best: f64) {
    game_scene::render(frame, frame.size(), game, best);
}
