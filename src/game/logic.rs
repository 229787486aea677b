//! Per-tick update and input handling.

use super::types::{FlappyGame, GamePhase};
use crate::constants::{BIRD_X, BOARD_HEIGHT, FLAP_VELOCITY, GRAVITY, PIPE_SPEED, SCORE_PER_PIPE};

/// Input actions the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Upward impulse (Space, Up, or X).
    Flap,
    /// Leave the game. Handled by the main loop, not the game state.
    Quit,
    /// Any other key. Ignored.
    Other,
}

/// Advance the world by one frame tick.
///
/// While ended the tick is a no-op — the frozen frame keeps rendering
/// until the player flaps to restart.
pub fn process_tick(game: &mut FlappyGame) {
    if game.phase == GamePhase::Ended {
        return;
    }
    game.tick_count += 1;

    // Gravity, then clamp against the ceiling. The bottom edge is the
    // loss boundary, not a clamp.
    game.bird.velocity += GRAVITY;
    game.bird.y = (game.bird.y + game.bird.velocity).max(0.0);
    if game.bird.y > BOARD_HEIGHT {
        game.phase = GamePhase::Ended;
        return;
    }

    // Scroll pipes left and score the ones the bird has passed. Each
    // member of a pair is worth half a point, exactly once.
    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
        if !pipe.scored && BIRD_X > pipe.right_edge() {
            pipe.scored = true;
            game.score += SCORE_PER_PIPE;
        }
    }

    // Any overlap with a pipe ends the run.
    let bird_rect = game.bird.rect();
    if game
        .pipes
        .iter()
        .any(|pipe| bird_rect.intersects(&pipe.rect()))
    {
        game.phase = GamePhase::Ended;
    }

    // Drop pipes that are fully off the left edge. Spawn order keeps the
    // vector sorted leftmost-first, so this is a prefix trim.
    while game
        .pipes
        .first()
        .is_some_and(|pipe| pipe.right_edge() < 0.0)
    {
        game.pipes.remove(0);
    }
}

/// Apply a player input.
///
/// Flap sets the upward impulse unconditionally; while ended it first
/// performs the full restart (bird back to its spawn point, pipes
/// cleared, score zeroed, phase back to Running). Everything else is
/// ignored.
pub fn process_input(game: &mut FlappyGame, input: GameInput) {
    match input {
        GameInput::Flap => {
            if game.phase == GamePhase::Ended {
                game.reset();
            }
            game.bird.velocity = FLAP_VELOCITY;
        }
        GameInput::Quit | GameInput::Other => {}
    }
}
