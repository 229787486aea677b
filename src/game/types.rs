//! Data model for the game world.

use crate::constants::{
    BIRD_HEIGHT, BIRD_START_Y, BIRD_WIDTH, BIRD_X, BOARD_WIDTH, GAP_HEIGHT, PIPE_BASE_Y,
    PIPE_HEIGHT, PIPE_WIDTH,
};
use crate::geometry::Rect;
use rand::Rng;

/// The two states of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Ended,
}

/// Which half of a spawned pair a pipe belongs to. Purely visual — both
/// halves behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// One pipe obstacle. Pipes are always spawned in top/bottom pairs
/// sharing an x column, with a fixed-height gap between them.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Horizontal position, decremented every tick.
    pub x: f64,
    /// Vertical position, fixed at spawn.
    pub y: f64,
    pub kind: PipeKind,
    /// Whether this pipe has already been scored (guards double counting).
    pub scored: bool,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    pub fn right_edge(&self) -> f64 {
        self.x + PIPE_WIDTH
    }
}

/// The player avatar. Its x position and size are fixed; y and velocity
/// change every tick and on flaps.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical position of the top edge. 0 is the ceiling.
    pub y: f64,
    /// Vertical velocity, positive downward.
    pub velocity: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(BIRD_X, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Full game state. The main loop owns one instance; every update is a
/// function of this struct, so the logic runs identically under tests
/// without a terminal attached.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub bird: Bird,
    /// Live pipes in spawn order. All pipes share one horizontal
    /// velocity, so the vector stays sorted leftmost-first.
    pub pipes: Vec<Pipe>,
    /// Half a point per pipe member passed, one point per pair.
    pub score: f64,
    pub phase: GamePhase,
    /// Frame ticks elapsed since the last reset.
    pub tick_count: u64,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0.0,
            phase: GamePhase::Running,
            tick_count: 0,
        }
    }

    /// Restore the initial state for an immediate restart.
    pub fn reset(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0.0;
        self.phase = GamePhase::Running;
        self.tick_count = 0;
    }

    /// Spawn one top/bottom pipe pair at the right edge of the board.
    ///
    /// A single uniform draw places the top pipe's y within a band around
    /// the midline; the bottom pipe sits a fixed gap below it, so the
    /// opening's position varies but its height never does. Suspended
    /// while the game is ended.
    pub fn spawn_pipe_pair<R: Rng>(&mut self, rng: &mut R) {
        if self.phase == GamePhase::Ended {
            return;
        }

        let top_y = PIPE_BASE_Y - PIPE_HEIGHT / 4.0 - rng.gen_range(0.0..PIPE_HEIGHT / 2.0);

        self.pipes.push(Pipe {
            x: BOARD_WIDTH,
            y: top_y,
            kind: PipeKind::Top,
            scored: false,
        });
        self.pipes.push(Pipe {
            x: BOARD_WIDTH,
            y: top_y + PIPE_HEIGHT + GAP_HEIGHT,
            kind: PipeKind::Bottom,
            scored: false,
        });
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let game = FlappyGame::new();
        assert_eq!(game.phase, GamePhase::Running);
        assert!(game.pipes.is_empty());
        assert!((game.score - 0.0).abs() < f64::EPSILON);
        assert!((game.bird.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert!((game.bird.velocity - 0.0).abs() < f64::EPSILON);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_spawn_creates_pair_at_right_edge() {
        let mut game = FlappyGame::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        game.spawn_pipe_pair(&mut rng);

        assert_eq!(game.pipes.len(), 2);
        assert_eq!(game.pipes[0].kind, PipeKind::Top);
        assert_eq!(game.pipes[1].kind, PipeKind::Bottom);
        for pipe in &game.pipes {
            assert!((pipe.x - BOARD_WIDTH).abs() < f64::EPSILON);
            assert!(!pipe.scored);
        }
    }

    #[test]
    fn test_pair_gap_is_constant_for_any_draw() {
        for seed in 0..50 {
            let mut game = FlappyGame::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            game.spawn_pipe_pair(&mut rng);

            let spacing = game.pipes[1].y - game.pipes[0].y;
            assert!(
                (spacing - (PIPE_HEIGHT + GAP_HEIGHT)).abs() < f64::EPSILON,
                "seed {}: spacing {} != {}",
                seed,
                spacing,
                PIPE_HEIGHT + GAP_HEIGHT
            );
        }
    }

    #[test]
    fn test_top_pipe_offset_stays_in_band() {
        for seed in 0..50 {
            let mut game = FlappyGame::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            game.spawn_pipe_pair(&mut rng);

            let top_y = game.pipes[0].y;
            let highest = PIPE_BASE_Y - PIPE_HEIGHT / 4.0 - PIPE_HEIGHT / 2.0;
            let lowest = PIPE_BASE_Y - PIPE_HEIGHT / 4.0;
            assert!(top_y > highest && top_y <= lowest, "seed {}: {}", seed, top_y);
        }
    }

    #[test]
    fn test_spawn_suspended_while_ended() {
        let mut game = FlappyGame::new();
        game.phase = GamePhase::Ended;
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        game.spawn_pipe_pair(&mut rng);

        assert!(game.pipes.is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = FlappyGame::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        game.spawn_pipe_pair(&mut rng);
        game.bird.y = 100.0;
        game.bird.velocity = 3.5;
        game.score = 7.5;
        game.phase = GamePhase::Ended;
        game.tick_count = 99;

        game.reset();

        assert_eq!(game.phase, GamePhase::Running);
        assert!(game.pipes.is_empty());
        assert!((game.score - 0.0).abs() < f64::EPSILON);
        assert!((game.bird.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert!((game.bird.velocity - 0.0).abs() < f64::EPSILON);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_bird_rect_uses_fixed_position_and_size() {
        let bird = Bird::new();
        let rect = bird.rect();
        assert!((rect.x - BIRD_X).abs() < f64::EPSILON);
        assert!((rect.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert!((rect.width - BIRD_WIDTH).abs() < f64::EPSILON);
        assert!((rect.height - BIRD_HEIGHT).abs() < f64::EPSILON);
    }
}
