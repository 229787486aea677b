// Playfield dimensions in game pixels. Rendering scales these to the
// terminal; all logic runs in this coordinate space.
pub const BOARD_WIDTH: f64 = 360.0;
pub const BOARD_HEIGHT: f64 = 640.0;

// Bird size and fixed horizontal position.
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const BIRD_X: f64 = BOARD_WIDTH / 8.0;
pub const BIRD_START_Y: f64 = BOARD_HEIGHT / 2.0;

// Physics constants (per frame tick)
pub const GRAVITY: f64 = 0.4;
pub const FLAP_VELOCITY: f64 = -6.0;

// Pipe constants
pub const PIPE_WIDTH: f64 = 64.0;
pub const PIPE_HEIGHT: f64 = 512.0;
pub const PIPE_SPEED: f64 = 2.0;
// Baseline the top pipe's random offset is measured from.
pub const PIPE_BASE_Y: f64 = 0.0;
pub const GAP_HEIGHT: f64 = BOARD_HEIGHT / 4.0;

// Scoring constants. Each pipe member is worth half a point, so one
// top/bottom pair totals a full point.
pub const SCORE_PER_PIPE: f64 = 0.5;

// Game timing constants
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const SPAWN_INTERVAL_MS: u64 = 1500;
