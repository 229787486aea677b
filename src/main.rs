mod constants;
mod game;
mod geometry;
mod input;
mod save_manager;
mod ui;

use constants::{FRAME_INTERVAL_MS, SPAWN_INTERVAL_MS};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic::{process_input, process_tick, GameInput};
use game::types::{FlappyGame, GamePhase};
use input::map_key;
use ratatui::{backend::CrosstermBackend, Terminal};
use save_manager::{HighScore, SaveManager};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let save_manager = SaveManager::new()?;
    let mut best = save_manager.load().best;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = FlappyGame::new();
    let mut rng = rand::thread_rng();

    // Two independent deadlines drive the game: the frame tick and the
    // pipe spawner. Input is applied between ticks; everything runs on
    // this one thread, so callbacks never interleave mid-update.
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let spawn_interval = Duration::from_millis(SPAWN_INTERVAL_MS);
    let mut last_frame = Instant::now();
    let mut last_spawn = Instant::now();

    'game: loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game, best))?;

        // Poll for input without blocking past the next frame deadline.
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS / 4))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event.code) {
                    GameInput::Quit => break 'game,
                    other => process_input(&mut game, other),
                }
            }
        }

        // Frame tick
        if last_frame.elapsed() >= frame_interval {
            let was_running = game.phase == GamePhase::Running;
            process_tick(&mut game);

            // Record a new best the moment a run ends.
            if was_running && game.phase == GamePhase::Ended && game.score > best {
                best = game.score;
                save_manager.save(&HighScore::new(best))?;
            }

            last_frame = Instant::now();
        }

        // Pipe spawner, on its own wall-clock cadence.
        if last_spawn.elapsed() >= spawn_interval {
            game.spawn_pipe_pair(&mut rng);
            last_spawn = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
