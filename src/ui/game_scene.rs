//! The game scene: scaled playfield, bird, pipes, score bar, and the
//! game-over overlay.

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::types::{FlappyGame, GamePhase, PipeKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full game screen into `area`.
pub fn render(frame: &mut Frame, area: Rect, game: &FlappyGame, best: f64) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play area on top, 2-line status bar at the bottom.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], game);
    render_status_bar(frame, chunks[1], game, best);

    if game.phase == GamePhase::Ended {
        render_game_over(frame, area, game, best);
    }
}

/// Render the playfield by sampling the center of each terminal cell in
/// game-pixel space and asking what occupies that point.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = BOARD_WIDTH / width as f64;
    let y_scale = BOARD_HEIGHT / height as f64;

    let bird_rect = game.bird.rect();
    let bird_glyph = if game.bird.velocity < -1.0 {
        "▲" // rising after a flap
    } else if game.bird.velocity > 4.0 {
        "▼" // falling fast
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let game_x = (col as f64 + 0.5) * x_scale;

            if bird_rect.contains(game_x, game_y) {
                spans.push(Span::styled(
                    bird_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let pipe_here = game
                .pipes
                .iter()
                .find(|pipe| pipe.rect().contains(game_x, game_y));

            match pipe_here {
                Some(pipe) => {
                    let color = match pipe.kind {
                        PipeKind::Top => Color::Green,
                        PipeKind::Bottom => Color::LightGreen,
                    };
                    spans.push(Span::styled("█", Style::default().fg(color)));
                }
                None => spans.push(Span::raw(" ")),
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Two-line status bar: score line plus key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, game: &FlappyGame, best: f64) {
    if area.height < 1 {
        return;
    }

    let (message, color) = match game.phase {
        GamePhase::Running => (
            format!("Score: {}   Best: {}", game.score, best),
            Color::Green,
        ),
        GamePhase::Ended => ("Game over — flap to try again".to_string(), Color::Yellow),
    };

    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let controls = Line::from(vec![
            Span::styled("[Space/Up/X]", Style::default().fg(Color::White)),
            Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q/Esc]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]);
        let hints = Paragraph::new(controls).alignment(Alignment::Center);
        frame.render_widget(
            hints,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Centered game-over panel drawn over the frozen playfield.
fn render_game_over(frame: &mut Frame, area: Rect, game: &FlappyGame, best: f64) {
    let panel = centered_rect(area, 34, 7);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" GAME OVER ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", best), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to play again",
            Style::default().fg(Color::Green),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// A fixed-size rectangle centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
