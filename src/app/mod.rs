mod canvas;
mod input;

pub use canvas::{Canvas, Tile};
pub use input::{Action, action_for};

use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor,
    event::{self, Event, KeyCode},
    execute, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    config::Settings,
    game::GameState,
    generators::{RandomSource, get_rng},
    maze::Maze,
};

/// Lines below the maze reserved for the status message
const STATUS_LINES: u16 = 1;

/// Maze size that fills a terminal of `term_width` x `term_height` characters, capped by
/// `max_dims`. Returns `None` when not even a single cell fits.
pub fn maze_dimensions(
    (term_width, term_height): (u16, u16),
    max_dims: Option<(u16, u16)>,
) -> Option<(u16, u16)> {
    // Each cell takes two tiles per axis plus one closing wall
    let tiles_wide = term_width / Tile::WIDTH;
    let tiles_high = term_height.saturating_sub(STATUS_LINES);
    let cols = tiles_wide.saturating_sub(1) / 2;
    let rows = tiles_high.saturating_sub(1) / 2;
    if cols == 0 || rows == 0 {
        return None;
    }
    match max_dims {
        Some((max_cols, max_rows)) => Some((cols.min(max_cols), rows.min(max_rows))),
        None => Some((cols, rows)),
    }
}

/// Whether a terminal of `term_size` characters can show all of `maze`.
pub fn maze_fits(maze: &Maze, term_size: (u16, u16)) -> bool {
    maze_dimensions(term_size, None)
        .is_some_and(|(cols, rows)| cols >= maze.cols() && rows >= maze.rows())
}

/// What the screen needs after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Update {
    Nothing,
    /// The player moved away from `from`
    Step { from: (u16, u16) },
    /// A new maze replaced the old one
    Full,
    Quit,
}

/// Apply `action` to the game. While the maze is not `visible` moves are dropped and a
/// restart draws nothing; the next resize that fits redraws everything.
fn apply_action<S: RandomSource>(
    state: &mut GameState,
    action: Action,
    visible: bool,
    random_source: &mut S,
) -> Update {
    match action {
        Action::Quit => {
            tracing::info!("[app] Game was canceled by user, exiting...");
            Update::Quit
        }
        Action::Restart => {
            tracing::info!(
                "[app] Restarting after {} moves (won: {})",
                state.moves(),
                state.is_won()
            );
            state.reset(random_source);
            if visible {
                Update::Full
            } else {
                Update::Nothing
            }
        }
        // The maze is finished once won, only restart or quit from here
        Action::Move(_) if !visible || state.is_won() => Update::Nothing,
        Action::Move(direction) => {
            let from = state.player().position();
            let outcome = state.attempt_move(direction);
            if !outcome.moved {
                return Update::Nothing;
            }
            if outcome.won {
                tracing::info!("[app] Exit reached in {} moves", state.moves());
            }
            Update::Step { from }
        }
    }
}

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App { settings }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main game loop. Every key press is handled to completion before the next one is read.
    pub fn run(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        let (cols, rows) = match maze_dimensions(terminal::size()?, self.settings.max_dims) {
            Some(dims) => dims,
            None => {
                App::report_too_small(stdout)?;
                return Ok(());
            }
        };
        tracing::info!(
            "[app] Starting game with maze size {}x{} and seed {:?}",
            cols,
            rows,
            self.settings.seed
        );

        let mut rng = get_rng(self.settings.seed);
        let mut state = GameState::new(cols, rows, &mut rng);
        // False while the terminal is too small to show the maze
        let mut visible = true;
        App::draw_game(stdout, &state)?;

        loop {
            let key_event = match event::read()? {
                Event::Key(key_event) => key_event,
                Event::Resize(width, height) => {
                    tracing::debug!("[app] Terminal resized to {}x{}", width, height);
                    visible = App::redraw_after_resize(stdout, &state, (width, height))?;
                    continue;
                }
                _ => continue,
            };
            let Some(action) = action_for(&key_event) else {
                continue;
            };
            match apply_action(&mut state, action, visible, &mut rng) {
                Update::Quit => break,
                Update::Nothing => {}
                Update::Step { from } => {
                    App::draw_step(stdout, &state, from)?;
                    App::draw_status(stdout, &state)?;
                }
                Update::Full => App::draw_game(stdout, &state)?,
            }
        }
        Ok(())
    }

    /// Clear the screen and draw the whole maze plus status line.
    fn draw_game(stdout: &mut Stdout, state: &GameState) -> std::io::Result<()> {
        let canvas = Canvas::draw(state);
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for row in canvas.rows() {
            for tile in row {
                stdout.queue(style::Print(tile))?;
            }
            stdout.queue(style::Print("\r\n"))?;
        }
        App::draw_status(stdout, state)
    }

    /// Repaint only the two cells a move touched.
    fn draw_step(stdout: &mut Stdout, state: &GameState, from: (u16, u16)) -> std::io::Result<()> {
        let (fx, fy) = Canvas::cell_tile(from);
        let (tx, ty) = Canvas::cell_tile(state.player().position());
        queue!(
            stdout,
            cursor::MoveTo(fx * Tile::WIDTH, fy),
            style::Print(Canvas::floor_tile(state.maze(), from)),
            cursor::MoveTo(tx * Tile::WIDTH, ty),
            style::Print(Tile::Player),
        )?;
        stdout.flush()
    }

    /// Status line below the maze: move count and controls, or the win notification.
    fn draw_status(stdout: &mut Stdout, state: &GameState) -> std::io::Result<()> {
        let row = Canvas::tiles_for(state.maze().rows()) as u16;
        let msg = if state.is_won() {
            format!(
                "You escaped in {} moves! Press Enter for a new maze, or Esc to exit.",
                state.moves()
            )
            .with(Color::Green)
            .attribute(Attribute::Bold)
        } else {
            format!(
                "Moves: {}  ←/→/↑/↓: move  r: new maze  Esc: exit",
                state.moves()
            )
            .with(Color::Cyan)
        };
        log_terminal(stdout, row, Some(msg))
    }

    /// Redraw the game for the new terminal size, or a warning if the maze no longer fits.
    /// Returns whether the maze is on screen.
    fn redraw_after_resize(
        stdout: &mut Stdout,
        state: &GameState,
        term_size: (u16, u16),
    ) -> std::io::Result<bool> {
        if maze_fits(state.maze(), term_size) {
            App::draw_game(stdout, state)?;
            return Ok(true);
        }
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        log_terminal(
            stdout,
            0,
            Some(
                "Terminal is too small for the maze. Please resize the terminal, or press Esc to exit."
                    .to_string()
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold),
            ),
        )?;
        Ok(false)
    }

    fn report_too_small(stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("[app] Terminal too small for a maze");
        execute!(
            stdout,
            style::PrintStyledContent(
                "Terminal size is too small to display a maze. Please resize the terminal.\r\n"
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            ),
            style::PrintStyledContent(
                "Press Esc to exit...\r\n"
                    .with(Color::Blue)
                    .attribute(Attribute::Bold)
            )
        )?;
        App::wait_for_esc()
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let Event::Key(event::KeyEvent { code, kind, .. }) = event::read()?
                && code == KeyCode::Esc
                && kind == event::KeyEventKind::Press
            {
                break;
            }
        }
        Ok(())
    }
}

/// Replace the line at `row` with `msg`, cut to the terminal width. `None` just clears it.
pub fn log_terminal(
    stdout: &mut impl Write,
    row: u16,
    msg: Option<StyledContent<String>>,
) -> std::io::Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    if let Some(msg) = msg {
        let max_width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
        let (text, _) = msg.content().unicode_truncate(max_width);
        stdout.queue(style::PrintStyledContent(StyledContent::new(
            *msg.style(),
            text.to_string(),
        )))?;
    }
    stdout.flush()
}
