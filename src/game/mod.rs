mod player;

pub use player::Player;

use crate::{
    generators::{RandomSource, generate_maze},
    maze::{Direction, Maze},
};

/// Result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Player position after the attempt
    pub position: (u16, u16),
    /// Whether the player actually moved
    pub moved: bool,
    /// Whether the player stands on the exit after the attempt
    pub won: bool,
}

/// Everything one round of the game needs: the carved maze and the player in it.
/// Owned by the app loop and passed around explicitly.
pub struct GameState {
    /// The maze being played
    maze: Maze,
    /// Tracks where the player currently is
    player: Player,
    /// Successful moves in this round
    moves: u32,
}

impl GameState {
    /// Set up a new round: carve a `cols` x `rows` maze and put the player at the top left.
    ///
    /// Panics if either `cols` or `rows` is 0.
    pub fn new<S: RandomSource>(cols: u16, rows: u16, random_source: &mut S) -> Self {
        let mut maze = Maze::new(cols, rows);
        // Carve the whole maze before anyone can look at it
        generate_maze(&mut maze, random_source);
        tracing::info!("[game] New {}x{} maze, exit at {:?}", cols, rows, maze.exit());
        GameState {
            maze,
            player: Player::new(),
            moves: 0,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Check if the player reached the exit.
    pub fn is_won(&self) -> bool {
        self.player.is_at_exit(&self.maze)
    }

    /// Attempt to move the player in the specified direction.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let (position, moved) = self.player.attempt_move(&self.maze, direction);
        if moved {
            self.moves += 1;
            tracing::debug!("[game] Moved {} to {:?}", direction, position);
        } else {
            tracing::debug!("[game] Wall blocks {} at {:?}", direction, position);
        }
        MoveOutcome {
            position,
            moved,
            won: self.is_won(),
        }
    }

    /// Replace the maze with a newly carved one of the same size and put the player back
    /// on the origin.
    pub fn reset<S: RandomSource>(&mut self, random_source: &mut S) {
        *self = GameState::new(self.maze.cols(), self.maze.rows(), random_source);
    }
}
