use crate::maze::{Direction, Maze};

/// The single player walking the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    position: (u16, u16),
}

impl Player {
    /// Player at the origin.
    pub fn new() -> Self {
        Player::default()
    }

    pub fn position(&self) -> (u16, u16) {
        self.position
    }

    /// Attempt to step one cell in `direction`.
    ///
    /// The move succeeds iff the player's current cell has no wall on that side.
    /// Returns the position after the attempt and whether the player moved.
    /// A blocked move leaves the position unchanged.
    pub fn attempt_move(&mut self, maze: &Maze, direction: Direction) -> ((u16, u16), bool) {
        if maze.has_wall(self.position, direction) {
            return (self.position, false);
        }
        // Outer walls are never removed, so an open side always leads to a cell in bounds
        match direction.step(self.position) {
            Some(next) if maze.is_in_bounds(next) => {
                self.position = next;
                (self.position, true)
            }
            _ => panic!(
                "Open wall at {:?} facing {} leads outside the maze",
                self.position, direction
            ),
        }
    }

    /// Whether the player stands on the maze's exit cell.
    pub fn is_at_exit(&self, maze: &Maze) -> bool {
        self.position == maze.exit()
    }

    /// Put the player back on the origin.
    pub fn reset(&mut self) {
        self.position = (0, 0);
    }
}
