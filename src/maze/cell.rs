use crate::maze::Direction;

/// Wall flags of a cell, indexed by [`Direction`]: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls([bool; 4]);

impl Walls {
    /// Every wall present.
    pub const ALL: Walls = Walls([true; 4]);

    /// Build from explicit flags in `top, right, bottom, left` order.
    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Walls([top, right, bottom, left])
    }

    pub fn has(&self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    pub(crate) fn remove(&mut self, direction: Direction) {
        self.0[direction.index()] = false;
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

/// A single square of the maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: u16,
    y: u16,
    /// Set by the generator once the cell has been carved into
    pub(crate) visited: bool,
    pub(crate) walls: Walls,
}

impl Cell {
    /// A fully walled, unvisited cell at `(x, y)`.
    pub fn new(x: u16, y: u16) -> Self {
        Cell {
            x,
            y,
            visited: false,
            walls: Walls::ALL,
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn coord(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }
}
