/// One of the four cardinal directions a wall can face or a player can step in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in neighbor order: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The direction pointing back, i.e. the wall a neighbor has facing this cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Coordinate delta `(dx, dy)` of one step in this direction. `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Index of this direction's flag in a [`Walls`](super::cell::Walls) array.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Take one step from `coord`. Returns `None` when the step would underflow or overflow `u16`.
    /// Bounds of a particular maze are not checked here.
    pub fn step(self, coord: (u16, u16)) -> Option<(u16, u16)> {
        let (x, y) = coord;
        match self {
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Right => Some((x.checked_add(1)?, y)),
            Direction::Down => Some((x, y.checked_add(1)?)),
            Direction::Left => Some((x.checked_sub(1)?, y)),
        }
    }

    /// Direction leading from `from` to `to` if the two coordinates are exactly one step apart.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.step(from) == Some(to))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
        }
    }
}
