pub mod cell;
mod direction;

pub use cell::{Cell, Walls};
pub use direction::Direction;

/// Rectangular grid of [`Cell`]s.
///
/// Every mutation keeps shared walls consistent: for two adjacent cells, the wall on one
/// facing the other is present exactly when the facing wall on the other is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Box<[Cell]>,
    cols: u16,
    rows: u16,
}

impl Maze {
    /// Creates a maze of `cols` x `rows` cells, every cell unvisited and fully walled.
    ///
    /// # Panics
    /// If either `cols` or `rows` is 0.
    pub fn new(cols: u16, rows: u16) -> Self {
        if cols == 0 || rows == 0 {
            panic!(
                "Maze dimensions must be positive (got {}x{})",
                cols, rows
            );
        }
        let cells = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Cell::new(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Maze { cells, cols, rows }
    }

    /// Width of the maze in cells.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Height of the maze in cells.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a maze has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The exit cell, bottom right corner.
    pub fn exit(&self) -> (u16, u16) {
        (self.cols - 1, self.rows - 1)
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.cols && coord.1 < self.rows
    }

    pub(crate) fn ravel_index(&self, coord: (u16, u16)) -> usize {
        // Overflow-safe since cols and rows are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.cols as usize + coord.0 as usize
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cell_at_index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub(crate) fn mark_visited(&mut self, index: usize) {
        self.cells[index].visited = true;
    }

    /// Whether the cell at `coord` has a wall on its `direction` side.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: (u16, u16), direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Get neighbors of a cell, in the order up, right, down, left, together with the
    /// direction each one lies in. Coordinates outside the maze yield nothing.
    pub fn neighbors_of(
        &self,
        coord: (u16, u16),
    ) -> impl Iterator<Item = (Direction, (u16, u16))> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |dir| dir.step(coord).map(|next| (dir, next)))
            .filter(|&(_, next)| self.is_in_bounds(next))
    }

    /// Removes the pair of walls separating two adjacent cells.
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    /// * If `a` and `b` are not exactly one step apart
    pub fn remove_wall_between(&mut self, a: (u16, u16), b: (u16, u16)) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!(
                "Cannot remove wall between {:?} and {:?}: coordinate out of bounds for a {}x{} maze",
                a, b, self.cols, self.rows
            );
        }
        let Some(direction) = Direction::between(a, b) else {
            panic!(
                "Cannot remove wall between {:?} and {:?}: cells are not adjacent",
                a, b
            );
        };
        let (ia, ib) = (self.ravel_index(a), self.ravel_index(b));
        self.cells[ia].walls.remove(direction);
        self.cells[ib].walls.remove(direction.opposite());
    }

    /// Whether two adjacent cells are connected by an open passage.
    /// Returns false for cells that are not adjacent.
    pub fn is_open_between(&self, a: (u16, u16), b: (u16, u16)) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        match Direction::between(a, b) {
            Some(direction) => !self.has_wall(a, direction),
            None => false,
        }
    }

    /// Number of open passages between adjacent cells, each counted once.
    pub fn open_passages(&self) -> usize {
        // Only look right and down so every shared wall is visited once
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| {
                        dir.step(cell.coord())
                            .is_some_and(|next| self.is_in_bounds(next))
                            && !cell.has_wall(dir)
                    })
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        if !self.is_in_bounds(index) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} maze",
                index, self.cols, self.rows
            );
        }
        &self.cells[self.ravel_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every pair of adjacent cells agrees on the wall they share.
    fn assert_walls_symmetric(maze: &Maze) {
        for cell in maze.cells() {
            for (dir, next) in maze.neighbors_of(cell.coord()) {
                assert_eq!(
                    cell.has_wall(dir),
                    maze[next].has_wall(dir.opposite()),
                    "Wall between {:?} and {:?} is inconsistent",
                    cell.coord(),
                    next
                );
            }
        }
    }

    #[test]
    fn test_maze_indexing() {
        let maze = Maze::new(5, 4);
        assert_eq!(maze.len(), 20);
        assert_eq!(maze[(2, 3)].coord(), (2, 3));
        assert_eq!(maze[(4, 0)].coord(), (4, 0));
        assert!(maze.cells().all(|c| !c.is_visited() && c.walls() == Walls::ALL));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_width_panics() {
        Maze::new(0, 3);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_height_panics() {
        Maze::new(3, 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
        assert_eq!(maze.exit(), (4, 4));
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let maze = Maze::new(3, 3);
        let center = maze.neighbors_of((1, 1)).collect::<Vec<_>>();
        assert_eq!(
            center,
            vec![
                (Direction::Up, (1, 0)),
                (Direction::Right, (2, 1)),
                (Direction::Down, (1, 2)),
                (Direction::Left, (0, 1)),
            ]
        );
        let corner = maze.neighbors_of((0, 0)).map(|(_, c)| c).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
        let far_corner = maze.neighbors_of((2, 2)).map(|(_, c)| c).collect::<Vec<_>>();
        assert_eq!(far_corner, vec![(2, 1), (1, 2)]);
        assert_eq!(maze.neighbors_of((3, 3)).count(), 0);
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let maze = Maze::new(1, 1);
        assert_eq!(maze.neighbors_of((0, 0)).count(), 0);
        assert_eq!(maze.exit(), (0, 0));
    }

    #[test]
    fn test_remove_wall() {
        let mut maze = Maze::new(5, 5);
        maze.remove_wall_between((1, 1), (2, 1));
        assert!(!maze.has_wall((1, 1), Direction::Right));
        assert!(!maze.has_wall((2, 1), Direction::Left));
        assert!(maze.is_open_between((2, 1), (1, 1)));
        // Removing the same wall again keeps it removed
        maze.remove_wall_between((2, 1), (1, 1));
        assert!(maze.is_open_between((1, 1), (2, 1)));
        assert_eq!(maze.open_passages(), 1);

        maze.remove_wall_between((3, 3), (3, 2));
        assert!(!maze.has_wall((3, 3), Direction::Up));
        assert!(!maze.has_wall((3, 2), Direction::Down));
        assert_eq!(maze.open_passages(), 2);
        assert_walls_symmetric(&maze);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_remove_wall_between_distant_cells_panics() {
        let mut maze = Maze::new(5, 5);
        maze.remove_wall_between((0, 0), (2, 0));
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_remove_wall_diagonal_panics() {
        let mut maze = Maze::new(5, 5);
        maze.remove_wall_between((0, 0), (1, 1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_wall_out_of_bounds_panics() {
        let mut maze = Maze::new(2, 2);
        maze.remove_wall_between((1, 1), (2, 1));
    }

    #[test]
    fn test_outer_walls_are_never_open() {
        let maze = Maze::new(2, 2);
        assert!(!maze.is_open_between((0, 0), (1, 1)));
        assert!(!maze.is_open_between((1, 1), (2, 1)));
        assert_eq!(maze.open_passages(), 0);
    }
}
