use crossterm::style::{Color, Stylize};

use std::fmt;

use crate::{
    game::GameState,
    maze::{Direction, Maze},
};

/// One raster unit of the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    /// Highlighted exit cell
    Exit,
    /// The player marker
    Player,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Floor => "  ".with(Color::Reset),
            Tile::Exit => "🟩".with(Color::Green),
            Tile::Player => "🟦".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Raster image of a maze.
///
/// A maze of `cols` x `rows` cells becomes `2 * cols + 1` x `2 * rows + 1` tiles:
/// cell `(x, y)` sits at tile `(2x + 1, 2y + 1)`, the wall between two cells is the tile
/// between them, and the tiles at even/even positions are always wall corners.
pub struct Canvas {
    data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl Canvas {
    /// Number of tiles needed along one axis for `cells` maze cells.
    pub fn tiles_for(cells: u16) -> u32 {
        cells as u32 * 2 + 1
    }

    /// Draw the maze walls, the exit highlight and the player marker.
    pub fn draw(state: &GameState) -> Self {
        let maze = state.maze();
        let (width, height) = (Canvas::tiles_for(maze.cols()), Canvas::tiles_for(maze.rows()));
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            panic!(
                "A {}x{} maze does not fit on a terminal canvas",
                maze.cols(),
                maze.rows()
            );
        }
        let (width, height) = (width as u16, height as u16);
        let mut canvas = Canvas {
            data: vec![Tile::Wall; width as usize * height as usize].into_boxed_slice(),
            width,
            height,
        };
        for cell in maze.cells() {
            let coord = cell.coord();
            canvas.set(Canvas::cell_tile(coord), Canvas::floor_tile(maze, coord));
            // Every wall is shared, so drawing the right and bottom sides covers all inner walls
            for dir in [Direction::Right, Direction::Down] {
                if !cell.has_wall(dir) {
                    canvas.set(Canvas::wall_tile(coord, dir), Tile::Floor);
                }
            }
        }
        canvas.set(
            Canvas::cell_tile(state.player().position()),
            Tile::Player,
        );
        canvas
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Tile of the cell at `coord`.
    pub fn cell_tile(coord: (u16, u16)) -> (u16, u16) {
        (coord.0 * 2 + 1, coord.1 * 2 + 1)
    }

    /// Tile of the wall on the `direction` side of the cell at `coord`.
    pub fn wall_tile(coord: (u16, u16), direction: Direction) -> (u16, u16) {
        let (x, y) = Canvas::cell_tile(coord);
        let (dx, dy) = direction.delta();
        // A cell tile is never on the canvas border, so its wall tiles stay in range
        ((x as i32 + dx) as u16, (y as i32 + dy) as u16)
    }

    /// What an empty cell looks like: the exit is highlighted, everything else is floor.
    pub fn floor_tile(maze: &Maze, coord: (u16, u16)) -> Tile {
        if coord == maze.exit() {
            Tile::Exit
        } else {
            Tile::Floor
        }
    }

    fn ravel_index(&self, coord: (u16, u16)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    fn set(&mut self, coord: (u16, u16), tile: Tile) {
        let idx = self.ravel_index(coord);
        self.data[idx] = tile;
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.data.chunks(self.width as usize)
    }
}

impl std::ops::Index<(u16, u16)> for Canvas {
    type Output = Tile;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_canvas_size() {
        let state = GameState::new(4, 3, &mut get_rng(Some(0)));
        let canvas = Canvas::draw(&state);
        assert_eq!((canvas.width(), canvas.height()), (9, 7));
        assert_eq!(canvas.rows().count(), 7);
        assert!(canvas.rows().all(|row| row.len() == 9));
    }

    #[test]
    fn test_canvas_matches_walls() {
        let state = GameState::new(7, 5, &mut get_rng(Some(4)));
        let canvas = Canvas::draw(&state);
        let maze = state.maze();
        for cell in maze.cells() {
            for dir in Direction::ALL {
                let tile = canvas[Canvas::wall_tile(cell.coord(), dir)];
                assert_eq!(tile == Tile::Wall, cell.has_wall(dir));
            }
        }
        // Corners are always walls
        for y in (0..canvas.height()).step_by(2) {
            for x in (0..canvas.width()).step_by(2) {
                assert_eq!(canvas[(x, y)], Tile::Wall);
            }
        }
    }

    #[test]
    fn test_wall_tiles_around_cell() {
        assert_eq!(Canvas::cell_tile((0, 0)), (1, 1));
        assert_eq!(Canvas::wall_tile((0, 0), Direction::Up), (1, 0));
        assert_eq!(Canvas::wall_tile((0, 0), Direction::Left), (0, 1));
        assert_eq!(Canvas::wall_tile((0, 0), Direction::Right), (2, 1));
        assert_eq!(Canvas::wall_tile((0, 0), Direction::Down), (1, 2));
        // Neighbors share the tile of the wall between them
        for dir in Direction::ALL {
            let next = dir.step((3, 3)).unwrap();
            assert_eq!(
                Canvas::wall_tile((3, 3), dir),
                Canvas::wall_tile(next, dir.opposite())
            );
        }
    }

    #[test]
    fn test_player_and_exit_markers() {
        let state = GameState::new(3, 3, &mut get_rng(Some(8)));
        let canvas = Canvas::draw(&state);
        assert_eq!(canvas[(1, 1)], Tile::Player);
        assert_eq!(canvas[(5, 5)], Tile::Exit);
        assert_eq!(canvas.rows().flatten().filter(|&&t| t == Tile::Player).count(), 1);
    }

    #[test]
    fn test_player_covers_exit_in_single_cell_maze() {
        let state = GameState::new(1, 1, &mut get_rng(Some(0)));
        let canvas = Canvas::draw(&state);
        assert_eq!(canvas[(1, 1)], Tile::Player);
        assert!(!canvas.rows().flatten().any(|&t| t == Tile::Exit));
    }

    #[test]
    fn test_tile_symbols_are_two_columns_wide() {
        use unicode_width::UnicodeWidthStr;
        for tile in [Tile::Wall, Tile::Floor, Tile::Exit, Tile::Player] {
            let symbol = match tile {
                Tile::Wall => "⬜",
                Tile::Floor => "  ",
                Tile::Exit => "🟩",
                Tile::Player => "🟦",
            };
            assert_eq!(symbol.width(), Tile::WIDTH as usize);
            assert!(tile.to_string().contains(symbol));
        }
    }
}
