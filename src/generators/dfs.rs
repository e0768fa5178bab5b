use crate::{generators::RandomSource, maze::Maze};

/// Randomized depth-first carving from the top left cell.
///
/// The stack holds cell indices of the current path from the origin. The top of the
/// stack is only popped once it has no unvisited neighbors left, so every cell is
/// pushed exactly once and the loop ends after at most `2 * cols * rows` iterations.
///
/// Calling this on a maze that was already carved does nothing, as every cell is visited.
pub fn randomized_dfs<S: RandomSource>(maze: &mut Maze, random_source: &mut S) {
    let origin = maze.ravel_index((0, 0));
    if maze.cell_at_index(origin).is_visited() {
        return;
    }
    maze.mark_visited(origin);

    let mut stack = Vec::with_capacity(maze.len());
    stack.push(origin);
    // Scratch buffer reused for every cell's candidates
    let mut unvisited = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        let current_coord = maze.cell_at_index(current).coord();
        unvisited.clear();
        unvisited.extend(
            maze.neighbors_of(current_coord)
                .map(|(_, coord)| coord)
                .filter(|&coord| !maze[coord].is_visited()),
        );

        if unvisited.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let next = unvisited[random_source.pick(unvisited.len())];
        let next_index = maze.ravel_index(next);
        maze.mark_visited(next_index);
        stack.push(next_index);
        maze.remove_wall_between(current_coord, next);
    }
}
