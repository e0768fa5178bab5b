use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;

pub use dfs::randomized_dfs;

use crate::maze::Maze;

/// Source of the random choices made while carving.
///
/// Every [`rand::Rng`] is a random source, so a seeded [`StdRng`] reproduces the same maze.
/// Tests can script the choices instead.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never 0.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carve a perfect maze into a freshly created `maze`.
pub fn generate_maze<S: RandomSource>(maze: &mut Maze, random_source: &mut S) {
    let start = std::time::Instant::now();
    randomized_dfs(maze, random_source);
    tracing::debug!(
        "[generator] Carved {}x{} maze in {:?}",
        maze.cols(),
        maze.rows(),
        start.elapsed()
    );
}
