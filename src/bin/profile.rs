use mazerun::{
    generators::{generate_maze, get_rng},
    maze::Maze,
};

/// Side length of the profiled maze
const SIZE: u16 = 1000;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let mut rng = get_rng(Some(0));
    let start = std::time::Instant::now();
    for i in 0..num_iters {
        let mut maze = Maze::new(SIZE, SIZE);
        generate_maze(&mut maze, &mut rng);
        tracing::info!(
            "[profile] Iteration {}: {} open passages",
            i,
            maze.open_passages()
        );
    }
    tracing::info!(
        "[profile] {} mazes of {}x{} in {:?}",
        num_iters,
        SIZE,
        SIZE,
        start.elapsed()
    );
}
