use std::time::Instant;

use toromaze::{
    MazeConfig,
    generators::Generator,
    solvers::{Solver, solve_maze},
};

fn main() -> Result<(), toromaze::MazeError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let config = MazeConfig::default()
        .with_size(u8::MAX as u16, u8::MAX as u16)
        .with_generator(Generator::RecurBacktrack)
        .with_loops(16);

    for i in 0..num_iters {
        let started = Instant::now();
        let maze = config.clone().with_seed(i as u64).build()?;
        let generated = started.elapsed();
        let path = solve_maze(&maze, Solver::Dfs);
        println!(
            "iteration {i}: generated {} cells in {:?}, solved in {:?} ({} steps)",
            maze.len(),
            generated,
            started.elapsed() - generated,
            path.map_or(0, |p| p.len())
        );
    }
    Ok(())
}
