mod bfs;
mod dfs;

use crate::{error::MazeError, maze::Maze};
use bfs::solve_bfs;
use dfs::solve_dfs;

/// Cell ids from the first step after the start up to and including the goal.
pub type Path = Vec<usize>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Solver {
    /// First path found, walking links in the order they were made.
    #[default]
    Dfs,
    /// Shortest path in number of steps.
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Searches the passages for a path from `start` to `goal`.
///
/// The start cell is not part of the returned path, except when it is also the
/// goal, in which case the path is just `[goal]`. `Ok(None)` means the goal is unreachable.
pub fn find_solution(
    maze: &Maze,
    solver: Solver,
    start: usize,
    goal: usize,
) -> Result<Option<Path>, MazeError> {
    maze.cell(start)?;
    maze.cell(goal)?;
    let path = match solver {
        Solver::Dfs => solve_dfs(maze, start, goal),
        Solver::Bfs => solve_bfs(maze, start, goal),
    };
    match &path {
        Some(path) => tracing::debug!("[solve] {} found a path of {} steps", solver, path.len()),
        None => tracing::debug!("[solve] {} found no path from {} to {}", solver, start, goal),
    }
    Ok(path)
}

/// Solves from the first cell to the last one. An empty maze has no solution.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Option<Path> {
    if maze.is_empty() {
        return None;
    }
    find_solution(maze, solver, 0, maze.len() - 1).ok().flatten()
}

/// Rebuilds the path ending at `goal` from a parent table, leaving out `start`.
fn backtrack_path(parents: &[Option<usize>], start: usize, goal: usize) -> Path {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents[current] {
        if parent == start {
            break;
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
