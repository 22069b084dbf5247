use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;
pub mod loops;
mod recur_backtrack;

use dfs::randomized_dfs;
use recur_backtrack::recursive_backtrack;

use crate::maze::Maze;

pub use loops::{DEFAULT_LOOP_COUNT, add_confounding_loops};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Generator {
    /// Shuffle each cell's neighbors once and carve into them in that order.
    #[default]
    RecurBacktrack,
    /// Pick one random unvisited neighbor at every step, backtracking when stuck.
    Dfs,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
        }
    }
}

/// Carves a spanning tree into `maze`, replacing any existing passages.
/// Every cell's layer is set relative to cell 0, which sits on layer 0.
pub fn generate_maze<R: Rng + ?Sized>(maze: &mut Maze, generator: Generator, rng: &mut R) {
    maze.clear_links();
    if maze.is_empty() {
        return;
    }
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(maze, rng),
        Generator::Dfs => randomized_dfs(maze, rng),
    }
    tracing::debug!(
        "[carve] {} carved {} links over {} cells",
        generator,
        maze.link_count(),
        maze.len()
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::maze::Topology;

    /// Asserts `maze` is a spanning tree: `N - 1` links, every cell reachable from cell 0.
    pub(crate) fn assert_spanning_tree(maze: &Maze) {
        assert_eq!(maze.link_count(), maze.len() - 1);
        assert_connected(maze);
    }

    /// Asserts every cell is reachable from cell 0 through the passages.
    pub(crate) fn assert_connected(maze: &Maze) {
        let mut visited = vec![false; maze.len()];
        let mut stack = vec![0];
        visited[0] = true;
        while let Some(id) = stack.pop() {
            for next in maze.links_of(id).iter() {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        assert!(visited.into_iter().all(|v| v), "every cell must be reachable");
    }

    pub(crate) fn assert_symmetric(maze: &Maze) {
        for cell in maze.cells() {
            for other in maze.links_of(cell.id).iter() {
                assert!(maze.is_linked(other, cell.id), "{} -> {} is one-sided", cell.id, other);
            }
        }
    }

    const GENERATORS: [Generator; 2] = [Generator::RecurBacktrack, Generator::Dfs];

    #[test]
    fn test_generators_carve_spanning_trees() {
        for generator in GENERATORS {
            for topology in [Topology::Flat, Topology::Torus] {
                for (width, depth) in [(1, 1), (1, 7), (2, 2), (5, 5), (12, 9)] {
                    let mut maze = Maze::new(width, depth, topology);
                    generate_maze(&mut maze, generator, &mut get_rng(Some(7)));
                    assert_spanning_tree(&maze);
                    assert_symmetric(&maze);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for generator in GENERATORS {
            let carve = || {
                let mut maze = Maze::new(16, 11, Topology::Torus);
                generate_maze(&mut maze, generator, &mut get_rng(Some(42)));
                maze
            };
            let (a, b) = (carve(), carve());
            assert_eq!(a.cells(), b.cells());
            assert_eq!(a.links(), b.links());
            assert_eq!(a.walls(), b.walls());
        }
    }

    #[test]
    fn test_layers_follow_tree_edges() {
        for generator in GENERATORS {
            let mut maze = Maze::new(6, 6, Topology::Torus);
            generate_maze(&mut maze, generator, &mut get_rng(Some(3)));
            assert_eq!(maze.layer(0), 0);
            // Along every tree edge the layers differ by the wrap sign of the step
            for link in maze.links() {
                let step = maze.grid().relation(link.first.id, link.second.id).unwrap();
                let delta = link.second.z - link.first.z;
                let back = maze.grid().relation(link.second.id, link.first.id).unwrap();
                assert!(
                    delta == step.wrap_y as i32 || -delta == back.wrap_y as i32,
                    "layer jump of {delta} across {}",
                    link.id
                );
            }
        }
    }

    #[test]
    fn test_flat_maze_stays_on_layer_zero() {
        let mut maze = Maze::new(8, 8, Topology::Flat);
        generate_maze(&mut maze, Generator::RecurBacktrack, &mut get_rng(Some(1)));
        assert!(maze.cells().iter().all(|c| c.z == 0));
    }

    #[test]
    fn test_regeneration_replaces_previous_maze() {
        let mut maze = Maze::new(7, 5, Topology::Torus);
        let mut rng = get_rng(Some(9));
        generate_maze(&mut maze, Generator::Dfs, &mut rng);
        generate_maze(&mut maze, Generator::RecurBacktrack, &mut rng);
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_large_torus_does_not_overflow_the_stack() {
        let mut maze = Maze::new(300, 300, Topology::Torus);
        generate_maze(&mut maze, Generator::RecurBacktrack, &mut get_rng(Some(5)));
        assert_eq!(maze.link_count(), 300 * 300 - 1);
    }
}
