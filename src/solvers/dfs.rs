use super::{Path, backtrack_path};
use crate::maze::Maze;

/// Depth-first search over the passages, trying links in the order they were made.
/// Returns the first path found, which is not necessarily the shortest once the maze has loops.
pub(crate) fn solve_dfs(maze: &Maze, start: usize, goal: usize) -> Option<Path> {
    if start == goal {
        return Some(vec![goal]);
    }

    let mut visited = vec![false; maze.len()];
    let mut parents = vec![None; maze.len()];
    visited[start] = true;

    // Each entry is a cell on the current branch and the index of its next link to try
    let mut stack = vec![(start, 0)];
    while let Some((cell, next)) = stack.last_mut() {
        let Some(link) = maze.links_of(*cell).as_slice().get(*next).copied() else {
            stack.pop();
            continue;
        };
        *next += 1;
        if visited[link] {
            continue;
        }
        visited[link] = true;
        parents[link] = Some(*cell);
        if link == goal {
            return Some(backtrack_path(&parents, start, goal));
        }
        stack.push((link, 0));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Topology;

    #[test]
    fn test_follows_link_order() {
        // Two routes from 0 to 3 on a 2x2 grid: 0-1-3 and 0-2-3
        let mut maze = Maze::new(2, 2, Topology::Flat);
        maze.connect(0, 2);
        maze.connect(0, 1);
        maze.connect(1, 3);
        maze.connect(2, 3);
        assert_eq!(solve_dfs(&maze, 0, 3), Some(vec![2, 3]));
    }
}
