use std::collections::VecDeque;

use super::{Path, backtrack_path};
use crate::maze::Maze;

/// Breadth-first search over the passages. Returns a shortest path.
pub(crate) fn solve_bfs(maze: &Maze, start: usize, goal: usize) -> Option<Path> {
    if start == goal {
        return Some(vec![goal]);
    }

    let mut visited = vec![false; maze.len()];
    let mut parents = vec![None; maze.len()];
    visited[start] = true;

    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for link in maze.links_of(cell).iter() {
            if visited[link] {
                continue;
            }
            visited[link] = true;
            parents[link] = Some(cell);
            if link == goal {
                return Some(backtrack_path(&parents, start, goal));
            }
            queue.push_back(link);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Topology;

    #[test]
    fn test_prefers_shorter_route() {
        // A snake through every cell, plus a shortcut between 4 and 7
        let mut maze = Maze::new(3, 3, Topology::Flat);
        [(0, 1), (1, 2), (2, 5), (5, 4), (4, 3), (3, 6), (6, 7), (7, 8), (4, 7)]
            .into_iter()
            .for_each(|(a, b)| {
                maze.connect(a, b);
            });
        assert_eq!(solve_bfs(&maze, 0, 8), Some(vec![1, 2, 5, 4, 7, 8]));
    }
}
