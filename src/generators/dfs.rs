use rand::{Rng, seq::IndexedRandom};

use crate::maze::Maze;

/// Growing-tree depth-first carve from cell 0: at every step pick one random
/// unvisited neighbor of the cell on top of the stack, or backtrack if there is none.
pub fn randomized_dfs<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let mut visited = vec![false; maze.len()];

    visited[0] = true;
    maze.set_layer(0, 0);
    // The stack keeps (cell, layer) pairs of carved cells
    let mut stack = vec![(0, 0)];

    while let Some((cell, layer)) = stack.pop() {
        let neighbors = maze
            .grid()
            .neighbors(cell)
            .iter()
            .filter(|n| !visited[n.id])
            .copied()
            .collect::<Vec<_>>();

        if let Some(neighbor) = neighbors.choose(rng) {
            let next_layer = layer + neighbor.wrap_y as i32;
            maze.connect(cell, neighbor.id);
            maze.set_layer(neighbor.id, next_layer);
            visited[neighbor.id] = true;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push((cell, layer));
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push((neighbor.id, next_layer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::get_rng, maze::Topology};

    #[test]
    fn test_randomized_dfs_links_every_cell() {
        let mut maze = Maze::new(7, 7, Topology::Flat);
        randomized_dfs(&mut maze, &mut get_rng(Some(0)));
        assert_eq!(maze.link_count(), 48);
        assert!(maze.cells().iter().all(|c| !maze.links_of(c.id).is_empty()));
    }
}
