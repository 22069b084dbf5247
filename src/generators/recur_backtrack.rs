use rand::{Rng, seq::SliceRandom};

use crate::maze::{Maze, Neighbor};

/// One cell being carved: its layer, its neighbors in shuffled order, and how
/// many of them have been tried so far.
struct Frame {
    cell: usize,
    layer: i32,
    neighbors: Vec<Neighbor>,
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(maze: &Maze, cell: usize, layer: i32, rng: &mut R) -> Self {
        let mut neighbors = maze.grid().neighbors(cell).to_vec();
        neighbors.shuffle(rng);
        Frame {
            cell,
            layer,
            neighbors,
            next: 0,
        }
    }
}

/// Depth-first carve from cell 0. Each cell shuffles its neighbors once when it is
/// entered and walks them in that order, carving into each neighbor still unvisited
/// at the time it comes up.
pub fn recursive_backtrack<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let mut visited = vec![false; maze.len()];

    visited[0] = true;
    maze.set_layer(0, 0);
    let mut stack = vec![Frame::enter(maze, 0, 0, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&neighbor) = frame.neighbors.get(frame.next) else {
            // All neighbors tried, backtrack
            stack.pop();
            continue;
        };
        frame.next += 1;
        if visited[neighbor.id] {
            continue;
        }

        let (cell, layer) = (frame.cell, frame.layer + neighbor.wrap_y as i32);
        maze.connect(cell, neighbor.id);
        maze.set_layer(neighbor.id, layer);
        visited[neighbor.id] = true;
        stack.push(Frame::enter(maze, neighbor.id, layer, rng));
    }
}
