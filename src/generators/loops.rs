use std::collections::HashSet;

use rand::{Rng, seq::IndexedRandom};

use crate::maze::{ConnectionId, Maze};

/// Number of loops added when the caller does not ask for a specific count.
pub const DEFAULT_LOOP_COUNT: usize = 3;

/// Dead ends paired with a grid neighbor on a different layer that they are not linked to yet.
fn loop_candidates(maze: &Maze) -> Vec<(usize, usize)> {
    let mut seen = HashSet::new();
    maze.cells()
        .iter()
        .filter(|cell| maze.links_of(cell.id).len() == 1)
        .flat_map(|cell| {
            maze.grid()
                .neighbors(cell.id)
                .iter()
                .filter(move |n| maze.layer(n.id) != cell.z && !maze.is_linked(cell.id, n.id))
                .map(move |n| (cell.id, n.id))
        })
        .filter(|&(a, b)| seen.insert(ConnectionId::new(a, b)))
        .collect()
}

/// Links up to `count` randomly chosen dead ends to a neighbor on another layer,
/// reintroducing cycles into a perfect maze. Layers are left untouched.
///
/// Returns the number of passages added, which is `count` unless there are fewer candidates.
pub fn add_confounding_loops<R: Rng + ?Sized>(
    maze: &mut Maze,
    count: usize,
    rng: &mut R,
) -> usize {
    let candidates = loop_candidates(maze);
    let mut added = 0;
    for &(dead_end, neighbor) in candidates.choose_multiple(rng, count) {
        if maze.connect(dead_end, neighbor) {
            added += 1;
        }
    }
    tracing::debug!(
        "[loops] added {} of {} requested loops from {} candidates",
        added,
        count,
        candidates.len()
    );
    added
}
