use std::collections::HashSet;

use super::{
    Maze,
    cell::{Cell, ConnectionId},
    grid::{Grid, Point},
};

/// A carved passage between two neighboring cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub first: Cell,
    pub second: Cell,
    pub id: ConnectionId,
}

/// A straight segment in grid space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub first: Point,
    pub second: Point,
}

impl Link {
    /// Drawable passage from the first cell's center to the second's.
    /// A passage over the torus seam is drawn leaving the grid, so its far end
    /// sits one step past the edge (at `-1`, `width` or `depth`).
    pub fn segment(&self, grid: &Grid) -> Segment {
        let (x, y) = grid
            .relation(self.first.id, self.second.id)
            .map(|n| {
                (
                    self.second.x as f64 + n.wrap_x as f64 * grid.width() as f64,
                    self.second.y as f64 + n.wrap_y as f64 * grid.depth() as f64,
                )
            })
            .unwrap_or((self.second.x as f64, self.second.y as f64));
        Segment {
            first: Point {
                x: self.first.x as f64,
                y: self.first.y as f64,
            },
            second: Point { x, y },
        }
    }
}

impl Maze {
    /// Pairs every cell with each id yielded by `pick`, keeping only the first
    /// occurrence of every unordered pair.
    fn unique_pairs<I: Iterator<Item = usize>>(&self, pick: impl Fn(usize) -> I) -> Vec<Link> {
        let cells = self.cells();
        let mut seen = HashSet::new();
        cells
            .iter()
            .flat_map(|first| pick(first.id).map(move |second| (first, &cells[second])))
            .filter_map(|(first, second)| {
                let id = Maze::connection_id(first, second);
                seen.insert(id).then_some(Link {
                    first: *first,
                    second: *second,
                    id,
                })
            })
            .collect()
    }

    /// Every passage exactly once.
    pub fn links(&self) -> Vec<Link> {
        self.unique_pairs(|id| self.links_of(id).iter())
    }

    /// Every wall exactly once, as a unit segment on the boundary between the two cells.
    ///
    /// # Panics
    /// If a wall pair shares neither row nor column, which means the neighbor
    /// table is corrupted.
    pub fn walls(&self) -> Vec<Segment> {
        self.unique_pairs(|id| self.anti_links(id))
            .into_iter()
            .map(|Link { first, second, .. }| wall_segment(&first, &second))
            .collect()
    }
}

fn wall_segment(first: &Cell, second: &Cell) -> Segment {
    let (fx, fy) = (first.x as f64, first.y as f64);
    let (sx, sy) = (second.x as f64, second.y as f64);
    if first.x == second.x {
        // Same column, so the wall is horizontal
        let y = if sy - fy > 1.0 { sy + 0.5 } else { fy + 0.5 };
        Segment {
            first: Point { x: fx - 0.5, y },
            second: Point { x: fx + 0.5, y },
        }
    } else if first.y == second.y {
        // Same row, so the wall is vertical
        let x = if sx - fx > 1.0 { sx + 0.5 } else { fx + 0.5 };
        Segment {
            first: Point { x, y: fy - 0.5 },
            second: Point { x, y: fy + 0.5 },
        }
    } else {
        unreachable!(
            "Wall between cells {} and {} that are not grid neighbors",
            first.id, second.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Topology;

    fn segment(a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment {
            first: Point { x: a.0, y: a.1 },
            second: Point { x: b.0, y: b.1 },
        }
    }

    #[test]
    fn test_links_are_deduplicated() {
        let mut maze = Maze::new(3, 3, Topology::Flat);
        maze.connect(0, 1);
        maze.connect(1, 4);
        let ids = maze.links().iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![ConnectionId::new(0, 1), ConnectionId::new(1, 4)]);
    }

    #[test]
    fn test_flat_walls_between_cells() {
        let mut maze = Maze::new(2, 1, Topology::Flat);
        assert_eq!(maze.walls(), vec![segment((0.5, -0.5), (0.5, 0.5))]);
        maze.connect(0, 1);
        assert!(maze.walls().is_empty());
    }

    #[test]
    fn test_torus_seam_walls() {
        // 3x1 torus: walls 0|1, 0|2 (across the seam) and 1|2
        let maze = Maze::new(3, 1, Topology::Torus);
        let walls = maze.walls();
        assert_eq!(walls.len(), 3);
        assert!(walls.contains(&segment((0.5, -0.5), (0.5, 0.5))));
        assert!(walls.contains(&segment((2.5, -0.5), (2.5, 0.5))));
        assert!(walls.contains(&segment((1.5, -0.5), (1.5, 0.5))));

        let maze = Maze::new(1, 3, Topology::Torus);
        assert!(maze.walls().contains(&segment((-0.5, 2.5), (0.5, 2.5))));
    }

    #[test]
    fn test_wrapped_link_segment_leaves_the_grid() {
        let mut maze = Maze::new(3, 3, Topology::Torus);
        maze.connect(0, 2);
        let link = maze.links()[0];
        assert_eq!(link.segment(maze.grid()), segment((0.0, 0.0), (-1.0, 0.0)));

        maze.connect(1, 4);
        let link = maze.links()[1];
        assert_eq!(link.segment(maze.grid()), segment((1.0, 0.0), (1.0, 1.0)));
    }
}
