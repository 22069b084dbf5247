pub mod cell;
mod extract;
mod grid;

pub use cell::{Cell, ConnectionId, Links, Neighbor};
pub use extract::{Link, Segment};
pub use grid::{Grid, Point, Topology};

use crate::error::MazeError;

/// A grid plus the set of carved passages between neighboring cells.
pub struct Maze {
    grid: Grid,
    links: Box<[Links]>,
}

impl Maze {
    /// Creates a maze with every wall standing. A zero dimension gives an empty maze.
    pub fn new(width: u16, depth: u16, topology: Topology) -> Self {
        let grid = Grid::new(width, depth, topology);
        let links = vec![Links::default(); grid.len()].into_boxed_slice();
        Maze { grid, links }
    }

    /// Like [`Maze::new`], but rejects zero dimensions.
    pub fn try_new(width: u16, depth: u16, topology: Topology) -> Result<Self, MazeError> {
        if width == 0 || depth == 0 {
            return Err(MazeError::InvalidDimensions { width, depth });
        }
        Ok(Maze::new(width, depth, topology))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn depth(&self) -> u16 {
        self.grid.depth()
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn cell(&self, id: usize) -> Result<&Cell, MazeError> {
        self.grid.cells().get(id).ok_or(MazeError::CellOutOfRange {
            id,
            len: self.len(),
        })
    }

    /// Layer of the cell `id`.
    ///
    /// # Panics
    /// If `id` is out of range.
    pub fn layer(&self, id: usize) -> i32 {
        self.grid.cells()[id].z
    }

    pub(crate) fn set_layer(&mut self, id: usize, z: i32) {
        self.grid.cells_mut()[id].z = z;
    }

    /// Cells linked to `id`, in the order the links were made.
    ///
    /// # Panics
    /// If `id` is out of range.
    pub fn links_of(&self, id: usize) -> &Links {
        &self.links[id]
    }

    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.links.get(a).is_some_and(|l| l.contains(b))
    }

    /// Number of undirected passages.
    pub fn link_count(&self) -> usize {
        self.links.iter().map(Links::len).sum::<usize>() / 2
    }

    /// Links `a` and `b` in both directions. Returns `true` if the passage is new.
    ///
    /// # Panics
    /// If `a` and `b` are not grid neighbors.
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        if !self.grid.is_adjacent(a, b) {
            panic!("Cannot connect cells {a} and {b}: they are not grid neighbors");
        }
        let added = self.links[a].insert(b);
        self.links[b].insert(a);
        added
    }

    /// Removes the passage between `a` and `b`, if any. Returns `true` if one was removed.
    pub fn disconnect(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }
        let removed = self.links[a].remove(b);
        self.links[b].remove(a);
        removed
    }

    pub fn connection_id(a: &Cell, b: &Cell) -> ConnectionId {
        ConnectionId::new(a.id, b.id)
    }

    /// Grid neighbors of `id` that are not linked to it: the cell's walls.
    pub fn anti_links(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.grid
            .neighbors(id)
            .iter()
            .map(|n| n.id)
            .filter(move |&n| !self.links[id].contains(n))
    }

    /// Drops every passage and resets every layer to 0.
    pub fn clear_links(&mut self) {
        self.links.iter_mut().for_each(Links::clear);
        self.grid.cells_mut().iter_mut().for_each(|c| c.z = 0);
    }
}
