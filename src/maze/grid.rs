use super::cell::{Cell, MAX_NEIGHBORS, Neighbor};

/// How the grid's edges behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Topology {
    /// Edges are hard boundaries.
    Flat,
    /// Leaving one edge re-enters the opposite one on both axes.
    #[default]
    Torus,
}

impl Topology {
    pub fn wraps(&self) -> bool {
        matches!(self, Topology::Torus)
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Flat => write!(f, "Flat"),
            Topology::Torus => write!(f, "Torus"),
        }
    }
}

/// A point in grid space. Cell centers sit on integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct NeighborList {
    items: [Neighbor; MAX_NEIGHBORS],
    len: u8,
}

impl NeighborList {
    fn push(&mut self, neighbor: Neighbor) {
        self.items[self.len as usize] = neighbor;
        self.len += 1;
    }

    fn as_slice(&self) -> &[Neighbor] {
        &self.items[..self.len as usize]
    }
}

/// Fixed `width × depth` arrangement of cells with an eagerly computed neighbor table.
pub struct Grid {
    cells: Box<[Cell]>,
    neighbors: Box<[NeighborList]>,
    width: u16,
    depth: u16,
    topology: Topology,
}

impl Grid {
    /// Creates the cells in row-major order and computes each cell's neighbors,
    /// in `+x, -x, +y, -y` order. A zero dimension gives an empty grid.
    ///
    /// On narrow tori several steps land on the same cell; a cell never lists
    /// itself and never lists the same neighbor twice.
    pub fn new(width: u16, depth: u16, topology: Topology) -> Self {
        let cells = (0..depth)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .enumerate()
            .map(|(id, (x, y))| Cell::new(id, x, y))
            .collect::<Box<[_]>>();

        let mut grid = Grid {
            neighbors: vec![NeighborList::default(); cells.len()].into_boxed_slice(),
            cells,
            width,
            depth,
            topology,
        };

        for id in 0..grid.cells.len() {
            let cell = grid.cells[id];
            let (x, y) = (cell.x as i32, cell.y as i32);
            let mut list = NeighborList::default();
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .into_iter()
                .filter_map(|(nx, ny)| grid.get_index(nx, ny, topology.wraps()))
                .for_each(|nid| {
                    if nid == id || list.as_slice().iter().any(|n| n.id == nid) {
                        return;
                    }
                    let other = grid.cells[nid];
                    list.push(Neighbor {
                        id: nid,
                        wrap_x: wrap_sign(cell.x, other.x),
                        wrap_y: wrap_sign(cell.y, other.y),
                    });
                });
            grid.neighbors[id] = list;
        }
        grid
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Row-major index of `(x, y)`, or `None` if it falls outside the grid.
    /// With `wrap`, coordinates are first reduced modulo the grid dimensions.
    pub fn get_index(&self, x: i32, y: i32, wrap: bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let (width, depth) = (self.width as i32, self.depth as i32);
        let (x, y) = if wrap {
            (x.rem_euclid(width), y.rem_euclid(depth))
        } else {
            (x, y)
        };
        if !(0..width).contains(&x) || !(0..depth).contains(&y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32, wrap: bool) -> Option<&Cell> {
        self.get_index(x, y, wrap).map(|i| &self.cells[i])
    }

    /// Neighbor relations of the cell `id`.
    ///
    /// # Panics
    /// If `id` is out of range.
    pub fn neighbors(&self, id: usize) -> &[Neighbor] {
        self.neighbors[id].as_slice()
    }

    /// The relation of `b` as seen from `a`, if they are grid neighbors.
    pub fn relation(&self, a: usize, b: usize) -> Option<&Neighbor> {
        self.neighbors.get(a)?.as_slice().iter().find(|n| n.id == b)
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.relation(a, b).is_some()
    }

    /// Maps grid coordinates into the unit square, for layout by external consumers.
    pub fn to_normalized(&self, x: f64, y: f64) -> Point {
        Point {
            x: x / self.width as f64,
            y: y / self.depth as f64,
        }
    }
}

/// Wrap sign of a step from `from` to `to` along one axis.
fn wrap_sign(from: u16, to: u16) -> i8 {
    if from.abs_diff(to) > 1 {
        if to > from { -1 } else { 1 }
    } else {
        0
    }
}
