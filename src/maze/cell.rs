use std::fmt;

/// Maximum number of grid neighbors a cell can have.
pub const MAX_NEIGHBORS: usize = 4;

/// A cell of the grid, addressed by its row-major `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Row-major index, `y * width + x`
    pub id: usize,
    pub x: u16,
    pub y: u16,
    /// Signed wrap-layer, set during generation. Counts how many times the carve
    /// path from the root crossed the seam on the y axis, and in which direction.
    pub z: i32,
}

impl Cell {
    pub fn new(id: usize, x: u16, y: u16) -> Self {
        Cell { id, x, y, z: 0 }
    }
}

/// A grid-neighbor of some cell, as seen from that cell.
///
/// `wrap_x` and `wrap_y` are `0` for a regular step and `±1` when the step crosses
/// the torus seam on that axis: `-1` if the neighbor's coordinate is greater than
/// the cell's (the cell stepped backwards over the seam), `1` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbor {
    pub id: usize,
    pub wrap_x: i8,
    pub wrap_y: i8,
}

impl Neighbor {
    pub fn is_wrapped(&self) -> bool {
        self.wrap_x != 0 || self.wrap_y != 0
    }
}

/// Canonical key of an unordered cell pair: the two ids sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(usize, usize);

impl ConnectionId {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            ConnectionId(a, b)
        } else {
            ConnectionId(b, a)
        }
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Fixed-capacity, insertion-ordered set of linked cell ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Links {
    ids: [usize; MAX_NEIGHBORS],
    len: u8,
}

impl Links {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.ids[..self.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.as_slice().contains(&id)
    }

    /// Adds `id` unless already present. Returns `true` if it was added.
    ///
    /// # Panics
    /// If the set is already full. Links only ever point at grid neighbors, so
    /// this means the caller bypassed the adjacency check.
    pub fn insert(&mut self, id: usize) -> bool {
        if self.contains(id) {
            return false;
        }
        assert!(
            self.len() < MAX_NEIGHBORS,
            "A cell cannot have more than {MAX_NEIGHBORS} links"
        );
        let len = self.len();
        self.ids[len] = id;
        self.len += 1;
        true
    }

    /// Removes `id`, keeping the order of the remaining links. Returns `true` if it was present.
    pub fn remove(&mut self, id: usize) -> bool {
        let Some(pos) = self.as_slice().iter().position(|&l| l == id) else {
            return false;
        };
        let len = self.len();
        self.ids.copy_within(pos + 1..len, pos);
        self.len -= 1;
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_insert_is_idempotent() {
        let mut links = Links::default();
        assert!(links.insert(3));
        assert!(!links.insert(3));
        assert_eq!(links.as_slice(), &[3]);
    }

    #[test]
    fn test_links_remove_keeps_order() {
        let mut links = Links::default();
        [5, 1, 9, 2].into_iter().for_each(|id| {
            links.insert(id);
        });
        assert!(links.remove(1));
        assert!(!links.remove(1));
        assert_eq!(links.as_slice(), &[5, 9, 2]);
        assert!(links.remove(2));
        assert_eq!(links.as_slice(), &[5, 9]);
        assert!(links.insert(7));
        assert_eq!(links.as_slice(), &[5, 9, 7]);
    }

    #[test]
    fn test_connection_id_is_unordered() {
        assert_eq!(ConnectionId::new(10, 9), ConnectionId::new(9, 10));
        assert_eq!(ConnectionId::new(10, 9).to_string(), "9 10");
    }
}
