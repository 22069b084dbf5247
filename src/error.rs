/// Errors surfaced by maze construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{depth}: both must be at least 1")]
    InvalidDimensions { width: u16, depth: u16 },
    #[error("cell {id} is out of range for a maze of {len} cells")]
    CellOutOfRange { id: usize, len: usize },
}
