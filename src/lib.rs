pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::{Maze, Topology};
