use crate::{
    error::MazeError,
    generators::{Generator, add_confounding_loops, generate_maze, get_rng},
    maze::{Maze, Topology},
};

/// Parameters of one maze generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: u16,
    pub depth: u16,
    pub topology: Topology,
    pub generator: Generator,
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Confounding loops to add after carving.
    pub loop_count: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 16,
            depth: 16,
            topology: Topology::Torus,
            generator: Generator::RecurBacktrack,
            seed: None,
            loop_count: 0,
        }
    }
}

impl MazeConfig {
    pub fn with_size(mut self, width: u16, depth: u16) -> Self {
        self.width = width;
        self.depth = depth;
        self
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_loops(mut self, loop_count: usize) -> Self {
        self.loop_count = loop_count;
        self
    }

    /// Carves a fresh maze and adds the requested loops, drawing all randomness
    /// from a single generator.
    pub fn build(&self) -> Result<Maze, MazeError> {
        let mut maze = Maze::try_new(self.width, self.depth, self.topology)?;
        let mut rng = get_rng(self.seed);

        tracing::info!(
            "[config] generating {}x{} {} maze with {}",
            self.width,
            self.depth,
            self.topology,
            self.generator
        );
        generate_maze(&mut maze, self.generator, &mut rng);
        if self.loop_count > 0 {
            let added = add_confounding_loops(&mut maze, self.loop_count, &mut rng);
            if added < self.loop_count {
                tracing::warn!(
                    "[config] only {} of {} confounding loops could be placed",
                    added,
                    self.loop_count
                );
            }
        }
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_zero_dimensions() {
        let config = MazeConfig::default().with_size(5, 0);
        assert_eq!(
            config.build().err(),
            Some(MazeError::InvalidDimensions { width: 5, depth: 0 })
        );
    }

    #[test]
    fn test_build_is_reproducible() {
        let config = MazeConfig::default()
            .with_size(14, 9)
            .with_seed(123)
            .with_loops(3);
        let (a, b) = (config.build().unwrap(), config.build().unwrap());
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.links(), b.links());
        assert_eq!(a.walls(), b.walls());
    }

    #[test]
    fn test_wall_link_partition() {
        let maze = MazeConfig::default()
            .with_size(11, 7)
            .with_seed(6)
            .with_loops(4)
            .build()
            .unwrap();
        for cell in maze.cells() {
            for neighbor in maze.grid().neighbors(cell.id) {
                let linked = maze.is_linked(cell.id, neighbor.id);
                let walled = maze.anti_links(cell.id).any(|id| id == neighbor.id);
                assert!(linked != walled);
            }
        }
        let pairs = maze
            .cells()
            .iter()
            .map(|c| maze.grid().neighbors(c.id).len())
            .sum::<usize>()
            / 2;
        assert_eq!(maze.links().len() + maze.walls().len(), pairs);
    }
}
