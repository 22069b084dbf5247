use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{Color, Print, Stylize},
};

use crate::maze::Maze;

/// One character cell of the text view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: usize = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Route => "* ".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Text view of a maze: `n` cells along an axis take `2n + 1` tiles, with the
/// odd positions holding cells and the even ones holding walls or passages.
pub struct Canvas {
    tiles: Box<[Tile]>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Draws `maze`, marking `route` (as returned by the solvers) from the first
    /// cell to the last. Passages across the torus seam open both borders.
    pub fn new(maze: &Maze, route: Option<&[usize]>) -> Self {
        let width = maze.width() as usize * 2 + 1;
        let height = maze.depth() as usize * 2 + 1;
        let mut canvas = Canvas {
            tiles: vec![Tile::Wall; width * height].into_boxed_slice(),
            width,
            height,
        };

        for cell in maze.cells() {
            canvas.set_cell(maze, cell.id, Tile::Open);
            for other in maze.links_of(cell.id).iter() {
                canvas.set_passage(maze, cell.id, other, Tile::Open);
            }
        }

        if let Some(route) = route.filter(|_| !maze.is_empty()) {
            let start = 0;
            let mut previous = start;
            for &id in route {
                canvas.set_passage(maze, previous, id, Tile::Route);
                canvas.set_passage(maze, id, previous, Tile::Route);
                canvas.set_cell(maze, id, Tile::Route);
                previous = id;
            }
            canvas.set_cell(maze, start, Tile::Start);
            canvas.set_cell(maze, maze.len() - 1, Tile::Goal);
        }
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[y * self.width + x]
    }

    fn set(&mut self, x: i64, y: i64, tile: Tile) {
        if (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y) {
            self.tiles[y as usize * self.width + x as usize] = tile;
        }
    }

    fn set_cell(&mut self, maze: &Maze, id: usize, tile: Tile) {
        let cell = maze.cells()[id];
        self.set(cell.x as i64 * 2 + 1, cell.y as i64 * 2 + 1, tile);
    }

    /// Sets the tile on `from`'s side of the passage towards `to`.
    fn set_passage(&mut self, maze: &Maze, from: usize, to: usize, tile: Tile) {
        let Some(step) = maze.grid().relation(from, to) else {
            return;
        };
        let (a, b) = (maze.cells()[from], maze.cells()[to]);
        let dx = b.x as i64 + step.wrap_x as i64 * maze.width() as i64 - a.x as i64;
        let dy = b.y as i64 + step.wrap_y as i64 * maze.depth() as i64 - a.y as i64;
        self.set(a.x as i64 * 2 + 1 + dx, a.y as i64 * 2 + 1 + dy, tile);
    }

    /// Queues the canvas to `out`, one row per line.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        for row in self.tiles.chunks(self.width) {
            for tile in row {
                queue!(out, Print(tile))?;
            }
            queue!(out, Print("\r\n"))?;
        }
        out.flush()
    }
}
