//! Board module - manages the game grid
//!
//! The board is a `height x width` grid of tile values where `0` is empty.
//! Uses a flat row-major buffer; dimensions are fixed at construction.
//! Coordinates: (row, col) where row runs top to bottom and col left to right.
//!
//! Randomness only enters through the board's RNG, so a board built with
//! [`Board::new`] and a fixed seed replays identically.

use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::line;
use crate::snapshot::BoardSnapshot;
use crate::traversal::Traversals;
use crate::types::{
    Cell, Direction, Pos, INITIAL_TILES, SPAWN_RARE_ROLL, SPAWN_ROLL_SIDES, SPAWN_TILE,
    SPAWN_TILE_RARE,
};

/// The 2048 game board
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    height: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
    traversals: Traversals,
    rng: R,
}

impl Board<StdRng> {
    /// Create a board with a seeded RNG and two starting tiles
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::new(4, 4, 12345);
    /// assert_eq!(board.count_empty(), 14);
    /// ```
    pub fn new(height: usize, width: usize, seed: u64) -> Self {
        Self::with_rng(height, width, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Board<R> {
    /// Create a board that draws spawns from `rng`, then reset it
    ///
    /// Panics if either dimension is zero.
    pub fn with_rng(height: usize, width: usize, rng: R) -> Self {
        let traversals = Traversals::new(height, width);
        let mut board = Self {
            height,
            width,
            cells: vec![0; height * width],
            traversals,
            rng,
        };
        board.reset();
        board
    }

    /// Clear the grid and place the starting tiles
    pub fn reset(&mut self) {
        self.cells.fill(0);
        for _ in 0..INITIAL_TILES {
            self.new_tile();
        }
        debug!("board reset ({}x{})", self.height, self.width);
    }

    /// Slide and merge every line toward `direction`
    ///
    /// Spawns a tile only if at least one cell changed value; a blocked move
    /// leaves the board untouched.
    ///
    /// Panics, before writing any cell, if a merge would overflow [`Cell`].
    pub fn make_move(&mut self, direction: Direction) {
        let width = self.width;
        let merged: Vec<Vec<Cell>> = self
            .lines(direction)
            .iter()
            .map(|values| line::reduce(values))
            .collect();

        let mut changed = 0usize;
        for (line_cells, values) in self.traversals.lines(direction).zip(merged) {
            for ((row, col), value) in line_cells.zip(values) {
                let cell = &mut self.cells[row * width + col];
                if *cell != value {
                    *cell = value;
                    changed += 1;
                }
            }
        }

        let spawned = changed > 0;
        if spawned {
            self.new_tile();
        }
        debug!(
            "move {}: {} cells changed, spawned={}",
            direction.as_str(),
            changed,
            spawned
        );
    }

    /// Place a 2 (90%) or 4 (10%) on a random empty cell
    ///
    /// Does nothing when the board is full.
    pub fn new_tile(&mut self) {
        let empty: Vec<Pos> = self.empty_cells().collect();
        if empty.is_empty() {
            return;
        }

        let (row, col) = empty[self.rng.gen_range(0..empty.len())];
        let value = if self.rng.gen_range(0..SPAWN_ROLL_SIDES) == SPAWN_RARE_ROLL {
            SPAWN_TILE_RARE
        } else {
            SPAWN_TILE
        };
        self.set_tile(row, col, value);
        trace!("spawned {} at ({}, {})", value, row, col);
    }
}

impl<R> Board<R> {
    /// Calculate flat index from (row, col), panicking when out of range
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "tile ({}, {}) out of range for {}x{} board",
            row,
            col,
            self.height,
            self.width
        );
        row * self.width + col
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the value at (row, col)
    ///
    /// Panics if the position is outside the board.
    pub fn get_tile(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set the value at (row, col)
    ///
    /// Panics if the position is outside the board.
    pub fn set_tile(&mut self, row: usize, col: usize, value: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 0)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    /// Count the number of empty cells on the board
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    /// Highest tile value on the board (0 when empty)
    pub fn highest_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Values along each line of `direction`, in traversal order
    pub fn lines(&self, direction: Direction) -> Vec<Vec<Cell>> {
        self.traversals
            .lines(direction)
            .map(|cells| {
                cells
                    .map(|(row, col)| self.cells[row * self.width + col])
                    .collect()
            })
            .collect()
    }

    /// Whether sliding toward `direction` would change the board
    pub fn can_move_in(&self, direction: Direction) -> bool {
        self.lines(direction)
            .iter()
            .any(|values| line::is_reducible(values))
    }

    /// Whether any direction would change the board
    pub fn can_move(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_move_in(dir))
    }

    /// True if no direction changes the board
    pub fn is_game_over(&self) -> bool {
        !self.can_move()
    }

    /// Capture a serializable view of the grid
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            height: self.height,
            width: self.width,
            rows: self.cells.chunks(self.width).map(<[Cell]>::to_vec).collect(),
            empty: self.count_empty(),
            highest: self.highest_tile(),
        }
    }
}

/// Rows separated by newlines, cells by single spaces
///
/// Debug output only: there is no header line and no trailing separator.
impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
