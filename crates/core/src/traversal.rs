//! Traversal module - map a direction to the lines it slides
//!
//! For a `H x W` board the table is fixed at construction:
//!
//! | Direction | Offset | Initial cells |
//! |-----------|--------|---------------|
//! | Up | (+1, 0) | (0, c) for c in 0..W |
//! | Down | (-1, 0) | (H-1, c) for c in 0..W |
//! | Left | (0, +1) | (r, 0) for r in 0..H |
//! | Right | (0, -1) | (r, W-1) for r in 0..H |
//!
//! Walking `num_steps` cells from every initial cell of one direction
//! visits each board cell exactly once.

use crate::types::{Direction, Pos};

/// Immutable per-direction list of line start cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals {
    height: usize,
    width: usize,
    up: Vec<Pos>,
    down: Vec<Pos>,
    left: Vec<Pos>,
    right: Vec<Pos>,
}

impl Traversals {
    /// Build the table for a `height x width` board
    ///
    /// Panics if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "board dimensions must be positive, got {}x{}",
            height,
            width
        );
        Self {
            height,
            width,
            up: (0..width).map(|col| (0, col)).collect(),
            down: (0..width).map(|col| (height - 1, col)).collect(),
            left: (0..height).map(|row| (row, 0)).collect(),
            right: (0..height).map(|row| (row, width - 1)).collect(),
        }
    }

    /// Start cell of every line for `dir`
    pub fn initial_cells(&self, dir: Direction) -> &[Pos] {
        match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// Length of each line for `dir`
    pub fn num_steps(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Whether `start` is one of the initial cells of `dir`
    pub fn is_initial_cell(&self, start: Pos, dir: Direction) -> bool {
        let (row, col) = start;
        if row >= self.height || col >= self.width {
            return false;
        }
        match dir {
            Direction::Up => row == 0,
            Direction::Down => row == self.height - 1,
            Direction::Left => col == 0,
            Direction::Right => col == self.width - 1,
        }
    }

    /// Positions visited by the line starting at `start`
    ///
    /// Panics unless `start` is an initial cell of `dir`.
    pub fn line(&self, start: Pos, dir: Direction) -> LineCells {
        assert!(
            self.is_initial_cell(start, dir),
            "{:?} is not a {} line start on a {}x{} board",
            start,
            dir.as_str(),
            self.height,
            self.width
        );
        let (d_row, d_col) = dir.offset();
        LineCells {
            row: start.0 as isize,
            col: start.1 as isize,
            d_row,
            d_col,
            remaining: self.num_steps(dir),
        }
    }

    /// Every line for `dir`, in initial-cell order
    pub fn lines(&self, dir: Direction) -> impl Iterator<Item = LineCells> + '_ {
        self.initial_cells(dir)
            .iter()
            .map(move |&start| self.line(start, dir))
    }
}

/// Iterator over the cell positions of a single line
#[derive(Debug, Clone)]
pub struct LineCells {
    row: isize,
    col: isize,
    d_row: isize,
    d_col: isize,
    remaining: usize,
}

impl Iterator for LineCells {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.remaining == 0 {
            return None;
        }
        let pos = (self.row as usize, self.col as usize);
        self.row += self.d_row;
        self.col += self.d_col;
        self.remaining -= 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineCells {}
