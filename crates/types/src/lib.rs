//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, tracing tools, external front-ends).
//!
//! # Board Dimensions
//!
//! The classic 2048 board is 4x4, but the board accepts any positive
//! `height x width`. Rows are indexed top to bottom, columns left to right.
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_TILE` | 2 | Value of a regular spawned tile |
//! | `SPAWN_TILE_RARE` | 4 | Value of a rare spawned tile |
//! | `SPAWN_ROLL_SIDES` | 10 | Spawn roll is drawn from `0..10` |
//! | `SPAWN_RARE_ROLL` | 0 | The roll that produces `SPAWN_TILE_RARE` (1 in 10) |
//! | `INITIAL_TILES` | 2 | Tiles spawned by a reset |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Parse from string (case-insensitive, full name or initial)
//! let parsed = Direction::from_str("U").unwrap();
//! assert_eq!(parsed, Direction::Up);
//!
//! // Each direction walks its lines along a fixed offset
//! assert_eq!(Direction::Up.offset(), (1, 0));
//! assert_eq!(Direction::Right.offset(), (0, -1));
//!
//! assert_eq!(DEFAULT_HEIGHT, 4);
//! assert_eq!(DEFAULT_WIDTH, 4);
//! ```

/// Default board height (4 rows)
pub const DEFAULT_HEIGHT: usize = 4;

/// Default board width (4 columns)
pub const DEFAULT_WIDTH: usize = 4;

/// Number of tiles placed on the board by a reset
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawned tile
pub const SPAWN_TILE: Cell = 2;

/// Value of a rare spawned tile
pub const SPAWN_TILE_RARE: Cell = 4;

/// Spawn value roll is drawn uniformly from `0..SPAWN_ROLL_SIDES`
pub const SPAWN_ROLL_SIDES: u32 = 10;

/// The single roll outcome that yields `SPAWN_TILE_RARE`
pub const SPAWN_RARE_ROLL: u32 = 0;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - positive: tile value (a power of two by game convention, not enforced)
pub type Cell = u64;

/// A `(row, col)` position on the board
pub type Pos = (usize, usize);

/// The four slide directions
///
/// A direction names the edge tiles slide *toward*: `Up` packs every column
/// against row 0, `Left` packs every row against column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Per-step `(d_row, d_col)` used to walk one line of this direction
    ///
    /// The walk starts on the edge the tiles slide toward, so the first cell
    /// of every line is the one that leads the merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.offset(), (1, 0));
    /// assert_eq!(Direction::Down.offset(), (-1, 0));
    /// assert_eq!(Direction::Left.offset(), (0, 1));
    /// assert_eq!(Direction::Right.offset(), (0, -1));
    /// ```
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    /// True for `Up` and `Down`, whose lines run along columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
