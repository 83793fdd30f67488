//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 slide/merge rules and the board state.
//! It has **no dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, plus integration tests at the workspace root
//! - **Portable**: Any front-end can drive it through the public board operations
//!
//! # Module Structure
//!
//! - [`line`]: slide and merge of a single row or column
//! - [`traversal`]: direction to line-start table and line walker
//! - [`board`]: `height x width` grid with moves and random tile spawning
//! - [`snapshot`]: serializable view of a board for tracing
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as it can toward the chosen edge
//! - **Merge**: two equal tiles that meet combine into their sum; a tile merges
//!   at most once per move and the pair nearest the edge merges first
//! - **Spawn**: after a move that changed the board a new tile appears on a
//!   random empty cell: 2 with probability 9/10, 4 with probability 1/10
//! - **Blocked moves**: a move that changes nothing spawns nothing
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Board;
//! use tui_2048_types::Direction;
//!
//! // Create a seeded 4x4 game (two starting tiles)
//! let mut board = Board::new(4, 4, 12345);
//! assert_eq!(board.count_empty(), 14);
//!
//! // Slide
//! board.set_tile(0, 0, 2);
//! board.make_move(Direction::Left);
//!
//! // Inspect
//! println!("{}", board);
//! assert!(board.highest_tile() >= 2);
//! ```
//!
//! # Concurrency
//!
//! Operations mutate through `&mut self` and never block. Share a board across
//! threads by wrapping it in a `Mutex`.

pub mod board;
pub mod line;
pub mod snapshot;
pub mod traversal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use line::{compact, reduce};
pub use snapshot::BoardSnapshot;
pub use traversal::{LineCells, Traversals};
