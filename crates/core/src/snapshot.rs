use serde::Serialize;

use crate::types::Cell;

/// Point-in-time view of a board for tracing and external front-ends.
///
/// Write-only: nothing in this crate reads a snapshot back into a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    pub height: usize,
    pub width: usize,
    pub rows: Vec<Vec<Cell>>,
    pub empty: usize,
    pub highest: Cell,
}

impl BoardSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
