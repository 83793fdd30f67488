//! Line module - slide and merge a single row or column
//!
//! A line is the sequence of cells visited while walking one row or column
//! from the edge tiles slide toward. Index 0 is that leading edge.
//!
//! Reduction runs in three passes:
//! 1. compact: pack non-zero cells to the front, keeping their order
//! 2. merge: one left-to-right scan, each equal adjacent pair doubles into
//!    the left slot and the scan skips past the consumed right slot
//! 3. compact again, closing the gaps the merge pass left behind
//!
//! A tile produced by a merge is never a merge source in the same call, so
//! `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.

use crate::types::Cell;

/// Pack all non-zero cells to the front, preserving order, zero-filling the tail
///
/// ```
/// use tui_2048_core::line::compact;
///
/// assert_eq!(compact(&[0, 2, 0, 4]), vec![2, 4, 0, 0]);
/// ```
pub fn compact(line: &[Cell]) -> Vec<Cell> {
    let mut out = vec![0; line.len()];
    let mut write = 0;
    for &cell in line {
        if cell != 0 {
            out[write] = cell;
            write += 1;
        }
    }
    out
}

/// Single left-biased merge scan over a compacted line
///
/// Zero pairs "merge" into zero, which is harmless: they only occur in the
/// zero-filled tail.
///
/// Panics if a merged value would not fit in a [`Cell`].
fn merge_pass(compacted: &[Cell]) -> Vec<Cell> {
    let len = compacted.len();
    let mut out = vec![0; len];
    let mut i = 0;
    while i < len {
        if i + 1 < len && compacted[i] == compacted[i + 1] {
            out[i] = compacted[i]
                .checked_mul(2)
                .unwrap_or_else(|| panic!("merging two {} tiles overflows Cell", compacted[i]));
            i += 2;
        } else {
            out[i] = compacted[i];
            i += 1;
        }
    }
    out
}

/// Slide and merge one line toward index 0
///
/// The result has the same length as `line`, with every zero at the end.
///
/// # Panics
///
/// Panics if two equal tiles above `Cell::MAX / 2` would merge.
///
/// ```
/// use tui_2048_core::line::reduce;
///
/// assert_eq!(reduce(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
/// assert_eq!(reduce(&[2, 2, 2, 0]), vec![4, 2, 0, 0]);
/// assert_eq!(reduce(&[0, 2, 0, 2]), vec![4, 0, 0, 0]);
/// ```
pub fn reduce(line: &[Cell]) -> Vec<Cell> {
    compact(&merge_pass(&compact(line)))
}

/// Whether reducing `line` would change it
pub fn is_reducible(line: &[Cell]) -> bool {
    reduce(line) != line
}
