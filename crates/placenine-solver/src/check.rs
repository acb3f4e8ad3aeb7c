//! Conflict audit of a supposedly completed board.

use placenine_core::{Axis, Board};

use crate::placement::{AxisConflicts, conflicts};

/// Outcome of auditing a completed puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolvedStatus {
    /// Every cell is filled and no cell conflicts on any axis.
    Solved,
    /// At least one cell is still empty; the grid was never audited.
    Incomplete,
    /// The grid is filled but some cells conflict on the listed axes
    /// (deduplicated, in row/column/region order).
    Conflicted(AxisConflicts),
}

impl SolvedStatus {
    /// Returns `true` for [`SolvedStatus::Solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::Solved
    }
}

/// Audits a fully filled board cell by cell.
///
/// Returns [`SolvedStatus::Incomplete`] if any empty marker remains.
/// Otherwise every cell's occupant is re-checked against its row,
/// column, and region (its own occurrence excluded), and the union of
/// conflicting axes across all cells is reported.
///
/// # Examples
///
/// ```
/// use placenine_solver::{SolvedStatus, check_solved};
///
/// let solved =
///     "769235418851496372432178956174569283395842761628713549283657194516924837947381625";
/// let board = solved.parse().unwrap();
/// assert_eq!(check_solved(&board), SolvedStatus::Solved);
/// ```
#[must_use]
pub fn check_solved(board: &Board) -> SolvedStatus {
    if !board.is_complete() {
        return SolvedStatus::Incomplete;
    }

    let mut seen = [false; 3];
    for (coord, cell) in board.cells() {
        let Some(digit) = cell else {
            return SolvedStatus::Incomplete;
        };
        for axis in conflicts(board, coord, digit) {
            seen[axis as usize] = true;
        }
    }

    let axes: AxisConflicts = Axis::ALL
        .into_iter()
        .filter(|&axis| seen[axis as usize])
        .collect();
    if axes.is_empty() {
        SolvedStatus::Solved
    } else {
        SolvedStatus::Conflicted(axes)
    }
}
