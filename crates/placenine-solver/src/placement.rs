//! Placement legality: may `digit` occupy `coord` on this board?
//!
//! Every check excludes the target cell's own occupant from the scan.
//! The solver re-validates cells that may already hold the digit being
//! tested (for example when auditing a completed grid cell by cell);
//! without the exclusion, every filled cell would conflict with itself.

use placenine_core::{Axis, Board, Coord, Digit, DigitSet, House};

/// The axes on which a placement conflicts, in row/column/region order.
///
/// Holds at most three entries; empty means the placement is legal.
pub type AxisConflicts = tinyvec::ArrayVec<[Axis; 3]>;

/// Returns `true` if `digit` does not occur in the given house at any
/// cell other than `coord` itself.
#[must_use]
pub fn check_house(board: &Board, house: House, coord: Coord, digit: Digit) -> bool {
    board
        .house_cells(house)
        .all(|(other, cell)| other == coord || cell != Some(digit))
}

/// Row legality of placing `digit` at `coord`.
#[must_use]
pub fn check_row_placement(board: &Board, coord: Coord, digit: Digit) -> bool {
    check_house(board, House::containing(coord, Axis::Row), coord, digit)
}

/// Column legality of placing `digit` at `coord`.
#[must_use]
pub fn check_col_placement(board: &Board, coord: Coord, digit: Digit) -> bool {
    check_house(board, House::containing(coord, Axis::Column), coord, digit)
}

/// Region legality of placing `digit` at `coord`.
#[must_use]
pub fn check_region_placement(board: &Board, coord: Coord, digit: Digit) -> bool {
    check_house(board, House::containing(coord, Axis::Region), coord, digit)
}

/// Returns the axes that reject placing `digit` at `coord`.
///
/// # Examples
///
/// ```
/// use placenine_core::{Axis, Board, Coord, Digit};
/// use placenine_solver::conflicts;
///
/// let puzzle = format!("1{}", ".".repeat(80));
/// let board: Board = puzzle.parse().unwrap();
///
/// // A4 shares only its row with the 1 at A1.
/// let axes = conflicts(&board, "A4".parse().unwrap(), Digit::D1);
/// assert_eq!(axes.as_slice(), [Axis::Row]);
/// ```
#[must_use]
pub fn conflicts(board: &Board, coord: Coord, digit: Digit) -> AxisConflicts {
    Axis::ALL
        .into_iter()
        .filter(|&axis| !check_house(board, House::containing(coord, axis), coord, digit))
        .collect()
}

/// Combined legality: row, column, and region all accept the placement.
#[must_use]
pub fn check_placement(board: &Board, coord: Coord, digit: Digit) -> bool {
    Axis::ALL
        .into_iter()
        .all(|axis| check_house(board, House::containing(coord, axis), coord, digit))
}

/// Computes the candidate set for `coord`: every digit whose combined
/// placement check passes against the current grid state.
///
/// Recomputed from the board on every call; candidate sets are never
/// cached across mutations.
#[must_use]
pub fn candidates(board: &Board, coord: Coord) -> DigitSet {
    Digit::ALL
        .into_iter()
        .filter(|&digit| check_placement(board, coord, digit))
        .collect()
}
