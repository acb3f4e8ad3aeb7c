//! Depth-first backtracking completion of a partial board.

use log::trace;
use placenine_core::Board;

use crate::{SolveError, placement};

/// Completes `board` into a fully filled, valid grid.
///
/// The input board is not modified; the search runs on a private copy.
/// Empty cells are filled in row-major order, trying the candidates of
/// each cell in ascending digit order and undoing a tentative placement
/// whenever the branch below it dead-ends. A cell with a single
/// candidate is thereby placed without branching, and a cell with no
/// candidates fails the branch immediately.
///
/// The success path does not re-verify the completed grid: every digit
/// was checked legal at placement time, so a fully filled grid reached
/// here is valid by construction. Nothing may place a digit on the
/// search board without passing [`placement::check_placement`] first.
///
/// Worst-case running time is exponential in the number of empty cells;
/// no internal timeout is imposed.
///
/// # Errors
///
/// Returns [`SolveError::Unsolvable`] when the search exhausts every
/// branch with empty cells remaining.
pub fn solve(board: &Board) -> Result<Board, SolveError> {
    let mut working = board.clone();
    if fill_from_first_empty(&mut working) {
        Ok(working)
    } else {
        Err(SolveError::Unsolvable)
    }
}

/// String-level solve: validates `puzzle`, then completes it.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] verbatim when structural validation
/// fails, or [`SolveError::Unsolvable`] when the search exhausts.
///
/// # Examples
///
/// ```
/// use placenine_solver::solve_str;
///
/// let puzzle =
///     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
/// let solution = solve_str(puzzle).unwrap();
/// assert_eq!(solution.len(), 81);
/// assert!(!solution.contains('.'));
/// ```
pub fn solve_str(puzzle: &str) -> Result<String, SolveError> {
    let board: Board = puzzle.parse()?;
    Ok(solve(&board)?.to_string())
}

/// Recursive search step. Returns `true` when the board is complete.
///
/// On `false`, the board is restored exactly to its state at entry, so
/// an ancestor frame can try its own next candidate.
fn fill_from_first_empty(board: &mut Board) -> bool {
    let Some(coord) = board.first_empty() else {
        // Complete grid: valid by construction, no re-verification.
        return true;
    };

    for digit in placement::candidates(board, coord) {
        board.set(coord, digit);
        if fill_from_first_empty(board) {
            return true;
        }
        trace!("backtrack: removing {digit} from {coord}");
        board.clear(coord);
    }
    false
}

#[cfg(test)]
mod tests {
    use placenine_core::{Coord, ParseBoardError};

    use super::*;
    use crate::check::{SolvedStatus, check_solved};

    const PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    const SOLUTION: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    #[test]
    fn test_solves_reference_puzzle() {
        assert_eq!(solve_str(PUZZLE).unwrap(), SOLUTION);
    }

    #[test]
    fn test_solve_is_idempotent_on_solved_grid() {
        assert_eq!(solve_str(SOLUTION).unwrap(), SOLUTION);
    }

    #[test]
    fn test_solved_output_passes_conflict_audit() {
        let board = solve(&PUZZLE.parse().unwrap()).unwrap();
        assert_eq!(check_solved(&board), SolvedStatus::Solved);
    }

    #[test]
    fn test_empty_board_is_solvable() {
        let board = Board::default();
        let solved = solve(&board).unwrap();
        assert!(solved.is_complete());
        assert_eq!(check_solved(&solved), SolvedStatus::Solved);
    }

    #[test]
    fn test_unsolvable_puzzle() {
        // Reference scenario: force the first two cells of a solvable
        // puzzle to the same digit.
        let mut conflicted = String::from("11");
        conflicted.push_str(&PUZZLE[2..]);
        assert_eq!(solve_str(&conflicted), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_parse_errors_propagate_unchanged() {
        assert_eq!(
            solve_str(""),
            Err(SolveError::Parse(ParseBoardError::Empty))
        );
        assert_eq!(
            solve_str("123"),
            Err(SolveError::Parse(ParseBoardError::Length { len: 3 }))
        );
        let mut bad = String::from("x");
        bad.push_str(&PUZZLE[1..]);
        assert_eq!(
            solve_str(&bad),
            Err(SolveError::Parse(ParseBoardError::InvalidCharacter {
                ch: 'x',
                index: 0
            }))
        );
    }

    #[test]
    fn test_input_board_is_untouched() {
        let board: Board = PUZZLE.parse().unwrap();
        let before = board.clone();
        let _ = solve(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_failed_search_restores_board_state() {
        // The in-place search must undo every tentative placement on
        // the way out of a dead end.
        let mut conflicted = String::from("11");
        conflicted.push_str(&PUZZLE[2..]);
        let mut board: Board = conflicted.parse().unwrap();
        let before = board.clone();
        assert!(!fill_from_first_empty(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_solution_extends_the_puzzle() {
        let puzzle: Board = PUZZLE.parse().unwrap();
        let solved = solve(&puzzle).unwrap();
        for coord in Coord::all() {
            if let Some(digit) = puzzle.get(coord) {
                assert_eq!(solved.get(coord), Some(digit));
            }
        }
    }
}
