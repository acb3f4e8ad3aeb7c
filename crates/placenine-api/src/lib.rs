//! The external interface of the placenine engine.
//!
//! Everything here takes raw strings — puzzle, coordinate, value — and
//! returns structured reports ready for verbatim serialization, so a
//! transport layer (an HTTP handler, a CLI) never touches the core
//! types. Boundary parsing lives here too: coordinates must match
//! `[A-I][1-9]` (lowercase rows are normalized) and values must be
//! integers 1-9.
//!
//! # Examples
//!
//! ```
//! use placenine_api as api;
//!
//! let puzzle = format!("1{}", ".".repeat(80));
//! let report = api::check(&puzzle, "A4", "1");
//! assert_eq!(
//!     serde_json::to_value(&report).unwrap(),
//!     serde_json::json!({"valid": false, "conflict": ["row"]}),
//! );
//! ```

pub use self::report::{CheckReport, CheckSolveReport, SolveReport, ValidateReport};

use placenine_core::{Board, Coord, Digit, ParseBoardError};
use placenine_generator::PuzzleGenerator;
use placenine_solver::{
    SolvedStatus, check_solved, placement, solve_str,
};

pub mod report;

/// Boundary-layer rejections for placement-check requests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ApiError {
    /// The puzzle string failed structural validation.
    #[display("{_0}")]
    Puzzle(#[from] ParseBoardError),
    /// The coordinate did not match `[A-I][1-9]`.
    #[display("Invalid coordinate")]
    InvalidCoordinate,
    /// The value was not an integer 1-9.
    #[display("Invalid value")]
    InvalidValue,
}

/// Structurally validates a puzzle string.
#[must_use]
pub fn validate(puzzle: &str) -> ValidateReport {
    match puzzle.parse::<Board>() {
        Ok(_) => ValidateReport {
            ok: true,
            error: None,
        },
        Err(err) => ValidateReport {
            ok: false,
            error: Some(err.to_string()),
        },
    }
}

/// Checks row legality of placing `value` at `coordinate`.
///
/// # Errors
///
/// Returns [`ApiError`] when the puzzle, coordinate, or value fails
/// boundary parsing.
pub fn check_row_placement(puzzle: &str, coordinate: &str, value: &str) -> Result<bool, ApiError> {
    let (board, coord, digit) = parse_check_request(puzzle, coordinate, value)?;
    Ok(placement::check_row_placement(&board, coord, digit))
}

/// Checks column legality of placing `value` at `coordinate`.
///
/// # Errors
///
/// Returns [`ApiError`] when the puzzle, coordinate, or value fails
/// boundary parsing.
pub fn check_col_placement(puzzle: &str, coordinate: &str, value: &str) -> Result<bool, ApiError> {
    let (board, coord, digit) = parse_check_request(puzzle, coordinate, value)?;
    Ok(placement::check_col_placement(&board, coord, digit))
}

/// Checks region legality of placing `value` at `coordinate`.
///
/// # Errors
///
/// Returns [`ApiError`] when the puzzle, coordinate, or value fails
/// boundary parsing.
pub fn check_region_placement(
    puzzle: &str,
    coordinate: &str,
    value: &str,
) -> Result<bool, ApiError> {
    let (board, coord, digit) = parse_check_request(puzzle, coordinate, value)?;
    Ok(placement::check_region_placement(&board, coord, digit))
}

/// Full placement check: all three axes, reported as `{valid, conflict?}`.
#[must_use]
pub fn check(puzzle: &str, coordinate: &str, value: &str) -> CheckReport {
    let (board, coord, digit) = match parse_check_request(puzzle, coordinate, value) {
        Ok(parsed) => parsed,
        Err(err) => {
            return CheckReport::Error {
                error: err.to_string(),
            };
        }
    };

    let axes = placement::conflicts(&board, coord, digit);
    if axes.is_empty() {
        CheckReport::Checked {
            valid: true,
            conflict: None,
        }
    } else {
        CheckReport::Checked {
            valid: false,
            conflict: Some(axes.iter().map(|axis| axis.to_string()).collect()),
        }
    }
}

/// Solves a puzzle string, reporting `{solution}` or `{error}`.
#[must_use]
pub fn solve(puzzle: &str) -> SolveReport {
    match solve_str(puzzle) {
        Ok(solution) => SolveReport::Solved { solution },
        Err(err) => SolveReport::Error {
            error: err.to_string(),
        },
    }
}

/// Generates a random solvable puzzle string.
#[must_use]
pub fn generate() -> String {
    PuzzleGenerator::new().generate_str()
}

/// Audits a supposedly completed puzzle string.
#[must_use]
pub fn check_solve(puzzle: &str) -> CheckSolveReport {
    let board: Board = match puzzle.parse() {
        Ok(board) => board,
        Err(err) => {
            return CheckSolveReport {
                solved: false,
                error: Some(err.to_string()),
                conflict: None,
            };
        }
    };

    match check_solved(&board) {
        SolvedStatus::Solved => CheckSolveReport {
            solved: true,
            error: None,
            conflict: None,
        },
        SolvedStatus::Incomplete => CheckSolveReport {
            solved: false,
            error: Some("Puzzle is not solved".to_owned()),
            conflict: None,
        },
        SolvedStatus::Conflicted(axes) => CheckSolveReport {
            solved: false,
            error: None,
            conflict: Some(axes.iter().map(|axis| axis.to_string()).collect()),
        },
    }
}

/// Shared boundary parsing for the placement-check operations.
fn parse_check_request(
    puzzle: &str,
    coordinate: &str,
    value: &str,
) -> Result<(Board, Coord, Digit), ApiError> {
    let board: Board = puzzle.parse()?;
    let coord = coordinate
        .to_ascii_uppercase()
        .parse::<Coord>()
        .map_err(|_| ApiError::InvalidCoordinate)?;
    let digit = value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Digit::new)
        .ok_or(ApiError::InvalidValue)?;
    Ok((board, coord, digit))
}
