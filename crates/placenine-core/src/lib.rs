//! Core data structures for the placenine Sudoku engine.
//!
//! This crate owns the flat 81-cell grid representation and every
//! conversion between its addressing schemes:
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`digit_set`]: Bitmask sets of digits (candidate sets, draw pools)
//! - [`coord`]: Cell coordinates in zero-based, linear-index, and
//!   letter/number form
//! - [`house`]: Rows, columns, and 3×3 regions
//! - [`board`]: The 81-cell board, including parsing from and
//!   serialization to flat puzzle strings
//!
//! Parsing a puzzle string *is* the structural validator: a string that
//! converts to a [`Board`] is well-formed, and every rejection carries
//! one of the [`ParseBoardError`] reasons callers surface verbatim.
//!
//! # Examples
//!
//! ```
//! use placenine_core::{Board, Coord, Digit};
//!
//! let mut board = Board::default();
//! board.set(Coord::new(3, 0), Digit::D7);
//! assert_eq!(board.to_string().chars().nth(3), Some('7'));
//!
//! // Too short to be a puzzle.
//! assert!("12345".parse::<Board>().is_err());
//! ```

pub use self::{
    board::{Board, ParseBoardError},
    coord::{Coord, ParseCoordError},
    digit::Digit,
    digit_set::DigitSet,
    house::{Axis, House},
};

pub mod board;
pub mod coord;
pub mod digit;
pub mod digit_set;
pub mod house;
