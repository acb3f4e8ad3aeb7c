//! The 81-cell board and the puzzle-string validator.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Coord, Digit, House};

/// A 9×9 Sudoku board: 81 cells in row-major order, each holding a digit
/// or nothing.
///
/// [`Board::from_str`] is the structural validator for flat puzzle
/// strings. The accepted character class is exactly `.0123456789`; `.`
/// marks an empty cell, and `0` is tolerated as a second empty marker —
/// a legacy permissiveness the reference behavior depends on, so it must
/// not be tightened. Serialization via [`Display`] always writes `.` for
/// empty cells.
///
/// # Examples
///
/// ```
/// use placenine_core::{Board, Coord, Digit, ParseBoardError};
///
/// let board: Board = ".".repeat(81).parse().unwrap();
/// assert!(board.get(Coord::new(0, 0)).is_none());
///
/// assert_eq!("".parse::<Board>(), Err(ParseBoardError::Empty));
/// assert_eq!(
///     "123".parse::<Board>(),
///     Err(ParseBoardError::Length { len: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// The board with every cell empty.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Returns the digit at `coord`, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, coord: Coord) -> Option<Digit> {
        self.cells[coord.index()]
    }

    /// Places `digit` at `coord`, replacing any previous occupant.
    pub const fn set(&mut self, coord: Coord, digit: Digit) {
        self.cells[coord.index()] = Some(digit);
    }

    /// Empties the cell at `coord`.
    pub const fn clear(&mut self, coord: Coord) {
        self.cells[coord.index()] = None;
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Coord> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Coord::from_index)
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Digit>)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::from_index(i), *cell))
    }

    /// Iterates over the nine cells of `house` in house order.
    pub fn house_cells(&self, house: House) -> impl Iterator<Item = (Coord, Option<Digit>)> {
        house.coords().map(|coord| (coord, self.get(coord)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<Coord> for Board {
    type Output = Option<Digit>;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBoardError::Empty);
        }
        // Length is rejected before the character class so that callers
        // always see the more specific of the two errors.
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::Length { len });
        }

        let mut cells = [None; 81];
        for (index, ch) in s.chars().enumerate() {
            cells[index] = match ch {
                '.' | '0' => None,
                '1'..='9' => Digit::from_char(ch),
                _ => return Err(ParseBoardError::InvalidCharacter { ch, index }),
            };
        }
        Ok(Self { cells })
    }
}

/// Structural rejection reasons for puzzle strings.
///
/// The display strings are the exact messages surfaced to external
/// callers, so they are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input string was empty.
    #[display("Required field missing")]
    Empty,
    /// The input string was not exactly 81 characters.
    #[display("Expected puzzle to be 81 characters long")]
    Length {
        /// The actual character count.
        len: usize,
    },
    /// A character outside `.0123456789` was found.
    #[display("Invalid characters in puzzle")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its position in the input string.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    #[test]
    fn test_parse_valid_puzzle() {
        let board: Board = SOLVED.parse().unwrap();
        assert!(board.is_complete());
        assert_eq!(board.get(Coord::new(0, 0)), Some(Digit::D7));
        assert_eq!(board.get(Coord::new(8, 8)), Some(Digit::D5));
    }

    #[test]
    fn test_empty_input_rejected_first() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::Empty));
    }

    #[test]
    fn test_length_rejected_before_characters() {
        // Invalid characters *and* wrong length: length wins.
        assert_eq!(
            "xyz".parse::<Board>(),
            Err(ParseBoardError::Length { len: 3 })
        );
        assert_eq!(
            ".".repeat(80).parse::<Board>(),
            Err(ParseBoardError::Length { len: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Board>(),
            Err(ParseBoardError::Length { len: 82 })
        );
    }

    #[test]
    fn test_invalid_character_reported_with_position() {
        let mut s = ".".repeat(81);
        s.replace_range(40..41, "x");
        assert_eq!(
            s.parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { ch: 'x', index: 40 })
        );
    }

    #[test]
    fn test_zero_is_accepted_as_empty() {
        // Legacy permissiveness: '0' passes validation and reads as empty.
        let s = format!("0{}", ".".repeat(80));
        let board: Board = s.parse().unwrap();
        assert_eq!(board.get(Coord::new(0, 0)), None);
        assert_eq!(board.to_string().chars().next(), Some('.'));
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = SOLVED.parse().unwrap();
        assert_eq!(board.to_string(), SOLVED);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut board: Board = SOLVED.parse().unwrap();
        assert_eq!(board.first_empty(), None);
        board.clear(Coord::from_index(50));
        board.clear(Coord::from_index(10));
        assert_eq!(board.first_empty(), Some(Coord::from_index(10)));
        assert_eq!(board.empty_count(), 2);
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::default();
        let coord = Coord::new(4, 4);
        board.set(coord, Digit::D3);
        assert_eq!(board[coord], Some(Digit::D3));
        board.set(coord, Digit::D8);
        assert_eq!(board[coord], Some(Digit::D8));
        board.clear(coord);
        assert_eq!(board[coord], None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseBoardError::Empty.to_string(),
            "Required field missing"
        );
        assert_eq!(
            ParseBoardError::Length { len: 3 }.to_string(),
            "Expected puzzle to be 81 characters long"
        );
        assert_eq!(
            ParseBoardError::InvalidCharacter { ch: 'x', index: 0 }.to_string(),
            "Invalid characters in puzzle"
        );
    }

    proptest! {
        #[test]
        fn prop_wrong_length_always_rejected(s in "[.0-9]{0,120}") {
            let len = s.chars().count();
            prop_assume!(len != 81);
            let expected = if s.is_empty() {
                ParseBoardError::Empty
            } else {
                ParseBoardError::Length { len }
            };
            prop_assert_eq!(s.parse::<Board>(), Err(expected));
        }

        #[test]
        fn prop_display_round_trips(s in "[1-9.]{81}") {
            let board: Board = s.parse().unwrap();
            prop_assert_eq!(board.to_string(), s);
        }
    }
}
