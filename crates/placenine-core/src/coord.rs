//! Cell coordinates and their addressing schemes.
//!
//! A cell can be addressed three equivalent ways:
//!
//! - zero-based `(x, y)` pair (internal computation),
//! - linear index 0-80 in row-major order (`index = 9 * y + x`),
//! - letter/number form `A1`-`I9` (external interfaces: the letter is
//!   the row, the number the 1-based column).
//!
//! All conversions are total and invertible; out-of-range letters or
//! numbers are rejected with [`ParseCoordError`] rather than clamped.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A zero-based cell coordinate on the 9×9 board.
///
/// # Examples
///
/// ```
/// use placenine_core::Coord;
///
/// let coord: Coord = "A4".parse().unwrap();
/// assert_eq!((coord.x(), coord.y()), (3, 0));
/// assert_eq!(coord.index(), 3);
/// assert_eq!(coord.to_string(), "A4");
///
/// assert!("J1".parse::<Coord>().is_err());
/// assert!("A0".parse::<Coord>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Creates a coordinate from zero-based column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "coordinate out of range");
        Self { x, y }
    }

    /// Creates a coordinate from a linear index 0-80.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "linear index out of range");
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self::new(x, y)
    }

    /// Creates a coordinate from a row letter `'A'`-`'I'` and a 1-based
    /// column number.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCoordError`] when the letter or number is out of range.
    pub const fn from_letter_number(row: char, col: u8) -> Result<Self, ParseCoordError> {
        let y = match row {
            'A'..='I' => row as u8 - b'A',
            _ => return Err(ParseCoordError::RowOutOfRange(row)),
        };
        let x = match col {
            1..=9 => col - 1,
            _ => return Err(ParseCoordError::ColumnOutOfRange(col)),
        };
        Ok(Self { x, y })
    }

    /// Returns the zero-based column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the zero-based row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (`9 * y + x`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the row letter `'A'`-`'I'`.
    #[must_use]
    pub const fn row_letter(self) -> char {
        (b'A' + self.y) as char
    }

    /// Returns the 1-based column number.
    #[must_use]
    pub const fn col_number(self) -> u8 {
        self.x + 1
    }

    /// Returns the index 0-8 of the containing 3×3 region, left to
    /// right, top to bottom.
    #[must_use]
    pub const fn region(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Iterates over all 81 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col_number())
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCoordError::Malformed);
        };
        let Some(col) = col.to_digit(10) else {
            return Err(ParseCoordError::Malformed);
        };
        #[expect(clippy::cast_possible_truncation)]
        let col = col as u8;
        Self::from_letter_number(row, col)
    }
}

/// Rejection reasons for coordinates outside `A1`-`I9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordError {
    /// The input was not a single letter followed by a single digit.
    #[display("coordinate must be a row letter followed by a column number")]
    Malformed,
    /// The row letter was outside `A`-`I`.
    #[display("row letter out of range: {_0}")]
    RowOutOfRange(#[error(not(source))] char),
    /// The column number was outside 1-9.
    #[display("column number out of range: {_0}")]
    ColumnOutOfRange(#[error(not(source))] u8),
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_index_conversions() {
        assert_eq!(Coord::new(0, 0).index(), 0);
        assert_eq!(Coord::new(8, 8).index(), 80);
        assert_eq!(Coord::new(3, 0).index(), 3);
        assert_eq!(Coord::from_index(40), Coord::new(4, 4));
    }

    #[test]
    fn test_letter_number_conversions() {
        let coord = Coord::from_letter_number('C', 1).unwrap();
        assert_eq!((coord.x(), coord.y()), (0, 2));
        assert_eq!(coord.row_letter(), 'C');
        assert_eq!(coord.col_number(), 1);

        assert_eq!(
            Coord::from_letter_number('J', 1),
            Err(ParseCoordError::RowOutOfRange('J'))
        );
        assert_eq!(
            Coord::from_letter_number('A', 0),
            Err(ParseCoordError::ColumnOutOfRange(0))
        );
        assert_eq!(
            Coord::from_letter_number('A', 10),
            Err(ParseCoordError::ColumnOutOfRange(10))
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("A4".parse::<Coord>(), Ok(Coord::new(3, 0)));
        assert_eq!("I9".parse::<Coord>(), Ok(Coord::new(8, 8)));
        assert!("".parse::<Coord>().is_err());
        assert!("A".parse::<Coord>().is_err());
        assert!("A10".parse::<Coord>().is_err());
        assert!("a4".parse::<Coord>().is_err());
        assert!("4A".parse::<Coord>().is_err());
    }

    #[test]
    fn test_region() {
        assert_eq!(Coord::new(0, 0).region(), 0);
        assert_eq!(Coord::new(4, 4).region(), 4);
        assert_eq!(Coord::new(8, 0).region(), 2);
        assert_eq!(Coord::new(0, 8).region(), 6);
        assert_eq!(Coord::new(8, 8).region(), 8);
    }

    #[test]
    fn test_all_covers_board_in_order() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), 81);
        for (i, coord) in all.iter().enumerate() {
            assert_eq!(coord.index(), i);
        }
    }

    proptest! {
        #[test]
        fn prop_index_round_trip(index in 0_usize..81) {
            prop_assert_eq!(Coord::from_index(index).index(), index);
        }

        #[test]
        fn prop_display_round_trip(x in 0_u8..9, y in 0_u8..9) {
            let coord = Coord::new(x, y);
            prop_assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
        }
    }
}
