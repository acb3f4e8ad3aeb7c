//! Rows, columns, and 3×3 regions.

use std::fmt::{self, Display};

use crate::Coord;

/// The three uniqueness axes of a Sudoku cell.
///
/// Displays as `"row"`, `"column"`, or `"region"` — the vocabulary used
/// in per-axis conflict reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Axis {
    /// The cell's row.
    #[default]
    Row,
    /// The cell's column.
    Column,
    /// The cell's 3×3 region.
    Region,
}

impl Axis {
    /// All axes in row, column, region order.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Region];

    /// Returns the conflict-report name of this axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Region => "region",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete house: a row, column, or region identified by its index 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate.
    Row(u8),
    /// A column identified by its x coordinate.
    Column(u8),
    /// A 3×3 region identified by its index, left to right, top to bottom.
    Region(u8),
}

impl House {
    /// Returns the house of the given axis that contains `coord`.
    #[must_use]
    pub const fn containing(coord: Coord, axis: Axis) -> Self {
        match axis {
            Axis::Row => Self::Row(coord.y()),
            Axis::Column => Self::Column(coord.x()),
            Axis::Region => Self::Region(coord.region()),
        }
    }

    /// Returns which axis this house belongs to.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Row(_) => Axis::Row,
            Self::Column(_) => Axis::Column,
            Self::Region(_) => Axis::Region,
        }
    }

    /// Returns the coordinate of the `i`-th cell (0-8) of this house.
    ///
    /// # Panics
    ///
    /// Panics if the house index or `i` is not in the range 0-8.
    #[must_use]
    pub const fn cell(self, i: u8) -> Coord {
        assert!(i < 9);
        match self {
            Self::Row(y) => Coord::new(i, y),
            Self::Column(x) => Coord::new(x, i),
            Self::Region(index) => {
                assert!(index < 9);
                Coord::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
            }
        }
    }

    /// Iterates over the nine coordinates of this house.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..9).map(move |i| self.cell(i))
    }
}
