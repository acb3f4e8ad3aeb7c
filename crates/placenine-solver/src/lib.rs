//! Constraint checking and backtracking search for placenine boards.
//!
//! Three layers, all operating on [`placenine_core::Board`]:
//!
//! - [`placement`]: per-axis and combined placement legality plus
//!   candidate-set computation (the constraint checker)
//! - [`solve`]: depth-first backtracking completion of a partial board
//! - [`check`]: conflict audit of a supposedly completed board
//!
//! Every operation owns a private copy of the grid, so concurrent
//! callers never share mutable state.

pub use self::{
    check::{SolvedStatus, check_solved},
    error::SolveError,
    placement::{
        AxisConflicts, candidates, check_col_placement, check_placement, check_region_placement,
        check_row_placement, conflicts,
    },
    solve::{solve, solve_str},
};

pub mod check;
mod error;
pub mod placement;
pub mod solve;
