//! Randomized puzzle generation for placenine.
//!
//! The generator builds a complete valid grid constructively, one cell at
//! a time in row-major order, drawing digits uniformly at random from a
//! shrinking pool and committing only draws that pass the combined
//! placement check. A cell whose pool empties means the random order so
//! far is a dead end; the whole grid is discarded and the fill restarts
//! from the first cell with fresh pools (las-vegas restart, no
//! backtracking within an attempt). Full regeneration is cheap at 9×9,
//! so restart probability is traded for simplicity.
//!
//! While filling, each committed cell is independently marked hidden with
//! probability one half; hidden cells become empty markers in the puzzle,
//! while the pre-masking grid is kept as the solution.
//!
//! # Examples
//!
//! ```
//! use placenine_generator::PuzzleGenerator;
//! use placenine_solver::solve;
//!
//! let mut generator = PuzzleGenerator::from_seed(7);
//! let generated = generator.generate();
//!
//! // Every generated puzzle is solvable by construction.
//! assert!(solve(&generated.puzzle).is_ok());
//! ```

use log::debug;
use placenine_core::{Board, Coord, Digit, DigitSet};
use placenine_solver::check_placement;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A generated puzzle together with the grid it was masked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle with hidden cells replaced by empty markers.
    pub puzzle: Board,
    /// The complete valid grid the puzzle was derived from.
    pub solution: Board,
}

/// Randomized Sudoku puzzle generator.
///
/// Seeded generators are fully reproducible: the same seed yields the
/// same sequence of puzzles.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl PuzzleGenerator {
    /// Creates a generator seeded from thread-local entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Creates a reproducible generator from a numeric seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Creates a reproducible generator from a seed phrase.
    ///
    /// The phrase is hashed with SHA-256 and the leading bytes of the
    /// digest become the numeric seed, so any human-memorable string
    /// names a deterministic puzzle sequence.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut seed = [0_u8; 8];
        seed.copy_from_slice(&digest[..8]);
        Self::from_seed(u64::from_le_bytes(seed))
    }

    /// Generates one puzzle and its solution.
    ///
    /// Loops until a constructive fill attempt completes all 81 cells;
    /// each dead-end attempt is logged and discarded in full.
    pub fn generate(&mut self) -> GeneratedPuzzle {
        let mut attempts = 0_u32;
        loop {
            attempts += 1;
            if let Some(generated) = self.try_fill() {
                debug!("generated a puzzle in {attempts} attempt(s)");
                return generated;
            }
        }
    }

    /// Generates one puzzle as a flat 81-character string.
    pub fn generate_str(&mut self) -> String {
        self.generate().puzzle.to_string()
    }

    /// One constructive fill attempt; `None` means a dead end.
    fn try_fill(&mut self) -> Option<GeneratedPuzzle> {
        let mut board = Board::default();
        let mut hidden = [false; 81];

        for (index, hide) in hidden.iter_mut().enumerate() {
            let coord = Coord::from_index(index);
            let mut pool = DigitSet::FULL;
            loop {
                let Some(digit) = self.draw(pool) else {
                    debug!("dead end at {coord}; restarting the grid");
                    return None;
                };
                if check_placement(&board, coord, digit) {
                    board.set(coord, digit);
                    *hide = self.rng.random_bool(0.5);
                    break;
                }
                pool.remove(digit);
            }
        }

        let solution = board.clone();
        for (index, hide) in hidden.iter().enumerate() {
            if *hide {
                board.clear(Coord::from_index(index));
            }
        }
        Some(GeneratedPuzzle {
            puzzle: board,
            solution,
        })
    }

    /// Draws one digit uniformly at random from `pool`.
    fn draw(&mut self, pool: DigitSet) -> Option<Digit> {
        if pool.is_empty() {
            return None;
        }
        let k = self.rng.random_range(0..pool.len());
        pool.iter().nth(k)
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
