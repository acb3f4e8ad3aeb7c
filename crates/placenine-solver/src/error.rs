use placenine_core::ParseBoardError;

/// Failures of the string-level solve operation.
///
/// Solving is total: a puzzle either produces a fully resolved grid or
/// one of these terminal, non-retryable errors. A partially filled grid
/// is never returned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle string failed structural validation; the validator's
    /// error is propagated unchanged.
    #[display("{_0}")]
    Parse(#[from] ParseBoardError),
    /// The search space was exhausted without completing the grid.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_surface_verbatim() {
        let err = SolveError::from(ParseBoardError::Length { len: 3 });
        assert_eq!(err.to_string(), "Expected puzzle to be 81 characters long");
        assert_eq!(
            SolveError::Unsolvable.to_string(),
            "Puzzle cannot be solved"
        );
    }
}
