//! Serializable result shapes for the external interface.
//!
//! These structs serialize to exactly the JSON bodies a transport layer
//! returns verbatim: optional fields disappear when absent, and
//! error-bearing alternatives flatten to a bare `{"error": ...}` object.

use serde::Serialize;

/// Result of structural puzzle validation: `{ok, error?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateReport {
    /// `true` when the puzzle string is well-formed.
    pub ok: bool,
    /// The validator's message when `ok` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a single-cell placement check: `{valid, conflict?}` or
/// `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckReport {
    /// The placement was evaluated.
    Checked {
        /// `true` when no axis rejects the placement.
        valid: bool,
        /// The rejecting axes (`"row"`, `"column"`, `"region"`),
        /// omitted when the placement is valid.
        #[serde(skip_serializing_if = "Option::is_none")]
        conflict: Option<Vec<String>>,
    },
    /// The request never reached the checker.
    Error {
        /// The boundary or validator message.
        error: String,
    },
}

/// Result of a full solve: `{solution}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveReport {
    /// The puzzle was completed.
    Solved {
        /// The solved grid as an 81-character string.
        solution: String,
    },
    /// Validation failed or the search exhausted.
    Error {
        /// The validator's or solver's message.
        error: String,
    },
}

/// Result of auditing a completed puzzle: `{solved, error?, conflict?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSolveReport {
    /// `true` when the grid is complete and conflict-free.
    pub solved: bool,
    /// Why the audit could not pass (structural error, or the grid
    /// still contains empty cells).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The conflicting axes when the filled grid is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<Vec<String>>,
}
