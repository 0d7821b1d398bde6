//! Error types for cardquiz-core.

use thiserror::Error;

/// Errors from comparing a submitted answer to an expected one.
///
/// A value that does not parse as the required kind is an error, not a
/// wrong answer; callers decide how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("invalid answer format: {value:?} is not an integer")]
    InvalidInteger { value: String },

    #[error("invalid answer format: {value:?} is not a decimal")]
    InvalidDecimal { value: String },
}

/// Errors from parsing or evaluating an arithmetic card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The identifier is not `<integer><op><integer>` for a known operator.
    #[error("malformed card identifier {id:?}")]
    MalformedIdentifier { id: String },

    /// Integer addition or multiplication overflowed.
    #[error("arithmetic overflow evaluating {id:?}")]
    Overflow { id: String },

    /// The recomputed answer is not a usable value (a non-finite quotient,
    /// e.g. from a forged `a/0` identifier).
    #[error("unexpected answer type for card identifier {id:?}")]
    UnexpectedAnswerType { id: String },
}
