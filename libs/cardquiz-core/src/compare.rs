//! Answer comparison by answer kind.

use crate::error::CompareError;
use crate::types::AnswerKind;

/// Compare a submitted answer to the expected answer.
///
/// - [`AnswerKind::Text`]: exact string equality, no normalization.
/// - [`AnswerKind::Integer`]: both sides parse as integers and compare
///   numerically, so `"05"` matches `"5"`.
/// - [`AnswerKind::Decimal`]: both sides parse as `f64` and compare exactly.
///
/// A side that does not parse as the required kind is a [`CompareError`],
/// never a silent `false`. Numeric parsing ignores surrounding whitespace;
/// text comparison does not.
pub fn compare(expected: &str, kind: AnswerKind, submitted: &str) -> Result<bool, CompareError> {
    match kind {
        AnswerKind::Text => Ok(expected == submitted),
        AnswerKind::Integer => Ok(parse_integer(expected)? == parse_integer(submitted)?),
        AnswerKind::Decimal => Ok(parse_decimal(expected)? == parse_decimal(submitted)?),
    }
}

fn parse_integer(value: &str) -> Result<i64, CompareError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| CompareError::InvalidInteger {
            value: value.to_string(),
        })
}

fn parse_decimal(value: &str) -> Result<f64, CompareError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CompareError::InvalidDecimal {
            value: value.to_string(),
        })
}
