//! Closed evaluator for arithmetic card identifiers.
//!
//! Arithmetic generators encode the whole exercise in the card identifier
//! (`"3+5"`, `"4*7"`, `"9/2"`) so the correct answer can be recomputed at
//! check time without server-side session state. The identifier grammar is
//! deliberately closed: one of three binary operators applied to two
//! integers, nothing else. There is no expression language and no dynamic
//! evaluation.

use crate::compare::compare;
use crate::error::{ArithmeticError, CompareError};
use crate::types::AnswerKind;
use thiserror::Error;

/// The operators an arithmetic card can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Mul,
    Div,
}

impl Op {
    /// Symbol used in identifiers and question text.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Card identifier for `lhs <op> rhs`, e.g. `"3+5"`.
    pub fn identifier(self, lhs: i64, rhs: i64) -> String {
        format!("{}{}{}", lhs, self.symbol(), rhs)
    }

    /// Human-readable question for `lhs <op> rhs`, e.g. `"3 + 5"`.
    pub fn question(self, lhs: i64, rhs: i64) -> String {
        format!("{} {} {}", lhs, self.symbol(), rhs)
    }
}

/// Result of evaluating an identifier.
///
/// Addition and multiplication stay integral; division is always floating
/// point, even when the operands divide evenly (`"8/2"` evaluates to `4.0`
/// and is answered as a decimal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

/// Errors from checking an answer against an arithmetic identifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Parse and evaluate an arithmetic card identifier.
///
/// The identifier must be exactly `<integer><op><integer>`; whitespace,
/// chained operators and anything outside the three known operators are
/// rejected. Integer overflow is an error rather than a wrap.
pub fn evaluate(id: &str) -> Result<Value, ArithmeticError> {
    let (lhs, op, rhs) = parse(id)?;

    let value = match op {
        Op::Add => lhs.checked_add(rhs).map(Value::Int),
        Op::Mul => lhs.checked_mul(rhs).map(Value::Int),
        Op::Div => Some(Value::Float(lhs as f64 / rhs as f64)),
    };

    value.ok_or_else(|| ArithmeticError::Overflow { id: id.to_string() })
}

/// Check a submitted answer against an arithmetic card identifier.
///
/// The identifier is re-evaluated and the result compared with the
/// submitted answer: integral values compare as integers, finite floating
/// values as decimals. Division answers must reproduce the exact
/// floating-point quotient; there is no tolerance, so `"7/3"` is only
/// matched by `2.3333333333333335`. A non-finite quotient (possible only
/// through a forged identifier such as `"3/0"`) has no usable answer type
/// and is an error.
///
/// This is the single checking path shared by every arithmetic generator.
pub fn check_answer(id: &str, submitted: &str) -> Result<bool, CheckError> {
    match evaluate(id)? {
        Value::Int(n) => Ok(compare(&n.to_string(), AnswerKind::Integer, submitted)?),
        Value::Float(x) if x.is_finite() => {
            Ok(compare(&x.to_string(), AnswerKind::Decimal, submitted)?)
        }
        Value::Float(_) => Err(ArithmeticError::UnexpectedAnswerType { id: id.to_string() }.into()),
    }
}

/// Split an identifier into `(lhs, op, rhs)`.
///
/// The operator search starts at the second character so a leading minus
/// sign stays part of the left operand.
fn parse(id: &str) -> Result<(i64, Op, i64), ArithmeticError> {
    let malformed = || ArithmeticError::MalformedIdentifier { id: id.to_string() };

    let (index, op) = id
        .char_indices()
        .skip(1)
        .find_map(|(i, c)| Op::from_symbol(c).map(|op| (i, op)))
        .ok_or_else(malformed)?;

    let lhs = id[..index].parse::<i64>().map_err(|_| malformed())?;
    let rhs = id[index + 1..].parse::<i64>().map_err(|_| malformed())?;

    Ok((lhs, op, rhs))
}
