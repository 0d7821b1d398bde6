//! Core quiz library shared by the cardquiz backend.
//!
//! Provides:
//! - Answer comparison by answer kind (text, integer, decimal)
//! - A closed evaluator for arithmetic card identifiers (`"3+5"` and friends)
//! - Shared types (AnswerKind, GeneratedCard)
//!
//! Everything here is pure logic: no I/O, no async, no persistence.

pub mod arithmetic;
pub mod compare;
pub mod error;
pub mod types;

pub use arithmetic::{check_answer, evaluate, CheckError, Op, Value};
pub use compare::compare;
pub use error::{ArithmeticError, CompareError};
pub use types::{AnswerKind, GeneratedCard};
