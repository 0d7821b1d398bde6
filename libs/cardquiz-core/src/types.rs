//! Core types for the quiz domain.

use serde::{Deserialize, Serialize};

/// How a submitted answer is compared to the expected one.
///
/// Stored cards carry one of the three-letter codes `str`, `num` or `dec`;
/// those codes are kept as the wire/storage form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKind {
    /// Exact string equality.
    #[serde(rename = "str")]
    Text,
    /// Numeric comparison after parsing both sides as integers.
    #[serde(rename = "num")]
    Integer,
    /// Numeric comparison after parsing both sides as floating point.
    #[serde(rename = "dec")]
    Decimal,
}

impl Default for AnswerKind {
    fn default() -> Self {
        Self::Text
    }
}

impl AnswerKind {
    /// Storage code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "str",
            Self::Integer => "num",
            Self::Decimal => "dec",
        }
    }

    /// Parse from a storage code.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "str" => Some(Self::Text),
            "num" => Some(Self::Integer),
            "dec" => Some(Self::Decimal),
            _ => None,
        }
    }
}

/// A card produced by a generator for one request/response round trip.
///
/// The `id` is self-describing: whatever a generator needs to verify an
/// answer later must be encoded in it, because nothing about the card is
/// kept server-side between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCard {
    pub id: String,
    pub question: String,
}

impl GeneratedCard {
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
        }
    }
}
